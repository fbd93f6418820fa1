// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity results.
use serde::{Deserialize, Serialize};

use super::Stage;
use crate::{CardSet, HoleHand, Score};

/// A player outcome for one board completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Outcome {
    Win,
    Lose,
    Tie,
}

/// Classifies each player given the players scores for a completion.
///
/// The completion is a tie only when all players have the same score, if
/// some but not all players share the best score each of them wins.
pub(super) fn outcomes(scores: &[Score]) -> impl Iterator<Item = Outcome> + '_ {
    let max = scores.iter().max().copied();
    let tie = scores.iter().all(|s| Some(*s) == max);

    scores.iter().map(move |s| {
        if tie {
            Outcome::Tie
        } else if Some(*s) == max {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    })
}

/// Per player counters for a range of completions.
#[derive(Debug, Default)]
pub(super) struct Counters {
    wins: Vec<usize>,
    losses: Vec<usize>,
    ties: Vec<usize>,
    outs: Vec<Vec<CardSet>>,
}

impl Counters {
    pub fn new(num_hands: usize) -> Self {
        Self {
            wins: vec![0; num_hands],
            losses: vec![0; num_hands],
            ties: vec![0; num_hands],
            outs: vec![Vec::new(); num_hands],
        }
    }

    /// Records the players outcomes for a completion.
    pub fn add(&mut self, scores: &[Score], completion: &CardSet) {
        for (player, outcome) in outcomes(scores).enumerate() {
            match outcome {
                Outcome::Win => {
                    self.wins[player] += 1;
                    self.outs[player].push(completion.clone());
                }
                Outcome::Lose => self.losses[player] += 1,
                Outcome::Tie => self.ties[player] += 1,
            }
        }
    }

    /// Adds the counters for the completions that follow this counters ones.
    pub fn merge(&mut self, other: Counters) {
        let pairs = self.wins.iter_mut().zip(other.wins).chain(
            self.losses
                .iter_mut()
                .zip(other.losses)
                .chain(self.ties.iter_mut().zip(other.ties)),
        );
        for (lhs, rhs) in pairs {
            *lhs += rhs;
        }

        for (lhs, rhs) in self.outs.iter_mut().zip(other.outs) {
            lhs.extend(rhs);
        }
    }

    /// Converts the counters to per hand rates.
    pub fn into_results(self, hands: &[HoleHand], total: usize) -> Vec<EquityResult> {
        let total = total as f64;
        hands
            .iter()
            .zip(self.outs)
            .enumerate()
            .map(|(player, (hand, outs))| {
                let win_rate = self.wins[player] as f64 / total;
                EquityResult {
                    hand: *hand,
                    win_rate,
                    lose_rate: self.losses[player] as f64 / total,
                    tie_rate: self.ties[player] as f64 / total,
                    outs: if win_rate < 0.5 { outs } else { Vec::new() },
                }
            })
            .collect()
    }
}

/// The equity of a hole hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// The player hand.
    pub hand: HoleHand,
    /// Fraction of completions where this hand has the best score.
    pub win_rate: f64,
    /// Fraction of completions where another hand has a better score.
    pub lose_rate: f64,
    /// Fraction of completions where all hands have the same score.
    pub tie_rate: f64,
    /// The completions where this hand wins in enumeration order, only for
    /// hands that win less than half of the time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outs: Vec<CardSet>,
}

/// The equities for all hands in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equities {
    stage: Stage,
    completions: usize,
    exact: bool,
    results: Vec<EquityResult>,
}

impl Equities {
    pub(super) fn new(
        stage: Stage,
        completions: usize,
        exact: bool,
        results: Vec<EquityResult>,
    ) -> Self {
        Self {
            stage,
            completions,
            exact,
            results,
        }
    }

    /// The stage these equities were computed for.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The number of board completions scored.
    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Returns false if the rates are a Monte Carlo estimate from sampled boards.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The results in the same order as the request hands.
    pub fn results(&self) -> &[EquityResult] {
        &self.results
    }

    /// Returns the result for a hand given its canonical string, as in `"KdKc"`.
    pub fn get(&self, hand: &str) -> Option<&EquityResult> {
        self.results.iter().find(|r| r.hand.to_string() == hand)
    }

    /// Iterates the results.
    pub fn iter(&self) -> std::slice::Iter<'_, EquityResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a Equities {
    type Item = &'a EquityResult;
    type IntoIter = std::slice::Iter<'a, EquityResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> Score {
        Score::eval(s.parse::<CardSet>().unwrap().as_slice())
    }

    #[test]
    fn full_field_tie() {
        let s = score("Ah Kd Qc Js 9d");
        let outcomes = outcomes(&[s, s, s]).collect::<Vec<_>>();
        assert_eq!(outcomes, [Outcome::Tie; 3]);
    }

    #[test]
    fn shared_best_score_wins() {
        let best = score("Ah Kd Qc Js Td");
        let worst = score("9h 9d Qc Js 2d");
        let outcomes = outcomes(&[best, worst, best]).collect::<Vec<_>>();
        assert_eq!(outcomes, [Outcome::Win, Outcome::Lose, Outcome::Win]);
    }

    #[test]
    fn counters_merge_in_order() {
        let best = score("Ah Kd Qc Js Td");
        let worst = score("9h 9d Qc Js 2d");
        let [c1, c2, c3, c4, c5] =
            ["2c", "3c", "4c", "5c", "6c"].map(|c| c.parse::<CardSet>().unwrap());

        let mut first = Counters::new(2);
        first.add(&[worst, best], &c1);
        first.add(&[best, worst], &c2);

        let mut second = Counters::new(2);
        second.add(&[best, best], &c3);
        second.add(&[worst, best], &c4);
        second.add(&[best, best], &c5);
        first.merge(second);

        let hands = ["9d9c", "KdKc"].map(|h| h.parse::<HoleHand>().unwrap());
        let results = first.into_results(&hands, 5);

        assert_eq!(results[0].outs, [c2]);
        assert!((results[0].win_rate - 0.2).abs() < 1e-9);
        assert!((results[0].lose_rate - 0.4).abs() < 1e-9);
        assert!((results[0].tie_rate - 0.4).abs() < 1e-9);

        assert_eq!(results[1].outs, [c1, c4]);
        assert!((results[1].win_rate - 0.4).abs() < 1e-9);
        assert!((results[1].lose_rate - 0.2).abs() < 1e-9);
        assert!((results[1].tie_rate - 0.4).abs() < 1e-9);
    }

    #[test]
    fn no_outs_for_leading_hands() {
        let best = score("Ah Kd Qc Js Td");
        let worst = score("9h 9d Qc Js 2d");
        let c1 = "2c".parse::<CardSet>().unwrap();
        let c2 = "3c".parse::<CardSet>().unwrap();

        let mut counters = Counters::new(2);
        counters.add(&[best, worst], &c1);
        counters.add(&[worst, best], &c2);

        let hands = ["9d9c", "KdKc"].map(|h| h.parse::<HoleHand>().unwrap());
        let results = counters.into_results(&hands, 2);
        assert!(results.iter().all(|r| r.outs.is_empty()));
        assert!(results.iter().all(|r| (r.win_rate - 0.5).abs() < 1e-9));
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity engine.
//!
//! Computes each player win, lose, and tie rates by scoring every player on
//! each completion of the unknown board cards. On the turn and on the flop all
//! the completions are enumerated and the results are exact, preflop the engine
//! scores a fixed number of distinct random boards and the results are a Monte
//! Carlo estimate.
//!
//! When a subset of the players share the best score they are all counted as
//! winners for that completion, a completion is a tie only when all players
//! have the same score.
use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, CardSet, EquityError, HoleHand, Score, error::conflict, nck};

mod parallel;
mod result;
pub use result::{Equities, EquityResult};

use result::Counters;

/// Equity engine config.
#[derive(Debug, Clone)]
pub struct EquityConfig {
    /// The number of random boards scored preflop, must be at least one.
    ///
    /// When there are no more boards than samples all the boards are
    /// enumerated and the results are exact.
    pub samples: usize,
    /// The number of parallel tasks used to score the boards.
    pub tasks: usize,
    /// The seed for sampling preflop boards, sampling is seeded from the OS
    /// when this is `None`.
    pub seed: Option<u64>,
}

impl EquityConfig {
    /// The default number of preflop samples.
    pub const DEFAULT_SAMPLES: usize = 10_000;
    /// The default number of tasks.
    pub const DEFAULT_TASKS: usize = 4;
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
            tasks: Self::DEFAULT_TASKS,
            seed: None,
        }
    }
}

/// The game stage given by the number of known board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// No board cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
}

impl Stage {
    /// The number of cards on a full board.
    pub const BOARD_SIZE: usize = 5;

    /// Returns the stage for the given number of board cards.
    pub fn from_board_len(len: usize) -> Result<Stage, EquityError> {
        match len {
            0 => Ok(Stage::Preflop),
            3 => Ok(Stage::Flop),
            4 => Ok(Stage::Turn),
            n => Err(EquityError::InvalidBoard(n)),
        }
    }

    /// The number of known board cards.
    pub fn board_len(&self) -> usize {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
        }
    }

    /// The number of board cards to complete.
    pub fn missing(&self) -> usize {
        Self::BOARD_SIZE - self.board_len()
    }

    /// Checks if all completions are enumerated for this stage.
    pub fn is_exhaustive(&self) -> bool {
        !matches!(self, Stage::Preflop)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
        };

        write!(f, "{stage}")
    }
}

/// A validated equity request.
#[derive(Debug)]
struct Scenario {
    stage: Stage,
    hands: Vec<HoleHand>,
    board: CardSet,
    deck: CardSet,
}

impl Scenario {
    fn new(
        stage: Stage,
        hands: &[CardSet],
        board: &CardSet,
        exposed: &CardSet,
    ) -> Result<Self, EquityError> {
        if hands.len() < 2 {
            return Err(EquityError::EmptyField(hands.len()));
        }

        if board.len() != stage.board_len() {
            return Err(EquityError::BoardArity {
                expected: stage.board_len(),
                found: board.len(),
            });
        }

        let hands = hands
            .iter()
            .map(|set| {
                HoleHand::try_from(set).map_err(|_| EquityError::HoleArity {
                    hand: set.to_string(),
                    count: set.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Any card used twice is not found in the deck the second time.
        let mut deck = CardSet::new_deck();
        for hand in &hands {
            deck.remove_all(&hand.cards()).map_err(conflict)?;
        }
        deck.remove_all(board).map_err(conflict)?;
        deck.remove_all(exposed).map_err(conflict)?;

        if deck.len() < stage.missing() {
            return Err(EquityError::NotEnoughCards {
                needed: stage.missing(),
                available: deck.len(),
            });
        }

        Ok(Self {
            stage,
            hands,
            board: board.clone(),
            deck,
        })
    }

    /// Scores the completions and updates the counters.
    fn score<I>(&self, completions: I) -> Counters
    where
        I: IntoIterator<Item = CardSet>,
    {
        let mut counters = Counters::new(self.hands.len());
        let mut cards: Vec<Card> = Vec::with_capacity(2 + Stage::BOARD_SIZE);
        let mut scores = Vec::with_capacity(self.hands.len());

        for completion in completions {
            scores.clear();
            for hand in &self.hands {
                cards.clear();
                cards.extend(hand.cards());
                cards.extend(&self.board);
                cards.extend(&completion);
                scores.push(Score::eval(&cards));
            }

            counters.add(&scores, &completion);
        }

        counters
    }
}

/// Computes players equities.
#[derive(Debug, Default)]
pub struct EquityEngine {
    config: EquityConfig,
}

impl EquityEngine {
    /// Creates an engine with the given config.
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    /// The engine config.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Equities on the turn, the board must have four cards.
    ///
    /// All river cards are enumerated, outs are single cards.
    pub fn equities(
        &self,
        hands: &[CardSet],
        board: &CardSet,
        exposed: &CardSet,
    ) -> Result<Equities, EquityError> {
        self.run(Stage::Turn, hands, board, exposed)
    }

    /// Equities on the flop, the board must have three cards.
    ///
    /// All turn and river pairs are enumerated, outs are two cards.
    pub fn flop_equities(
        &self,
        hands: &[CardSet],
        board: &CardSet,
        exposed: &CardSet,
    ) -> Result<Equities, EquityError> {
        self.run(Stage::Flop, hands, board, exposed)
    }

    /// Equities before the flop.
    ///
    /// The rates are a Monte Carlo estimate from `samples` distinct random
    /// boards, outs are five cards boards.
    pub fn preflop_equities(
        &self,
        hands: &[CardSet],
        exposed: &CardSet,
    ) -> Result<Equities, EquityError> {
        self.run(Stage::Preflop, hands, &CardSet::new(), exposed)
    }

    /// Equities for the stage given by the number of board cards.
    pub fn board_equities(
        &self,
        hands: &[CardSet],
        board: &CardSet,
        exposed: &CardSet,
    ) -> Result<Equities, EquityError> {
        let stage = Stage::from_board_len(board.len())?;
        self.run(stage, hands, board, exposed)
    }

    fn run(
        &self,
        stage: Stage,
        hands: &[CardSet],
        board: &CardSet,
        exposed: &CardSet,
    ) -> Result<Equities, EquityError> {
        let scenario = Scenario::new(stage, hands, board, exposed)?;
        let num_tasks = self.config.tasks.max(1);
        let missing = stage.missing();
        let total = nck(scenario.deck.len(), missing);

        if !stage.is_exhaustive() && self.config.samples == 0 {
            return Err(EquityError::NoSamples);
        }

        // Enumerate when sampling would draw every board anyway.
        let exact = stage.is_exhaustive() || self.config.samples >= total;

        let (completions, counters) = if exact {
            debug!(
                "Enumerating {total} {stage} completions for {} hands with {num_tasks} tasks",
                scenario.hands.len()
            );

            let combinations = scenario.deck.combinations(missing);
            let counters = parallel::par_chunks(num_tasks, total, |_, start, len| {
                let mut chunk = combinations.clone();
                chunk.seek(start);
                scenario.score(chunk.take(len))
            });

            (total, counters)
        } else {
            let samples = self.sample(&scenario.deck, missing);
            debug!(
                "Scoring {} sampled {stage} completions for {} hands with {num_tasks} tasks",
                samples.len(),
                scenario.hands.len()
            );

            let counters = parallel::par_chunks(num_tasks, samples.len(), |_, start, len| {
                scenario.score(samples[start..start + len].iter().cloned())
            });

            (samples.len(), counters)
        };

        let mut counters = counters.into_iter();
        let mut merged = counters
            .next()
            .unwrap_or_else(|| Counters::new(scenario.hands.len()));
        counters.for_each(|c| merged.merge(c));

        let results = merged.into_results(&scenario.hands, completions);
        Ok(Equities::new(scenario.stage, completions, exact, results))
    }

    /// Draws distinct random completions of size k from the deck.
    fn sample(&self, deck: &CardSet, k: usize) -> Vec<CardSet> {
        let count = self.config.samples.min(nck(deck.len(), k));
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut seen = AHashSet::with_capacity(count);
        let mut samples = Vec::with_capacity(count);
        let mut draws = 0;

        while samples.len() < count {
            let sample = deck.sample(&mut rng, k);
            draws += 1;
            if seen.insert(sample.clone()) {
                samples.push(sample);
            }
        }

        debug!("Sampled {count} distinct completions in {draws} draws");
        samples
    }
}

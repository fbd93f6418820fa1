// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand score types and evaluation.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::tally::Tally;
use crate::{Card, Suit, best_five_of_suit};

/// The hand category, from high card to royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The score of the best five cards hand.
///
/// Scores compare by category first and then by the tiebreak rank values, left
/// to right, unused tiebreaks are zero. Two hands with equal scores split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score {
    rank: HandRank,
    tiebreaks: [u8; 5],
}

impl Score {
    /// Evaluates the best five cards hand out of 5, 6, or 7 cards.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval(cards: &[Card]) -> Score {
        assert!(
            (5..=7).contains(&cards.len()),
            "5 <= cards={} <= 7",
            cards.len()
        );

        let tally = Tally::new(cards);

        if let Some(top) = tally.straight_flush() {
            return if top == 14 {
                Score::new(HandRank::RoyalFlush, &[])
            } else {
                Score::new(HandRank::StraightFlush, &run(top))
            };
        }

        if let Some(quads) = tally.ranks_with(4).next() {
            let kicker = tally.kickers(&[quads]).next().unwrap_or(0);
            return Score::new(HandRank::FourOfAKind, &[quads, kicker]);
        }

        // Take the highest trips and the highest other rank that can fill a pair,
        // this can be a second trips.
        if let Some(trips) = tally.ranks_with(3).next() {
            if let Some(pair) = tally.ranks_with(2).find(|&v| v != trips) {
                return Score::new(HandRank::FullHouse, &[trips, pair]);
            }
        }

        if let Some(best) = Suit::suits().find_map(|s| best_five_of_suit(cards, s)) {
            return Score::new(HandRank::Flush, &best.map(|c| c.rank().value()));
        }

        if let Some(top) = tally.straight() {
            return Score::new(HandRank::Straight, &run(top));
        }

        if let Some(trips) = tally.ranks_with(3).next() {
            let mut values = vec![trips];
            values.extend(tally.kickers(&[trips]).take(2));
            return Score::new(HandRank::ThreeOfAKind, &values);
        }

        let mut pairs = tally.ranks_with(2);
        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => {
                let kicker = tally.kickers(&[high, low]).next().unwrap_or(0);
                Score::new(HandRank::TwoPair, &[high, low, kicker])
            }
            (Some(pair), None) => {
                let mut values = vec![pair];
                values.extend(tally.kickers(&[pair]).take(3));
                Score::new(HandRank::OnePair, &values)
            }
            _ => {
                let kickers = tally.ranks_with(1).take(5).collect::<Vec<_>>();
                Score::new(HandRank::HighCard, &kickers)
            }
        }
    }

    fn new(rank: HandRank, values: &[u8]) -> Score {
        let mut tiebreaks = [0; 5];
        for (t, v) in tiebreaks.iter_mut().zip(values) {
            *t = *v;
        }

        Score { rank, tiebreaks }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak rank values, highest priority first.
    pub fn tiebreaks(&self) -> [u8; 5] {
        self.tiebreaks
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreaks)
    }
}

/// The run values for a straight with the given top, the wheel ace is last.
fn run(top: u8) -> [u8; 5] {
    if top == 5 {
        [5, 4, 3, 2, 14]
    } else {
        [top, top - 1, top - 2, top - 3, top - 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardSet;

    fn eval(s: &str) -> Score {
        Score::eval(s.parse::<CardSet>().unwrap().as_slice())
    }

    fn assert_score(s: &str, rank: HandRank, tiebreaks: [u8; 5]) {
        let score = eval(s);
        assert_eq!(score.rank(), rank, "{s}");
        assert_eq!(score.tiebreaks(), tiebreaks, "{s}");
    }

    #[test]
    fn royal_flush() {
        assert_score("Ah Kh Qh Jh Th", HandRank::RoyalFlush, [0; 5]);
        assert_score("Ah Kh Qh Jh Th 9h 2c", HandRank::RoyalFlush, [0; 5]);
        assert_score("As Ks Qs Js Ts Ad Ac", HandRank::RoyalFlush, [0; 5]);
    }

    #[test]
    fn straight_flush() {
        assert_score("9h 8h 7h 6h 5h", HandRank::StraightFlush, [9, 8, 7, 6, 5]);
        assert_score(
            "Kd Qd Jd Td 9d 8d Ac",
            HandRank::StraightFlush,
            [13, 12, 11, 10, 9],
        );

        // Steel wheel.
        assert_score(
            "Ac 2c 3c 4c 5c Kd Kh",
            HandRank::StraightFlush,
            [5, 4, 3, 2, 14],
        );

        // A straight and a flush that are not a straight flush.
        assert_score("9h 8h 7h 6h 5d 2h", HandRank::Flush, [9, 8, 7, 6, 2]);
    }

    #[test]
    fn four_of_a_kind() {
        assert_score("9d 9c 9h 9s 2d", HandRank::FourOfAKind, [9, 2, 0, 0, 0]);
        assert_score(
            "9d 9c 9h 9s Kd Kc Kh",
            HandRank::FourOfAKind,
            [9, 13, 0, 0, 0],
        );
        assert_score(
            "2d 2c 2h 2s Ah 3c 3d",
            HandRank::FourOfAKind,
            [2, 14, 0, 0, 0],
        );
    }

    #[test]
    fn full_house() {
        assert_score("Kd Kc Kh 9s 9d", HandRank::FullHouse, [13, 9, 0, 0, 0]);
        assert_score(
            "9d 9c 9h Ks Kd Qh Qc",
            HandRank::FullHouse,
            [9, 13, 0, 0, 0],
        );

        // Two trips, the lower fills the pair.
        assert_score(
            "9d 9c 9h Ks Kd Kh 2c",
            HandRank::FullHouse,
            [13, 9, 0, 0, 0],
        );
    }

    #[test]
    fn flush() {
        assert_score("Ah 9h 7h 4h 2h", HandRank::Flush, [14, 9, 7, 4, 2]);
        assert_score(
            "Ah 9h 7h 4h 2h 3h Kd",
            HandRank::Flush,
            [14, 9, 7, 4, 3],
        );
        assert_score(
            "Ah 9h 7h 4h 2h Ad Ac",
            HandRank::Flush,
            [14, 9, 7, 4, 2],
        );
    }

    #[test]
    fn straight() {
        assert_score("Ah Kd Qc Js Td", HandRank::Straight, [14, 13, 12, 11, 10]);
        assert_score(
            "9h 8d 8c 7s 6d 5c 5h",
            HandRank::Straight,
            [9, 8, 7, 6, 5],
        );
        assert_score("Ah 2d 3c 4s 5d", HandRank::Straight, [5, 4, 3, 2, 14]);
        assert_score(
            "Ah 2d 3c 4s 5d 6h Kd",
            HandRank::Straight,
            [6, 5, 4, 3, 2],
        );
    }

    #[test]
    fn wheel_ordering() {
        let wheel = eval("Ah 2d 3c 4s 5d");
        let six_high = eval("6h 2d 3c 4s 5d");
        let ace_high = eval("Ah Kd 3c 4s 5d");
        let trips = eval("Ah Ad Ac 4s 5d");

        assert!(wheel < six_high);
        assert!(wheel > ace_high);
        assert!(wheel > trips);
    }

    #[test]
    fn three_of_a_kind() {
        assert_score("9d 9c 9h Ks 2d", HandRank::ThreeOfAKind, [9, 13, 2, 0, 0]);
        assert_score(
            "9d 9c 9h Ks 2d Qc 3h",
            HandRank::ThreeOfAKind,
            [9, 13, 12, 0, 0],
        );
    }

    #[test]
    fn two_pair() {
        assert_score("Kd Kc 9h 9s 2d", HandRank::TwoPair, [13, 9, 2, 0, 0]);

        // Three pairs, the third pair can be the kicker.
        assert_score(
            "Kd Kc 9h 9s 7d 7c 2h",
            HandRank::TwoPair,
            [13, 9, 7, 0, 0],
        );
        assert_score(
            "Kd Kc 9h 9s 2d 2c Ah",
            HandRank::TwoPair,
            [13, 9, 14, 0, 0],
        );
    }

    #[test]
    fn one_pair() {
        assert_score("Kd Kc 9h 7s 2d", HandRank::OnePair, [13, 9, 7, 2, 0]);
        assert_score(
            "2d 2c 9h 7s Ad Jc 4h",
            HandRank::OnePair,
            [2, 14, 11, 9, 0],
        );
    }

    #[test]
    fn high_card() {
        assert_score("Kd Jc 9h 7s 2d", HandRank::HighCard, [13, 11, 9, 7, 2]);
        assert_score(
            "Kd Jc 9h 7s 2d 3c 4h",
            HandRank::HighCard,
            [13, 11, 9, 7, 4],
        );
    }

    #[test]
    fn kickers_break_ties() {
        assert!(eval("Kd Kc 9h 7s 3d") > eval("Ks Kh 9c 7d 2c"));
        assert!(eval("Ad Ac Ah 7s 3d") < eval("As Ah Ac 8d 2c"));
        assert_eq!(eval("Kd Kc 9h 7s 2d"), eval("Ks Kh 9c 7d 2c"));

        // Board plays, the sixth and seventh cards don't matter.
        assert_eq!(
            eval("Ah Kd Qc Js 9d 2c 3h"),
            eval("Ah Kd Qc Js 9d 4c 3s")
        );
    }

    #[test]
    fn categories_order() {
        let quads = eval("2d 2c 2h 2s 3d");
        let full_house = eval("Ad Ac Ah Ks Kd");
        let flush = eval("Ah Kh Qh Jh 9h");
        let straight = eval("Ah Kd Qc Js Td");

        assert!(quads > full_house);
        assert!(full_house > flush);
        assert!(flush > straight);
        assert!(HandRank::RoyalFlush > HandRank::StraightFlush);
        assert_eq!(HandRank::HighCard as u8, 1);
        assert_eq!(HandRank::RoyalFlush as u8, 10);
    }

    #[test]
    fn adding_cards_never_lowers_score() {
        let hands = [
            "Ah Kd 9c 7s 2d",
            "9d 9c Ah 9h Jd",
            "5h 6h 7h 8d 2c",
            "Kd Kc 9h 9s 2d",
        ];

        let deck = CardSet::new_deck();
        for hand in hands {
            let cards = hand.parse::<CardSet>().unwrap();
            let score = Score::eval(cards.as_slice());
            for c in deck.iter().filter(|c| !cards.contains(**c)) {
                let mut more = cards.clone();
                more.push(*c);
                assert!(Score::eval(more.as_slice()) >= score, "{more}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn too_few_cards() {
        eval("Ah Kd 9c 7s");
    }

    #[test]
    fn score_to_string() {
        assert_eq!(
            eval("Kd Kc Kh 9s 9d").to_string(),
            "Full House [13, 9, 0, 0, 0]"
        );
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
    }
}

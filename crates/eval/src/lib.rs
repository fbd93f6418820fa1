// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker odds evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and an equity engine that
//! computes each player win, lose, and tie rates given the players hole cards,
//! the known board, and any exposed cards.
//!
//! To compare hands use [Score::eval] on the hand cards:
//!
//! ```
//! # use poker_odds_eval::*;
//! let set: CardSet = "9d 9c Ah 9h Jd".parse().unwrap();
//! let kings: CardSet = "Kd Kc Ah 9h Jd".parse().unwrap();
//! let v1 = Score::eval(set.as_slice());
//! let v2 = Score::eval(kings.as_slice());
//! assert!(v1 > v2);
//! ```
//!
//! and an [EquityEngine] to compute the equities of a scenario, on the turn
//! all the river cards are enumerated:
//!
//! ```
//! # use poker_odds_eval::*;
//! let hands = ["9d 9c", "Kd Kc"]
//!     .iter()
//!     .map(|h| h.parse::<CardSet>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let board: CardSet = "Ah 9h Jd 3d".parse().unwrap();
//!
//! let engine = EquityEngine::new(EquityConfig::default());
//! let equities = engine.equities(&hands, &board, &CardSet::new()).unwrap();
//!
//! let kings = equities.get("KdKc").unwrap();
//! assert!(kings.win_rate < 0.1);
//! assert_eq!(kings.outs.len(), 2);
//! ```
//!
//! Preflop the engine samples random boards, the results are a Monte Carlo
//! estimate (see [Equities::is_exact]).
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub use equity::{Equities, EquityConfig, EquityEngine, EquityResult, Stage};

pub mod eval;
pub use eval::{HandRank, Score};

mod error;
pub use error::EquityError;

// Reexport cards types.
pub use poker_odds_cards::{
    Card, CardError, CardSet, HoleHand, Rank, Suit, best_five_of_suit, nck,
};

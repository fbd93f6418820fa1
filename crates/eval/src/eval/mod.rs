// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates 5, 6, and 7 cards poker hands and returns the [Score] of the best
//! five cards hand contained in the given cards. Categories are detected from
//! rank and suit frequency tallies and a consecutive ranks scan, checking from
//! the strongest category down to a high card:
//!
//! ```
//! # use poker_odds_eval::*;
//! let wheel: CardSet = "Ah 2d 3c 4s 5h 9d Kc".parse().unwrap();
//! let six_high: CardSet = "2d 3c 4s 5h 6h 9d Kc".parse().unwrap();
//!
//! let s1 = Score::eval(wheel.as_slice());
//! let s2 = Score::eval(six_high.as_slice());
//! assert_eq!(s1.rank(), HandRank::Straight);
//! assert!(s2 > s1);
//! ```

mod score;
pub use score::{HandRank, Score};

mod tally;

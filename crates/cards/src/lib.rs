// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker odds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use poker_odds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! a [CardSet] type for building the deck, removing known cards, and
//! iterating through the k-cards combinations of the remaining cards.
//!
//! For example to iterate through all river cards after a flop and a turn:
//!
//! ```
//! # use poker_odds_cards::CardSet;
//! let mut deck = CardSet::new_deck();
//! let board: CardSet = "Ah 9h Jd 3d".parse().unwrap();
//! deck.remove_all(&board).unwrap();
//!
//! let mut counter = 0;
//! for river in deck.combinations(1) {
//!     assert_eq!(river.len(), 1);
//!     counter += 1;
//! }
//! assert_eq!(counter, 48);
//! ```
//!
//! and a [HoleHand] type for the two private cards of a player.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardSet, Combinations, Rank, Suit, best_five_of_suit, nck};

mod error;
pub use error::CardError;

mod hand;
pub use hand::HoleHand;

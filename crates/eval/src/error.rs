// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity request errors.
use thiserror::Error;

use crate::{Card, CardError};

/// Errors detected while validating an equity request.
///
/// Requests are validated before any board is enumerated, a failed request
/// returns no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// A card is used in more than one place.
    #[error("card {0} is used more than once")]
    Conflict(Card),
    /// A hole hand doesn't have two cards.
    #[error("hole hand '{hand}' has {count} cards, expected 2")]
    HoleArity {
        /// The hand cards.
        hand: String,
        /// The number of cards in the hand.
        count: usize,
    },
    /// The board has the wrong number of cards for the requested stage.
    #[error("board has {found} cards, expected {expected}")]
    BoardArity {
        /// The number of board cards for the stage.
        expected: usize,
        /// The number of board cards given.
        found: usize,
    },
    /// The board size doesn't match any stage.
    #[error("board has {0} cards, expected 0, 3, or 4")]
    InvalidBoard(usize),
    /// Less than two hands.
    #[error("at least two hole hands are required, got {0}")]
    EmptyField(usize),
    /// The remaining deck cannot fill the board.
    #[error("{needed} board cards needed but only {available} left in the deck")]
    NotEnoughCards {
        /// The number of missing board cards.
        needed: usize,
        /// The number of cards left in the deck.
        available: usize,
    },
    /// Preflop sampling configured with zero samples.
    #[error("preflop equities need at least one sample")]
    NoSamples,
    /// Invalid cards.
    #[error(transparent)]
    Card(#[from] CardError),
}

impl EquityError {
    /// Checks if this is a wrong cards count error.
    pub fn is_arity(&self) -> bool {
        matches!(
            self,
            EquityError::HoleArity { .. }
                | EquityError::BoardArity { .. }
                | EquityError::InvalidBoard(_)
        )
    }
}

/// Maps a card removal error to a conflict.
pub(crate) fn conflict(err: CardError) -> EquityError {
    match err {
        CardError::NotFound(card) | CardError::Duplicate(card) => EquityError::Conflict(card),
        err => EquityError::Card(err),
    }
}

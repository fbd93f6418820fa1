// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors from building or editing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card is not in the set.
    #[error("card {0} not found")]
    NotFound(Card),
    /// The card appears more than once.
    #[error("card {0} is repeated")]
    Duplicate(Card),
    /// The string is not a valid card.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// The cards are not a valid hole hand.
    #[error("invalid hole hand '{0}', expected two cards")]
    InvalidHand(String),
}

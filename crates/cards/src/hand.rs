// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hole cards.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, CardError, CardSet};

/// The two private cards of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HoleHand([Card; 2]);

impl HoleHand {
    /// Creates a hand from two cards, fails if the cards are the same.
    pub fn new(c1: Card, c2: Card) -> Result<Self, CardError> {
        if c1 == c2 {
            return Err(CardError::Duplicate(c1));
        }

        Ok(Self([c1, c2]))
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl TryFrom<&CardSet> for HoleHand {
    type Error = CardError;

    fn try_from(set: &CardSet) -> Result<Self, Self::Error> {
        match set.as_slice() {
            &[c1, c2] => HoleHand::new(c1, c2),
            _ => Err(CardError::InvalidHand(set.to_string())),
        }
    }
}

/// The canonical hand string, as in `"KdKc"`.
impl fmt::Display for HoleHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for HoleHand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HoleHand::try_from(&s.parse::<CardSet>()?)
    }
}

impl From<HoleHand> for String {
    fn from(hand: HoleHand) -> Self {
        hand.to_string()
    }
}

impl TryFrom<String> for HoleHand {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

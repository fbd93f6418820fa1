// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequency tallies.
use crate::{Card, Suit};

/// Bits for five consecutive ranks.
const RUN_MASK: u16 = 0x1f;

/// Rank and suit counts for a set of cards.
///
/// Rank masks have bit `v` set for each rank value `v` in 2..=14, aces also set
/// bit 1 so that the wheel is found by the same consecutive bits scan.
#[derive(Debug, Default)]
pub(super) struct Tally {
    counts: [u8; 15],
    ranks: u16,
    suits: [u16; 4],
    suit_counts: [u8; 4],
}

impl Tally {
    pub fn new(cards: &[Card]) -> Self {
        let mut tally = Self::default();
        for c in cards {
            let value = c.rank().value();
            let bits = rank_bits(value);
            let suit = c.suit() as usize;

            tally.counts[value as usize] += 1;
            tally.ranks |= bits;
            tally.suits[suit] |= bits;
            tally.suit_counts[suit] += 1;
        }

        tally
    }

    /// Rank values with at least `n` cards, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&v| self.counts[v as usize] >= n)
    }

    /// Rank values present excluding the given ones, highest first.
    pub fn kickers<'a>(&'a self, except: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        self.ranks_with(1).filter(move |v| !except.contains(v))
    }

    /// The highest straight top value from all ranks.
    pub fn straight(&self) -> Option<u8> {
        straight_top(self.ranks)
    }

    /// The highest straight top value among suits with five or more cards.
    pub fn straight_flush(&self) -> Option<u8> {
        Suit::suits()
            .filter(|&s| self.suit_counts[s as usize] >= 5)
            .filter_map(|s| straight_top(self.suits[s as usize]))
            .max()
    }
}

fn rank_bits(value: u8) -> u16 {
    if value == 14 {
        (1 << 14) | (1 << 1)
    } else {
        1 << value
    }
}

/// Scans runs from ace high down to the wheel.
fn straight_top(mask: u16) -> Option<u8> {
    (5..=14u8)
        .rev()
        .find(|&top| (mask >> (top - 4)) & RUN_MASK == RUN_MASK)
}

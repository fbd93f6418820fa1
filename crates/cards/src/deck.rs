// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is represented by its position in the canonical deck order:
///
/// ```text
///   id = rank * 4 + suit
///   rank = deuce=0,trey=1,four=2,five=3,...,ace=12
///   suit = clubs=0,diamonds=1,hearts=2,spades=3
/// ```
///
/// so that ordering cards by id sorts them rank-major and suit-minor.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(rank as u8 * 4 + suit as u8)
    }

    /// This card unique id in 0..52.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        // A card can only be built from a valid rank so the id is always < 52.
        Rank::from_index(self.0 >> 2).unwrap_or(Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::from_char(r), Suit::from_char(s)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(CardError::InvalidCard(format!("{r}{s}"))),
            },
            _ => Err(CardError::InvalidCard(s.to_string())),
        }
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank numeric value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank with the given numeric value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        value.checked_sub(2).and_then(Self::from_index)
    }

    fn from_index(idx: u8) -> Option<Rank> {
        Self::ALL.get(idx as usize).copied()
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Returns the five highest cards of the given suit, highest first, or `None`
/// if there are less than five cards of that suit.
pub fn best_five_of_suit(cards: &[Card], suit: Suit) -> Option<[Card; 5]> {
    let mut suited = cards
        .iter()
        .filter(|c| c.suit() == suit)
        .copied()
        .collect::<Vec<_>>();

    if suited.len() < 5 {
        return None;
    }

    suited.sort_unstable_by(|a, b| b.cmp(a));
    Some([suited[0], suited[1], suited[2], suited[3], suited[4]])
}

/// An ordered set of unique cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", try_from = "Vec<Card>")]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// The number of cards in a deck.
    pub const DECK_SIZE: usize = 52;

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a full 52 cards deck in canonical order.
    pub fn new_deck() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the set contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates the cards in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards as a slice.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Appends a card, returns false if the card was already in the set.
    pub fn push(&mut self, card: Card) -> bool {
        if self.contains(card) {
            false
        } else {
            self.cards.push(card);
            true
        }
    }

    /// Appends all cards not already in this set.
    pub fn extend<'a, I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = &'a Card>,
    {
        for c in cards {
            self.push(*c);
        }
    }

    /// Returns a new set with the cards of this set followed by `other` cards.
    pub fn union(&self, other: &CardSet) -> CardSet {
        let mut set = self.clone();
        set.extend(other);
        set
    }

    /// Sorts the cards in canonical deck order.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Removes a card from the set.
    pub fn remove(&mut self, card: Card) -> Result<(), CardError> {
        let idx = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(CardError::NotFound(card))?;
        self.cards.remove(idx);
        Ok(())
    }

    /// Removes each card in turn, fails on the first card not in the set.
    ///
    /// On failure the set is left unchanged.
    pub fn remove_all<'a, I>(&mut self, cards: I) -> Result<(), CardError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut set = self.clone();
        for c in cards {
            set.remove(*c)?;
        }

        *self = set;
        Ok(())
    }

    /// Returns the five highest cards of the given suit.
    pub fn best_five_of_suit(&self, suit: Suit) -> Option<[Card; 5]> {
        best_five_of_suit(&self.cards, suit)
    }

    /// Returns an iterator over all k-cards subsets in lexicographic order.
    pub fn combinations(&self, k: usize) -> Combinations<'_> {
        Combinations::new(&self.cards, k)
    }

    /// Draws k distinct random cards, the sample is returned in canonical order.
    ///
    /// Returns all the cards if k is larger than the set.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, k: usize) -> CardSet {
        let mut cards = self
            .cards
            .choose_multiple(rng, k)
            .copied()
            .collect::<Vec<_>>();
        cards.sort_unstable();
        Self { cards }
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards {
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

/// Parses cards in the `"Ah 9h Jd"` or `"Ah9hJd"` notation.
impl FromStr for CardSet {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(CardError::InvalidCard(s.trim().to_string()));
        }

        let cards = chars
            .chunks(2)
            .map(|c| c.iter().collect::<String>().parse())
            .collect::<Result<Vec<Card>, _>>()?;

        CardSet::try_from(cards)
    }
}

impl TryFrom<Vec<Card>> for CardSet {
    type Error = CardError;

    /// Builds a set from the given cards, fails if a card is repeated.
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut set = CardSet::new();
        for c in cards {
            if !set.push(c) {
                return Err(CardError::Duplicate(c));
            }
        }

        Ok(set)
    }
}

impl From<CardSet> for Vec<Card> {
    fn from(set: CardSet) -> Self {
        set.cards
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Iterator over the k-subsets of a cards slice.
///
/// Subsets are generated in lexicographic order of the positions in the source
/// slice, so `[c0, c1, c2]` choose 2 yields `c0c1`, `c0c2`, `c1c2`.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    cards: &'a [Card],
    idx: Vec<usize>,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    fn new(cards: &'a [Card], k: usize) -> Self {
        Self {
            cards,
            idx: (0..k).collect(),
            remaining: nck(cards.len(), k),
        }
    }

    /// Moves to the nth subset so that it is the next one returned.
    ///
    /// The position is counted from the first subset, the iterator ends if n
    /// is past the last one.
    pub fn seek(&mut self, n: usize) {
        let len = self.cards.len();
        let k = self.idx.len();
        let total = nck(len, k);
        if n >= total {
            self.remaining = 0;
            return;
        }

        // Skip the subsets that start with each lower position.
        let mut rank = n;
        let mut pos = 0;
        for i in 0..k {
            loop {
                let count = nck(len - pos - 1, k - i - 1);
                if rank < count {
                    break;
                }

                rank -= count;
                pos += 1;
            }

            self.idx[i] = pos;
            pos += 1;
        }

        self.remaining = total - n;
    }

    fn advance(&mut self) {
        let n = self.cards.len();
        let k = self.idx.len();

        // Find the rightmost position that can still move right.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.idx[i] < n - k + i {
                self.idx[i] += 1;
                for j in (i + 1)..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                return;
            }
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = CardSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let cards = self.idx.iter().map(|&i| self.cards[i]).collect();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(CardSet { cards })
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let consumed = nck(self.cards.len(), self.idx.len()) - self.remaining;
        self.seek(consumed.saturating_add(n));
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), and each partial product is itself a binomial.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

use crate::InvalidInput;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |ffffcdhs|
///   +--------+
///   f = face rank (ace=1,deuce=2,trey=3,...,king=13)
///   cdhs = suit of card
/// ```
///
/// Two cards are equal when they have the same face and suit, cards are
/// serialized as their two characters code.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card(u8);

impl Card {
    /// Create a card given a face and suit.
    pub const fn new(face: Face, suit: Suit) -> Card {
        Self(((face as u8) << 4) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        match self.0 >> 4 {
            1 => Face::Ace,
            2 => Face::Deuce,
            3 => Face::Trey,
            4 => Face::Four,
            5 => Face::Five,
            6 => Face::Six,
            7 => Face::Seven,
            8 => Face::Eight,
            9 => Face::Nine,
            10 => Face::Ten,
            11 => Face::Jack,
            12 => Face::Queen,
            13 => Face::King,
            _ => panic!("Invalid face 0x{:x}", self.0),
        }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0xf {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the numeric rank used to find straights, the ace ranks 1.
    #[inline]
    pub fn rank(&self) -> u8 {
        self.0 >> 4
    }

    /// Checks if this is a jack, queen, king or ace.
    pub fn is_face_card(&self) -> bool {
        matches!(self.face(), Face::Jack | Face::Queen | Face::King | Face::Ace)
    }

    /// Checks if this is a deuce to ten card.
    pub fn is_number_card(&self) -> bool {
        !self.is_face_card()
    }
}

impl FromStr for Card {
    type Err = InvalidInput;

    /// Parses a two characters code like `TH` or `2c`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let (Some(face), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidInput::CodeLength(code.to_string()));
        };

        let face = Face::from_char(face).ok_or_else(|| InvalidInput::Face(code.to_string()))?;
        let suit = Suit::from_char(suit).ok_or_else(|| InvalidInput::Suit(code.to_string()))?;
        Ok(Card::new(face, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face(), self.suit())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face(), self.suit())
    }
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Ace
    Ace = 1,
    /// Deuce
    Deuce,
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
}

impl Face {
    /// Returns all faces from ace to king.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// Parses a face symbol, ignoring case.
    pub fn from_char(c: char) -> Option<Face> {
        let face = match c.to_ascii_uppercase() {
            'A' => Face::Ace,
            '2' => Face::Deuce,
            '3' => Face::Trey,
            '4' => Face::Four,
            '5' => Face::Five,
            '6' => Face::Six,
            '7' => Face::Seven,
            '8' => Face::Eight,
            '9' => Face::Nine,
            'T' => Face::Ten,
            'J' => Face::Jack,
            'Q' => Face::Queen,
            'K' => Face::King,
            _ => return None,
        };

        Some(face)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Ace => 'A',
            Face::Deuce => '2',
            Face::Trey => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
        };

        write!(f, "{face}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit symbol, ignoring case.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().expect("deal from an empty deck")
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(f, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

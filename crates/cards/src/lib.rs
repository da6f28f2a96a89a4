// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use psychic_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Hearts);
//! assert_eq!(ah.rank(), 1);
//! assert!(ah.is_face_card());
//! ```
//!
//! to parse them from their two characters code, face first and suit second:
//!
//! ```
//! # use psychic_cards::{Card, Face, InvalidInput, Suit};
//! let td = "td".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Face::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "TD");
//!
//! assert!(matches!("1D".parse::<Card>(), Err(InvalidInput::Face(_))));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Face, Suit};

mod error;
pub use error::InvalidInput;

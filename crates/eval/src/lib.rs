// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker hand evaluator.
//!
//! A psychic poker player holds five cards and knows the five cards on top of
//! the deck. The player can discard any number of hand cards and replace them
//! with the same number of cards drawn from the top of the deck, so getting
//! the `k`-th deck card requires discarding `k` hand cards.
//!
//! This crate finds the best hand category the player can get. Parse a
//! [HandSet] from the ten cards codes, hand cards first, and evaluate it:
//!
//! ```
//! # use psychic_eval::*;
//! let set = "TH JH QC QD QS QH KH AH 2S 6S".parse::<HandSet>().unwrap();
//! let best = set.best_hand();
//! assert_eq!(best.category, Category::FourOfAKind);
//! assert_eq!(best.category.to_string(), "Four Of A Kind");
//!
//! // Keep the three queens, draw QH.
//! assert_eq!(best.cards.len(), 4);
//! ```
//!
//! or use [evaluate] with ten cards:
//!
//! ```
//! # use psychic_eval::*;
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! assert_eq!(evaluate(&cards), Ok(Category::StraightFlush));
//!
//! assert!(evaluate(&cards[..9]).is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, Category, evaluate};

pub mod group;

mod hand;
pub use hand::{DrawCost, HandSet};

// Reexport cards types.
pub use psychic_cards::{Card, Deck, Face, InvalidInput, Suit};

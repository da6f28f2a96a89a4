// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input validation errors.
use thiserror::Error;

use crate::Card;

/// Error returned when cards or a deal fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A card code that is not two characters long.
    #[error("invalid card '{0}': a card code has two characters")]
    CodeLength(String),
    /// A card code with an unknown face symbol.
    #[error("invalid card '{0}': face must be one of A, 2-9, T, J, Q, K")]
    Face(String),
    /// A card code with an unknown suit symbol.
    #[error("invalid card '{0}': suit must be one of C, D, H, S")]
    Suit(String),
    /// A deal with the wrong number of cards.
    #[error("expected {expected} cards but found {found}")]
    CardCount {
        /// The number of cards required.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
    /// A card that appears twice in a deal.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

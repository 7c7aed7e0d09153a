// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors for cards parsing and dealing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token with an unknown rank or suit character.
    #[error("Invalid card notation '{0}'")]
    InvalidCardNotation(String),
    /// Dealing more cards than the deck holds.
    #[error("Cannot deal {requested} cards from a deck with {remaining} cards")]
    InsufficientDeck {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

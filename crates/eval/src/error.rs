// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::Card;

/// Errors for invalid cards pools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pool doesn't have between 5 and 7 cards.
    #[error("Invalid pool size {0}, expected 5 to 7 cards")]
    InvalidPoolSize(usize),
    /// The same card appears twice in a pool.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
}

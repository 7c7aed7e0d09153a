// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandValue::classify] method that computes the category and
//! the tie-break ranks of a 5 cards hand, and [HandValue::eval] that finds the
//! best 5 cards hand out of a 5, 6, or 7 cards pool by checking all its 5 cards
//! subsets (21 for 7 cards).
//!
//! Hand values are totally ordered so that they can be compared directly, and
//! [rank_hands] groups hands with the same value using competition ranking.
mod describe;

mod hand;
pub use hand::{HandRank, HandValue};

mod rank;
pub use rank::{RankedHand, compare_hands, is_valid_order, rank_hands, ranks_by_index};

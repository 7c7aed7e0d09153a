// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand reading trainer hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator classifies
//! each 5 cards subset of a pool and keeps the best one, together with the
//! tie-break ranks and the five cards that make the hand so that UIs can
//! highlight them.
//!
//! To use the evaluator combine a board with some hole cards and use
//! [HandValue] to evaluate the hand and get its rank:
//!
//! ```
//! # use handread_eval::*;
//! let board = parse_cards("Kh 7d 3c 2s 9h").unwrap();
//! let v1 = HandValue::evaluate(&board, &parse_cards("Kd Ac").unwrap()).unwrap();
//! let v2 = HandValue::evaluate(&board, &parse_cards("9d 8h").unwrap()).unwrap();
//! assert!(v1 > v2);
//! assert_eq!(v1.rank(), HandRank::OnePair);
//! assert_eq!(v1.describe(), "Pair of Kings");
//! ```
//!
//! and [rank_hands] to rank several hands on the same board, hands with the
//! same strength share the same rank:
//!
//! ```
//! # use handread_eval::*;
//! let board = parse_cards("Ah Kd Qc Js Th").unwrap();
//! let hands: [[Card; 2]; 2] = [
//!     ["2c".parse().unwrap(), "3d".parse().unwrap()],
//!     ["9h".parse().unwrap(), "6s".parse().unwrap()],
//! ];
//! let ranked = rank_hands(&board, &hands).unwrap();
//! assert!(ranked.iter().all(|r| r.rank == 1));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    HandRank, HandValue, RankedHand, compare_hands, is_valid_order, rank_hands, ranks_by_index,
};

mod error;
pub use error::Error;

// Reexport cards types.
pub use handread_cards::{Card, Deck, Rank, Suit, parse_cards};

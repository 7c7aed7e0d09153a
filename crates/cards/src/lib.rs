// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand reading trainer cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handread_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal a board and two hands from a shuffled deck:
//!
//! ```
//! # use handread_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let board = deck.deal(5).unwrap();
//! let hands = [deck.deal(2).unwrap(), deck.deal(2).unwrap()];
//! assert_eq!(deck.count(), 43);
//! ```
//!
//! to iterate all 5-cards hands out of a 7 cards pool:
//!
//! ```
//! # use handread_cards::{parse_cards, for_each_subset};
//! let pool = parse_cards("Ah Kd Qc Js Th 2c 3d").unwrap();
//! let mut counter = 0;
//! for_each_subset(&pool, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 21);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{
    Card, Deck, Rank, Suit, for_each_subset, parse_cards, remove_cards, shuffle, sort_by_value,
};

mod error;
pub use error::Error;

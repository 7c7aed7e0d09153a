// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs counting.
use serde::{Deserialize, Serialize};

use handread_cards::{Card, Deck};
use handread_eval::{Error, HandValue};

use crate::find_duplicate;

/// The cards that turn a losing hand into a winning one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outs {
    cards: Vec<Card>,
}

impl Outs {
    /// The number of outs.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if there are no outs.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The out cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Counts the hero outs against the villain on a 3 or 4 cards board.
///
/// An out is an unseen card that, added to the board, makes the hero hand
/// strictly stronger than the villain hand. A hero that is already ahead has
/// no outs, a card that only makes a tie is not an out.
pub fn count_outs(board: &[Card], hero: &[Card; 2], villain: &[Card; 2]) -> Result<Outs, Error> {
    if let Some(card) = find_duplicate(board.iter().chain(hero).chain(villain)) {
        return Err(Error::DuplicateCard(card));
    }

    if HandValue::evaluate(board, hero)? > HandValue::evaluate(board, villain)? {
        return Ok(Outs::default());
    }

    let mut deck = Deck::default();
    deck.remove_all(board);
    deck.remove_all(hero);
    deck.remove_all(villain);

    let mut cards = Vec::new();
    let mut next_board = Vec::with_capacity(board.len() + 1);
    for card in deck {
        next_board.clear();
        next_board.extend_from_slice(board);
        next_board.push(card);

        if HandValue::evaluate(&next_board, hero)? > HandValue::evaluate(&next_board, villain)? {
            cards.push(card);
        }
    }

    Ok(Outs { cards })
}

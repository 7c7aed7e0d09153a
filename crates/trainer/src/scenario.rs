// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranking game scenarios.
use anyhow::{Result, anyhow, bail, ensure};
use serde::{Deserialize, Serialize};

use handread_cards::{Card, parse_cards};

use crate::find_duplicate;

/// A board with the hands to rank against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// The template name, random deals have no name.
    pub name: Option<String>,
    /// The community cards.
    pub board: Vec<Card>,
    /// The players hole cards.
    pub hands: Vec<[Card; 2]>,
}

impl Scenario {
    /// Creates a scenario checking that no card is dealt twice.
    pub fn new(board: Vec<Card>, hands: Vec<[Card; 2]>) -> Result<Self> {
        ensure!(
            board.len() <= 5,
            "A board has at most 5 cards, got {}",
            board.len()
        );

        if let Some(card) = find_duplicate(board.iter().chain(hands.iter().flatten())) {
            bail!("Card {card} dealt twice");
        }

        Ok(Self {
            name: None,
            board,
            hands,
        })
    }

    /// Parses a scenario from a board and hands notation.
    pub fn parse(board: &str, hands: &[&str]) -> Result<Self> {
        let board = parse_cards(board)?;
        let hands = hands
            .iter()
            .copied()
            .map(parse_hand)
            .collect::<Result<Vec<_>>>()?;
        Self::new(board, hands)
    }

    /// Sets the scenario name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Parses two hole cards, i.e. "Ah Kd".
pub fn parse_hand(s: &str) -> Result<[Card; 2]> {
    let cards = parse_cards(s)?;
    <[Card; 2]>::try_from(cards)
        .map_err(|cards| anyhow!("Expected 2 hole cards, got {} in '{s}'", cards.len()))
}

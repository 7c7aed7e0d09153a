// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Which hand wins game.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use handread_cards::{Card, parse_cards};
use handread_eval::{Error, HandValue, compare_hands};

use crate::{find_duplicate, parse_hand};

/// The result of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The first hand wins.
    Hand1,
    /// The second hand wins.
    Hand2,
    /// The hands split the pot.
    Tie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Hand1 => write!(f, "Hand 1 wins"),
            Verdict::Hand2 => write!(f, "Hand 2 wins"),
            Verdict::Tie => write!(f, "Tie"),
        }
    }
}

/// Two hands against a full board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duel {
    /// The community cards.
    pub board: Vec<Card>,
    /// The first hand hole cards.
    pub hand1: [Card; 2],
    /// The second hand hole cards.
    pub hand2: [Card; 2],
}

/// The graded answer to a duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelOutcome {
    /// Whether the answer matches the verdict.
    pub correct: bool,
    /// The actual result.
    pub verdict: Verdict,
    /// The first hand value.
    pub value1: HandValue,
    /// The second hand value.
    pub value2: HandValue,
}

impl Duel {
    /// Creates a new duel.
    pub fn new(board: Vec<Card>, hand1: [Card; 2], hand2: [Card; 2]) -> Self {
        Self {
            board,
            hand1,
            hand2,
        }
    }

    /// Parses a duel from cards notation.
    pub fn parse(board: &str, hand1: &str, hand2: &str) -> anyhow::Result<Self> {
        Ok(Self::new(
            parse_cards(board)?,
            parse_hand(hand1)?,
            parse_hand(hand2)?,
        ))
    }

    /// Returns the duel with the hands swapped.
    pub fn swap(self) -> Self {
        Self {
            board: self.board,
            hand1: self.hand2,
            hand2: self.hand1,
        }
    }

    /// Evaluates both hands.
    pub fn values(&self) -> Result<(HandValue, HandValue), Error> {
        let cards = self.board.iter().chain(&self.hand1).chain(&self.hand2);
        if let Some(card) = find_duplicate(cards) {
            return Err(Error::DuplicateCard(card));
        }

        Ok((
            HandValue::evaluate(&self.board, &self.hand1)?,
            HandValue::evaluate(&self.board, &self.hand2)?,
        ))
    }

    /// Returns which hand wins.
    pub fn winner(&self) -> Result<Verdict, Error> {
        let (value1, value2) = self.values()?;
        Ok(verdict(&value1, &value2))
    }

    /// Grades an answer.
    pub fn answer(&self, guess: Verdict) -> Result<DuelOutcome, Error> {
        let (value1, value2) = self.values()?;
        let verdict = verdict(&value1, &value2);
        Ok(DuelOutcome {
            correct: guess == verdict,
            verdict,
            value1,
            value2,
        })
    }
}

fn verdict(value1: &HandValue, value2: &HandValue) -> Verdict {
    match compare_hands(value1, value2) {
        Ordering::Greater => Verdict::Hand1,
        Ordering::Less => Verdict::Hand2,
        Ordering::Equal => Verdict::Tie,
    }
}

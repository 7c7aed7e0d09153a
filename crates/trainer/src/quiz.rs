// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs quiz.
use serde::{Deserialize, Serialize};

use handread_cards::Card;
use handread_eval::Error;

use crate::{Outs, OutsScenario, count_outs};

/// An outs quiz round.
#[derive(Debug, Clone)]
pub struct OutsRound {
    scenario: OutsScenario,
    outs: Outs,
}

/// The graded outs answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsResult {
    /// Whether the guess matches the outs count.
    pub correct: bool,
    /// The player guess.
    pub guess: usize,
    /// The outs count.
    pub expected: usize,
    /// The out cards.
    pub outs: Vec<Card>,
    /// How the outs are counted.
    pub explanation: String,
}

impl OutsRound {
    /// Creates a round counting the scenario outs.
    pub fn new(scenario: OutsScenario) -> Result<Self, Error> {
        let outs = count_outs(&scenario.board, &scenario.hero, &scenario.villain)?;
        Ok(Self { scenario, outs })
    }

    /// The round scenario.
    pub fn scenario(&self) -> &OutsScenario {
        &self.scenario
    }

    /// Grades the player guess against the counted outs.
    pub fn answer(&self, guess: usize) -> OutsResult {
        OutsResult {
            correct: guess == self.outs.count(),
            guess,
            expected: self.outs.count(),
            outs: self.outs.cards().to_vec(),
            explanation: self.scenario.explanation.clone(),
        }
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands ranking game.
use serde::{Deserialize, Serialize};

use handread_eval::{Error, RankedHand, is_valid_order, rank_hands, ranks_by_index};

use crate::Scenario;

/// A ranking round, the player picks the hands from the strongest to the
/// weakest.
#[derive(Debug, Clone)]
pub struct RankingRound {
    scenario: Scenario,
    ranked: Vec<RankedHand>,
    picks: Vec<usize>,
}

/// The result of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The index is out of range, already picked, or the round is over.
    Ignored,
    /// The hand has been picked at the given position.
    Picked {
        /// The hand index.
        index: usize,
        /// The pick position starting from 1.
        position: usize,
    },
    /// The last hand has been picked.
    Finished(Outcome),
}

/// The graded ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the picks order is a valid strongest first order.
    pub correct: bool,
    /// The picked hand indices.
    pub picks: Vec<usize>,
    /// For each pick whether it is in the right place relative to its
    /// neighbours.
    pub marks: Vec<bool>,
    /// The hands ranked strongest first.
    pub ranking: Vec<RankedHand>,
}

impl RankingRound {
    /// Creates a new round ranking the scenario hands.
    pub fn new(scenario: Scenario) -> Result<Self, Error> {
        let ranked = rank_hands(&scenario.board, &scenario.hands)?;
        Ok(Self {
            scenario,
            ranked,
            picks: Vec::new(),
        })
    }

    /// The round scenario.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The hands ranked strongest first.
    pub fn ranking(&self) -> &[RankedHand] {
        &self.ranked
    }

    /// The hands picked so far.
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    /// Checks if all hands have been picked.
    pub fn is_finished(&self) -> bool {
        self.picks.len() == self.ranked.len()
    }

    /// Picks the next strongest hand.
    pub fn select(mut self, index: usize) -> (Self, Selection) {
        if self.is_finished() || index >= self.ranked.len() || self.picks.contains(&index) {
            return (self, Selection::Ignored);
        }

        self.picks.push(index);
        if !self.is_finished() {
            let position = self.picks.len();
            return (self, Selection::Picked { index, position });
        }

        let outcome = self.outcome();
        (self, Selection::Finished(outcome))
    }

    fn outcome(&self) -> Outcome {
        let ranks = ranks_by_index(&self.ranked);
        let picked = self.picks.iter().map(|&idx| ranks[idx]).collect::<Vec<_>>();

        let marks = (0..picked.len())
            .map(|pos| {
                let after_prev = pos == 0 || picked[pos - 1] <= picked[pos];
                let before_next = pos + 1 == picked.len() || picked[pos] <= picked[pos + 1];
                after_prev && before_next
            })
            .collect();

        Outcome {
            correct: is_valid_order(&self.ranked, &self.picks),
            picks: self.picks.clone(),
            marks,
            ranking: self.ranked.clone(),
        }
    }
}

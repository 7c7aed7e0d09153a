// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Session score.
use serde::{Deserialize, Serialize};

/// The answers score for a training session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Consecutive correct answers.
    pub streak: u32,
    /// Total correct answers.
    pub correct: u32,
    /// Total answers.
    pub total: u32,
}

impl Session {
    /// Returns the session updated with an answer.
    pub fn record(self, correct: bool) -> Session {
        Session {
            streak: if correct { self.streak + 1 } else { 0 },
            correct: self.correct + u32::from(correct),
            total: self.total + 1,
        }
    }

    /// The percentage of correct answers, none if there are no answers.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| 100.0 * self.correct as f64 / self.total as f64)
    }
}

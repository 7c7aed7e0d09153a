// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand descriptions.
use std::fmt;

use crate::{HandRank, HandValue, Rank};

impl HandValue {
    /// Describes the hand, i.e. "Full House, Kings full of Eights".
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.kickers()) {
            (HandRank::StraightFlush, [Rank::Ace, ..]) => write!(f, "Royal Flush"),
            (HandRank::StraightFlush, [high, ..]) => {
                write!(f, "{}-High Straight Flush", high.name())
            }
            (HandRank::FourOfAKind, [quads, ..]) => {
                write!(f, "Four of a Kind, {}", quads.plural())
            }
            (HandRank::FullHouse, [trips, pair, ..]) => {
                write!(f, "Full House, {} full of {}", trips.plural(), pair.plural())
            }
            (HandRank::Flush, [high, ..]) => write!(f, "{}-High Flush", high.name()),
            (HandRank::Straight, [high, ..]) => write!(f, "{}-High Straight", high.name()),
            (HandRank::ThreeOfAKind, [trips, ..]) => {
                write!(f, "Three of a Kind, {}", trips.plural())
            }
            (HandRank::TwoPair, [high, low, ..]) => {
                write!(f, "Two Pair, {} and {}", high.plural(), low.plural())
            }
            (HandRank::OnePair, [pair, ..]) => write!(f, "Pair of {}", pair.plural()),
            (HandRank::HighCard, [high, ..]) => write!(f, "{} High", high.name()),
            (rank, _) => write!(f, "{rank}"),
        }
    }
}

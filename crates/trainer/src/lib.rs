// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand reading trainer.
//!
//! This crate builds the scenarios and the game modes on top of the hand
//! evaluator. A ranking round asks to order four hands from the strongest to
//! the weakest:
//!
//! ```
//! # use handread_trainer::{RankingRound, Scenario, Selection, Session};
//! let scenario = Scenario::parse("Kh Qd 7c 4s 2h", &["9c 9d", "Ks Jc", "Kc Jd", "6c 5d"]).unwrap();
//! let mut round = RankingRound::new(scenario).unwrap();
//!
//! for index in [2, 1, 0] {
//!     let (next, _) = round.select(index);
//!     round = next;
//! }
//!
//! let (_, selection) = round.select(3);
//! let Selection::Finished(outcome) = selection else {
//!     panic!("round not finished");
//! };
//! assert!(outcome.correct);
//!
//! let session = Session::default().record(outcome.correct);
//! assert_eq!(session.streak, 1);
//! ```
//!
//! a duel asks which of two hands wins:
//!
//! ```
//! # use handread_trainer::{Duel, Verdict};
//! let duel = Duel::parse("Ah Ad Ac As Kh", "Qc Jd", "Th 9s").unwrap();
//! assert_eq!(duel.winner().unwrap(), Verdict::Tie);
//! ```
//!
//! and the outs quiz asks how many cards win the hand on the river:
//!
//! ```
//! # use handread_trainer::count_outs;
//! # use handread_cards::parse_cards;
//! let board = parse_cards("Kh 9d 6c 3s").unwrap();
//! let hero = ["Ah".parse().unwrap(), "Qd".parse().unwrap()];
//! let villain = ["Kd".parse().unwrap(), "Jc".parse().unwrap()];
//! assert_eq!(count_outs(&board, &hero, &villain).unwrap().count(), 3);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::HashSet;

use handread_cards::Card;

pub mod catalog;
pub use catalog::{OutsScenario, outs_scenarios, teaching_scenarios};

mod duel;
pub use duel::{Duel, DuelOutcome, Verdict};

pub mod generate;
pub use generate::{generate_duel, random_deal, random_outs, ranking_scenario};

mod outs;
pub use outs::{Outs, count_outs};

mod quiz;
pub use quiz::{OutsResult, OutsRound};

mod ranking;
pub use ranking::{Outcome, RankingRound, Selection};

mod scenario;
pub use scenario::{Scenario, parse_hand};

mod session;
pub use session::Session;

/// Returns the first card that appears more than once.
pub(crate) fn find_duplicate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Card> {
    let mut seen = HashSet::default();
    cards.into_iter().find(|c| !seen.insert(**c)).copied()
}

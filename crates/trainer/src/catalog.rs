// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scenario catalogs.
//!
//! The teaching templates are hand picked ranking game scenarios, each one
//! shows a hand reading concept. The outs templates are turn spots for the
//! outs quiz. Templates are parsed and checked once on first access, an
//! invalid template is logged and skipped.
use anyhow::{Context, Result, bail, ensure};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use handread_cards::{Card, parse_cards};

use crate::{Scenario, count_outs, find_duplicate, parse_hand};

/// A turn spot where the hero is drawing against the villain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsScenario {
    /// The concept category.
    pub category: String,
    /// The template name.
    pub name: String,
    /// The turn board.
    pub board: Vec<Card>,
    /// The hero hole cards.
    pub hero: [Card; 2],
    /// The villain hole cards.
    pub villain: [Card; 2],
    /// The number of outs.
    pub correct_outs: usize,
    /// How the outs are counted.
    pub explanation: String,
}

struct TeachingTemplate {
    name: &'static str,
    board: &'static str,
    hands: [&'static str; 4],
}

impl TeachingTemplate {
    fn parse(&self) -> Result<Scenario> {
        let scenario = Scenario::parse(self.board, &self.hands)
            .with_context(|| format!("Teaching template '{}'", self.name))?;
        ensure!(
            scenario.board.len() == 5,
            "Teaching template '{}' board must have 5 cards",
            self.name
        );

        Ok(scenario.with_name(self.name))
    }
}

struct OutsTemplate {
    category: &'static str,
    name: &'static str,
    board: &'static str,
    hero: &'static str,
    villain: &'static str,
    correct_outs: usize,
    explanation: &'static str,
}

impl OutsTemplate {
    fn parse(&self) -> Result<OutsScenario> {
        let parse = || -> Result<OutsScenario> {
            let board = parse_cards(self.board)?;
            ensure!(
                board.len() == 4,
                "Board must have 4 cards, got {}",
                board.len()
            );

            let hero = parse_hand(self.hero)?;
            let villain = parse_hand(self.villain)?;
            if let Some(card) = find_duplicate(board.iter().chain(&hero).chain(&villain)) {
                bail!("Card {card} dealt twice");
            }

            Ok(OutsScenario {
                category: self.category.to_string(),
                name: self.name.to_string(),
                board,
                hero,
                villain,
                correct_outs: self.correct_outs,
                explanation: self.explanation.to_string(),
            })
        };

        parse().with_context(|| format!("Outs template '{}'", self.name))
    }
}

static TEACHING: LazyLock<Vec<Scenario>> = LazyLock::new(|| {
    TEACHING_TEMPLATES
        .iter()
        .filter_map(|t| match t.parse() {
            Ok(scenario) => Some(scenario),
            Err(e) => {
                warn!("Skipping {e:#}");
                None
            }
        })
        .collect()
});

static OUTS: LazyLock<Vec<OutsScenario>> = LazyLock::new(|| {
    OUTS_TEMPLATES
        .iter()
        .filter_map(|t| match t.parse() {
            Ok(scenario) => {
                check_outs(&scenario);
                Some(scenario)
            }
            Err(e) => {
                warn!("Skipping {e:#}");
                None
            }
        })
        .collect()
});

fn check_outs(scenario: &OutsScenario) {
    match count_outs(&scenario.board, &scenario.hero, &scenario.villain) {
        Ok(outs) if outs.count() != scenario.correct_outs => warn!(
            "Outs template '{}' lists {} outs, counted {}",
            scenario.name,
            scenario.correct_outs,
            outs.count()
        ),
        Ok(_) => {}
        Err(e) => warn!("Outs template '{}': {e}", scenario.name),
    }
}

/// The ranking game teaching scenarios.
pub fn teaching_scenarios() -> &'static [Scenario] {
    &TEACHING
}

/// The outs quiz scenarios.
pub fn outs_scenarios() -> &'static [OutsScenario] {
    &OUTS
}

static TEACHING_TEMPLATES: &[TeachingTemplate] = &[
    TeachingTemplate {
        name: "Kicker With One Pair",
        board: "Kh 7d 3c 2s 9h",
        hands: ["Kd Ac", "Ks Qc", "Kc Tc", "9d 8h"],
    },
    TeachingTemplate {
        name: "Kicker With Two Pair",
        board: "Qh Qd 8c 8s 2h",
        hands: ["Ac Kd", "Kh Js", "Jd Tc", "5s 4h"],
    },
    TeachingTemplate {
        name: "Straight Ignores Kickers",
        board: "9h 8d 7c 6s 2h",
        hands: ["Tc Ac", "Th Kd", "Ts 5c", "5d 4h"],
    },
    TeachingTemplate {
        name: "Board Plays Broadway",
        board: "Ah Kd Qc Js Th",
        hands: ["2c 3d", "4h 5s", "7d 8c", "9h 6s"],
    },
    TeachingTemplate {
        name: "Higher Two Pair",
        board: "Jh 9d 4c 2s 7h",
        hands: ["Jd 9c", "Jc 7s", "9h 7d", "4h 2d"],
    },
    TeachingTemplate {
        name: "Counterfeited Two Pair",
        board: "Kh Kd 8c 8s 3h",
        hands: ["Ac Qd", "8h 7s", "Qh Jd", "3c 3d"],
    },
    TeachingTemplate {
        name: "Set Versus Trips",
        board: "9h 9d Kc 5s 2h",
        hands: ["9c Ah", "9s Qd", "Kh Ks", "5h 5d"],
    },
    TeachingTemplate {
        name: "Flush Over Flush",
        board: "Jh 8h 4h 2h Kc",
        hands: ["Ah 3c", "Kh 5d", "Qh 9c", "Th 7s"],
    },
    TeachingTemplate {
        name: "Nut Flush",
        board: "Qs 9s 6s 3s Kd",
        hands: ["As 2c", "Ks Jd", "Ts 8h", "7s 5c"],
    },
    TeachingTemplate {
        name: "Four Flush Board",
        board: "Ah Kh Qh Jh 2c",
        hands: ["Th 3d", "9h 8s", "8h 7c", "7h 6d"],
    },
    TeachingTemplate {
        name: "Wheel Is Lowest",
        board: "5h 4d 3c 2s Kh",
        hands: ["7c 6h", "6d Ah", "Ac Qd", "Kd Qs"],
    },
    TeachingTemplate {
        name: "Broadway Beats Lower Straights",
        board: "Qh Jd Tc 9s 3h",
        hands: ["Ac Kh", "Kd 8s", "8h 7c", "Qs Qc"],
    },
    TeachingTemplate {
        name: "Straight On Board",
        board: "Th 9d 8c 7s 6h",
        hands: ["Ac Kd", "Jh 2s", "Qd 5c", "4h 3d"],
    },
    TeachingTemplate {
        name: "Trips Before Pair",
        board: "Qh Qd 7c 7s 2h",
        hands: ["Qc As", "7h Kd", "Ac Ad", "Kh Ks"],
    },
    TeachingTemplate {
        name: "Full House Versus Full House",
        board: "Kh Kd 8c 8s 3h",
        hands: ["Kc 2s", "8h 7d", "3c 3d", "Ah Qd"],
    },
    TeachingTemplate {
        name: "Quads Kicker",
        board: "9h 9d 9c 9s 2h",
        hands: ["Ac Kd", "Kh Qd", "Qc Js", "Jh Td"],
    },
    TeachingTemplate {
        name: "Straight Flush",
        board: "8h 7h 6h Kc 2d",
        hands: ["Ah Qh", "9h Th", "9c Td", "5h 4h"],
    },
    TeachingTemplate {
        name: "Overpair Versus Top Pair",
        board: "Jh 8d 5c 3s 2h",
        hands: ["Ac Ad", "Kh Kd", "Qc Qs", "Jd Tc"],
    },
    TeachingTemplate {
        name: "Higher Trips",
        board: "Qh 7d 7c 3s 2h",
        hands: ["Qd Qc", "7h As", "7s Kd", "Ac Kh"],
    },
    TeachingTemplate {
        name: "Quads On Board",
        board: "Ah Ad Ac As Kh",
        hands: ["Qc Jd", "Th 9s", "8d 7c", "6h 5d"],
    },
    TeachingTemplate {
        name: "Flush On Board",
        board: "Kd Qd Jd 9d 2d",
        hands: ["Ad 3h", "Td 8c", "8d 7s", "Ac As"],
    },
    TeachingTemplate {
        name: "Broken Straight",
        board: "Jh Td 9c 4s 2h",
        hands: ["Qc 8d", "Kh Qd", "8h 7c", "Ac Ks"],
    },
    TeachingTemplate {
        name: "Hidden Full House",
        board: "Kh Kd 9c 5s 2h",
        hands: ["Kc Qs", "9h 9d", "Ah Jd", "Qc Ts"],
    },
    TeachingTemplate {
        name: "Flush Versus Pair",
        board: "Kh Jh 8h 5c 2d",
        hands: ["Ac Kd", "Th 9h", "Ah 4h", "Qh 7h"],
    },
    TeachingTemplate {
        name: "Trips Versus Two Pair",
        board: "Th Td 7c 4s 2h",
        hands: ["Tc As", "Ah Ad", "Kh Kd", "7h 7d"],
    },
    TeachingTemplate {
        name: "High Card Battle",
        board: "Kh Jd 8c 4s 2h",
        hands: ["Ac Qd", "Ad Td", "As 9h", "Qh Tc"],
    },
    TeachingTemplate {
        name: "Second Kicker",
        board: "Ah Td 5c 3s 2h",
        hands: ["Ac Kd", "Ad Qh", "As Jc", "Kh Qd"],
    },
    TeachingTemplate {
        name: "Four To A Flush",
        board: "Ac Jc 8c 5c Kh",
        hands: ["Kc 2d", "Qc Td", "Tc 9h", "9c 7s"],
    },
    TeachingTemplate {
        name: "Who Fills Up",
        board: "Jh Jd 6c 6s 2h",
        hands: ["Jc As", "6h Kd", "2c 2d", "Ah Kh"],
    },
];

static OUTS_TEMPLATES: &[OutsTemplate] = &[
    OutsTemplate {
        category: "Pair Draw",
        name: "One Overcard",
        board: "Kh 9d 6c 3s",
        hero: "Ah Qd",
        villain: "Kd Jc",
        correct_outs: 3,
        explanation: "Only an Ace pairs you above their Kings, a Queen makes a pair that still loses. 3 Aces left = 3 outs.",
    },
    OutsTemplate {
        category: "Pair Draw",
        name: "Two Overcards",
        board: "Jh 8d 5c 2s",
        hero: "Ac Kd",
        villain: "Jd Tc",
        correct_outs: 6,
        explanation: "An Ace or a King beats their pair of Jacks. 3 Aces + 3 Kings = 6 outs.",
    },
    OutsTemplate {
        category: "Pair Draw",
        name: "Pair Your Kicker",
        board: "Ah Td 7c 3s",
        hero: "As Jh",
        villain: "Ad Qc",
        correct_outs: 3,
        explanation: "Both have Aces and their Queen kicker plays. A Jack gives you two pair. 3 Jacks = 3 outs.",
    },
    OutsTemplate {
        category: "Pair Draw",
        name: "Underpair Needs Set",
        board: "Kh Qd 8c 4s",
        hero: "Jh Jd",
        villain: "Kd Tc",
        correct_outs: 2,
        explanation: "Your Jacks lose to their Kings. Only the 2 Jacks left make a set = 2 outs.",
    },
    OutsTemplate {
        category: "Gutshot",
        name: "Basic Gutshot",
        board: "Jh 9d 5c 2s",
        hero: "Qc Th",
        villain: "Jd Kc",
        correct_outs: 10,
        explanation: "An Eight makes Q-J-T-9-8 (4), a King makes K-Q-J-T-9 (3 left, they hold the Kc) and a Queen pairs you above their Jacks (3). 4 + 3 + 3 = 10 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Made Broadway",
        board: "Ah Kd Tc 5s",
        hero: "Qh Jd",
        villain: "Ad 9c",
        correct_outs: 0,
        explanation: "A-K-Q-J-T is already a straight, their pair of Aces is behind. 0 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Straight Already Made",
        board: "9h 7d 6c 2s",
        hero: "Th 8c",
        villain: "9d Ac",
        correct_outs: 0,
        explanation: "T-9-8-7-6 is already a straight against their pair of Nines. 0 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Wheel Already Made",
        board: "Ah 4d 3c Ks",
        hero: "5h 2d",
        villain: "Ac Qc",
        correct_outs: 0,
        explanation: "A-2-3-4-5 is already a wheel, a Five high straight beats their Aces. 0 outs.",
    },
    OutsTemplate {
        category: "Open-Ender",
        name: "Basic Open-Ended",
        board: "Jh Td 4c 2s",
        hero: "9h 8c",
        villain: "Jd Ac",
        correct_outs: 8,
        explanation: "Any Queen or any Seven completes your straight. 4 + 4 = 8 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Straight Against Trips",
        board: "Th Td 9c 8s",
        hero: "Jh 7d",
        villain: "Tc Ac",
        correct_outs: 0,
        explanation: "J-T-9-8-7 is already a straight and beats their trip Tens. 0 outs.",
    },
    OutsTemplate {
        category: "Gutshot",
        name: "Double Gutshot",
        board: "Qh Td 7c 4s",
        hero: "9h 8d",
        villain: "Qd Jc",
        correct_outs: 7,
        explanation: "A Six makes T-9-8-7-6 (4) and a Jack makes Q-J-T-9-8, but they hold the Jc (3). 4 + 3 = 7 outs.",
    },
    OutsTemplate {
        category: "Drawing Dead",
        name: "Straight Draw Against Quads",
        board: "Jh Td 5c 5s",
        hero: "Qh 9d",
        villain: "5h 5d",
        correct_outs: 0,
        explanation: "They have four Fives, no straight catches up. 0 outs.",
    },
    OutsTemplate {
        category: "Flush Draw",
        name: "Nut Flush Draw Plus Ace",
        board: "Kh 9h 5h 2c",
        hero: "Ah Td",
        villain: "Kd Qc",
        correct_outs: 12,
        explanation: "9 hearts make the nut flush and 3 Aces pair you above their Kings. 9 + 3 = 12 outs.",
    },
    OutsTemplate {
        category: "Flush Draw",
        name: "Flush Draw Against a Pair",
        board: "Jc 8c 4c 2s",
        hero: "Ac Kh",
        villain: "Qc Jd",
        correct_outs: 13,
        explanation: "8 clubs make your nut flush (they hold the Qc), 3 Aces and 2 Kings pair you above their Jacks. 8 + 3 + 2 = 13 outs.",
    },
    OutsTemplate {
        category: "Combo Draw",
        name: "Flush Draw With Two Gutshots",
        board: "Kd Td 6d 3c",
        hero: "Qd Jh",
        villain: "Kh Qc",
        correct_outs: 15,
        explanation: "9 diamonds make your flush and they hold none, an Ace or a Nine makes a straight. 9 + 3 + 3 = 15 outs.",
    },
    OutsTemplate {
        category: "Flush Draw",
        name: "Flush Draw - Clean Outs",
        board: "Qs 8s 8d 4s",
        hero: "As Kc",
        villain: "8h 7c",
        correct_outs: 8,
        explanation: "9 spades are left but the 7s gives them a full house. 9 - 1 = 8 clean outs.",
    },
    OutsTemplate {
        category: "Combo Draw",
        name: "Flush + Gutshot",
        board: "Jh 9h 4h 2c",
        hero: "Qh Td",
        villain: "Jd Ac",
        correct_outs: 18,
        explanation: "9 hearts, 3 Eights and 3 Kings for a straight, and 3 Queens for a better pair. 9 + 3 + 3 + 3 = 18 outs.",
    },
    OutsTemplate {
        category: "Combo Draw",
        name: "Flush + Open-Ender",
        board: "Tc 9c 3c 2h",
        hero: "Jc 8h",
        villain: "Td Qd",
        correct_outs: 17,
        explanation: "9 clubs, 3 Sevens and 2 Queens for a straight (they hold the Qd), and 3 Jacks for a better pair. 9 + 3 + 2 + 3 = 17 outs.",
    },
    OutsTemplate {
        category: "Combo Draw",
        name: "Flush + Pair Draw",
        board: "Kd Jd 7d 3c",
        hero: "Ad Qh",
        villain: "Kh Tc",
        correct_outs: 14,
        explanation: "9 diamonds, 3 Aces for a better pair and 2 Tens for Broadway (they hold the Tc). 9 + 3 + 2 = 14 outs.",
    },
    OutsTemplate {
        category: "Combo Draw",
        name: "Monster Draw",
        board: "Qh Jc 4h 2c",
        hero: "Th 9h",
        villain: "Qd Kc",
        correct_outs: 14,
        explanation: "9 hearts, 3 Eights and 2 Kings complete a flush or a straight (they hold the Kc). 9 + 3 + 2 = 14 outs.",
    },
    OutsTemplate {
        category: "Two Pair Draw",
        name: "Need Second Pair",
        board: "Kh Jd 7c 3s",
        hero: "Kd Qh",
        villain: "Kc As",
        correct_outs: 3,
        explanation: "Both have Kings and their Ace kicker plays. A Queen gives you two pair. 3 Queens = 3 outs.",
    },
    OutsTemplate {
        category: "Trips Draw",
        name: "Set Draw vs Overpair",
        board: "Qh Td 6c 2s",
        hero: "8h 8d",
        villain: "Qd Jc",
        correct_outs: 2,
        explanation: "Your Eights lose to their Queens. Only the 2 Eights left make a set = 2 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Full House Against Trips",
        board: "Kh Kd 9c 4s",
        hero: "9h 9d",
        villain: "Kc Ac",
        correct_outs: 0,
        explanation: "Nines full of Kings already beats their trip Kings. 0 outs.",
    },
    OutsTemplate {
        category: "Overcards",
        name: "AK vs Middle Pair",
        board: "Jh 8d 5c 2s",
        hero: "Ah Kd",
        villain: "8h 7c",
        correct_outs: 6,
        explanation: "Any Ace or King makes top pair to beat their Eights. 3 + 3 = 6 outs.",
    },
    OutsTemplate {
        category: "Overcards",
        name: "AQ vs Top Pair Bad Kicker",
        board: "Kh Td 6c 3s",
        hero: "Ah Qd",
        villain: "Kd 9c",
        correct_outs: 7,
        explanation: "3 Aces pair you above their Kings and any of the 4 Jacks makes Broadway. 3 + 4 = 7 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "Two Pair Against One Pair",
        board: "Qh 8d 8c 3s",
        hero: "Qd 7h",
        villain: "Ah Kc",
        correct_outs: 0,
        explanation: "Queens and Eights already beat their pair of Eights. 0 outs.",
    },
    OutsTemplate {
        category: "Counterfeit",
        name: "Paired Board Kills Outs",
        board: "Kh Jd Jc 5s",
        hero: "Ah Kd",
        villain: "Jh 9c",
        correct_outs: 2,
        explanation: "Only the 2 Kings left give you Kings full of Jacks, an Ace leaves you with two pair against their trips. 2 outs.",
    },
    OutsTemplate {
        category: "Blocker",
        name: "Opponent Holds Your Outs",
        board: "Th 9d 3c 2s",
        hero: "8h 7c",
        villain: "Jc Jh",
        correct_outs: 6,
        explanation: "T-9-8-7 needs a Jack or a Six and they hold two Jacks. 2 Jacks + 4 Sixes = 6 outs.",
    },
    OutsTemplate {
        category: "Drawing Dead",
        name: "Flush Draw vs Quads",
        board: "9h 9d 9c 4h",
        hero: "Ah Kh",
        villain: "9s 4c",
        correct_outs: 0,
        explanation: "They have four Nines, no flush beats quads. 0 outs.",
    },
    OutsTemplate {
        category: "Drawing Dead",
        name: "Straight Draw vs Flush",
        board: "Jh Th 8h 2h",
        hero: "9c 7c",
        villain: "Ah 3c",
        correct_outs: 0,
        explanation: "Four hearts on board give them the nut flush, a straight can't catch up. 0 outs.",
    },
    OutsTemplate {
        category: "Already Winning",
        name: "You're Already Ahead",
        board: "Kh Qd 7c 3s",
        hero: "Ah Ad",
        villain: "Kd Jc",
        correct_outs: 0,
        explanation: "Your Aces beat their Kings, you are not drawing. 0 outs.",
    },
    OutsTemplate {
        category: "Open-Ender",
        name: "Double Draw to Broadway",
        board: "Kh Td 6c 3s",
        hero: "Qh Jh",
        villain: "Kd 9c",
        correct_outs: 7,
        explanation: "Any Ace makes A-K-Q-J-T and the 3 Nines left make K-Q-J-T-9. 4 + 3 = 7 outs.",
    },
    OutsTemplate {
        category: "Exact Count",
        name: "Set vs Set",
        board: "Qh Td 5c 5s",
        hero: "Th Ts",
        villain: "Qd Qc",
        correct_outs: 1,
        explanation: "Their Queens full beat your Tens full. Only the last Ten makes quads. 1 out.",
    },
    OutsTemplate {
        category: "Flush Draw",
        name: "Nut Flush Draw vs Pair",
        board: "Ks Js 8s 2c",
        hero: "As 3h",
        villain: "Qs Jd",
        correct_outs: 11,
        explanation: "8 spades are left (they hold the Qs) and 3 Aces pair you above their Jacks. 8 + 3 = 11 outs.",
    },
    OutsTemplate {
        category: "Open-Ender",
        name: "Open-Ender vs Two Pair",
        board: "Kh Qd 7c 4s",
        hero: "Jh Td",
        villain: "Kd Qc",
        correct_outs: 8,
        explanation: "An Ace makes A-K-Q-J-T and a Nine makes K-Q-J-T-9. 4 + 4 = 8 outs.",
    },
    OutsTemplate {
        category: "Open-Ender",
        name: "Open-Ender Both Ends Live",
        board: "8h 7d 3c 2s",
        hero: "6h 5d",
        villain: "8d Ac",
        correct_outs: 8,
        explanation: "8-7-6-5 needs a Nine or a Four. 4 + 4 = 8 outs.",
    },
    OutsTemplate {
        category: "Advanced",
        name: "Nut Flush Draw Plus Broadway Draw",
        board: "Qc Tc 5c 3h",
        hero: "Ac Kh",
        villain: "Kc Qd",
        correct_outs: 14,
        explanation: "8 clubs (they hold the Kc), 3 Jacks for Broadway and 3 Aces for a pair above their Queens. 8 + 3 + 3 = 14 outs.",
    },
    OutsTemplate {
        category: "Advanced",
        name: "Straight Flush Draw",
        board: "Jh Th 4c 2s",
        hero: "9h 8h",
        villain: "Jd Kc",
        correct_outs: 15,
        explanation: "9 hearts plus 3 Queens and 3 Sevens for a straight. 9 + 3 + 3 = 15 outs.",
    },
    OutsTemplate {
        category: "Advanced",
        name: "Gutshot Plus Overpair",
        board: "9h 8d 4c 2s",
        hero: "Th 6h",
        villain: "8h Kc",
        correct_outs: 7,
        explanation: "Any Seven makes T-9-8-7-6 and 3 Tens pair you above their Eights. 4 + 3 = 7 outs.",
    },
    OutsTemplate {
        category: "Advanced",
        name: "Runner for a Royal",
        board: "Kh Th Ts 5d",
        hero: "Ah Qh",
        villain: "Td Tc",
        correct_outs: 1,
        explanation: "They have four Tens. Only the Jh makes a royal flush. 1 out.",
    },
];

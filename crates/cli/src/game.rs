// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game modes loop.
use anyhow::{Context, Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};

use handread_cards::parse_cards;
use handread_eval::{HandValue, rank_hands};
use handread_trainer::{
    OutsRound, RankingRound, Selection, Session, Verdict, generate_duel, parse_hand, random_outs,
    ranking_scenario,
};

use crate::terminal;

/// The game to play.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Rank four hands.
    Rank {
        /// Probability of a teaching template.
        template_ratio: f64,
    },
    /// Pick the winner between two hands.
    Duel {
        /// Probability of a generated spot.
        generator_ratio: f64,
    },
    /// Count the outs.
    Outs,
    /// Rank the given hands.
    Eval {
        /// The board notation.
        board: String,
        /// The hands notation.
        hands: Vec<String>,
    },
}

/// The trainer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The game mode.
    pub mode: Mode,
    /// Seed for repeatable deals.
    pub seed: Option<u64>,
    /// Number of rounds.
    pub rounds: usize,
}

/// Runs the game on the terminal.
pub fn run(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(config, &mut input, &mut output)
}

/// Runs the game reading answers from `input`.
pub fn run_with(config: Config, input: &mut impl BufRead, w: &mut impl Write) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let session = match config.mode {
        Mode::Eval { board, hands } => return eval_hands(w, &board, &hands),
        Mode::Rank { template_ratio } => play(config.rounds, input, w, |input, w| {
            ranking_round(&mut rng, template_ratio, input, w)
        })?,
        Mode::Duel { generator_ratio } => play(config.rounds, input, w, |input, w| {
            duel_round(&mut rng, generator_ratio, input, w)
        })?,
        Mode::Outs => play(config.rounds, input, w, |input, w| {
            outs_round(&mut rng, input, w)
        })?,
    };

    info!(
        "Session ended with {}/{} correct answers",
        session.correct, session.total
    );
    terminal::print_session(w, &session)
}

/// Plays rounds until the player quits, a round returns none on quit.
fn play<I, W, F>(rounds: usize, input: &mut I, w: &mut W, mut round: F) -> Result<Session>
where
    I: BufRead,
    W: Write,
    F: FnMut(&mut I, &mut W) -> Result<Option<bool>>,
{
    let mut session = Session::default();
    for n in 1..=rounds {
        terminal::print_round_header(w, n, rounds, &session)?;
        match round(input, w)? {
            Some(correct) => session = session.record(correct),
            None => break,
        }
    }

    Ok(session)
}

fn ranking_round(
    rng: &mut StdRng,
    template_ratio: f64,
    input: &mut impl BufRead,
    w: &mut impl Write,
) -> Result<Option<bool>> {
    let scenario = ranking_scenario(rng, template_ratio)?;
    let num_hands = scenario.hands.len();
    if let Some(name) = &scenario.name {
        writeln!(w, "{name}")?;
    }

    terminal::print_cards(w, "Board", &scenario.board)?;
    for (idx, hand) in scenario.hands.iter().enumerate() {
        terminal::print_cards(w, &format!("Hand {}", idx + 1), hand)?;
    }

    let mut round = RankingRound::new(scenario)?;
    let msg = format!("Pick the strongest hand left (1-{num_hands})");
    loop {
        let Some(line) = terminal::prompt(input, w, &msg)? else {
            return Ok(None);
        };

        let Ok(number) = line.parse::<usize>() else {
            writeln!(w, "Enter a hand number")?;
            continue;
        };

        let (next, selection) = round.select(number.checked_sub(1).unwrap_or(usize::MAX));
        round = next;

        match selection {
            Selection::Ignored => writeln!(w, "Hand {number} can't be picked")?,
            Selection::Picked { index, position } => {
                let label = format!("{position}. Hand {}", index + 1);
                if let Some(hand) = round.ranking().iter().find(|hand| hand.index == index) {
                    terminal::print_value(w, &label, &hand.value)?;
                }
            }
            Selection::Finished(outcome) => {
                terminal::print_outcome(w, &outcome)?;
                return Ok(Some(outcome.correct));
            }
        }
    }
}

fn duel_round(
    rng: &mut StdRng,
    generator_ratio: f64,
    input: &mut impl BufRead,
    w: &mut impl Write,
) -> Result<Option<bool>> {
    let duel = generate_duel(rng, generator_ratio)?;
    terminal::print_cards(w, "Board", &duel.board)?;
    terminal::print_cards(w, "Hand 1", &duel.hand1)?;
    terminal::print_cards(w, "Hand 2", &duel.hand2)?;

    let guess = loop {
        let Some(line) = terminal::prompt(input, w, "Which hand wins? (1, 2, t)")? else {
            return Ok(None);
        };

        match line.to_ascii_lowercase().as_str() {
            "1" => break Verdict::Hand1,
            "2" => break Verdict::Hand2,
            "t" | "tie" => break Verdict::Tie,
            _ => writeln!(w, "Enter 1, 2, or t")?,
        }
    };

    let outcome = duel.answer(guess)?;
    terminal::print_verdict(w, outcome.correct)?;
    writeln!(w, "{}", outcome.verdict)?;
    terminal::print_value(w, "Hand 1", &outcome.value1)?;
    terminal::print_value(w, "Hand 2", &outcome.value2)?;

    Ok(Some(outcome.correct))
}

fn outs_round(
    rng: &mut StdRng,
    input: &mut impl BufRead,
    w: &mut impl Write,
) -> Result<Option<bool>> {
    let Some(scenario) = random_outs(rng) else {
        bail!("No outs scenarios available");
    };

    let round = OutsRound::new(scenario.clone())?;
    writeln!(w, "{}: {}", scenario.category, scenario.name)?;
    terminal::print_cards(w, "Board", &scenario.board)?;
    terminal::print_cards(w, "You", &scenario.hero)?;
    terminal::print_cards(w, "Villain", &scenario.villain)?;

    let hero = HandValue::evaluate(&scenario.board, &scenario.hero)?;
    let villain = HandValue::evaluate(&scenario.board, &scenario.villain)?;
    terminal::print_value(w, "You have", &hero)?;
    terminal::print_value(w, "They have", &villain)?;

    let guess = loop {
        let Some(line) = terminal::prompt(input, w, "How many outs?")? else {
            return Ok(None);
        };

        match line.parse::<usize>() {
            Ok(guess) => break guess,
            Err(_) => writeln!(w, "Enter a number")?,
        }
    };

    let result = round.answer(guess);
    terminal::print_outs(w, &result)?;

    Ok(Some(result.correct))
}

fn eval_hands(w: &mut impl Write, board: &str, hands: &[String]) -> Result<()> {
    let board = parse_cards(board).context("Invalid board")?;
    let hands = hands
        .iter()
        .map(|h| parse_hand(h))
        .collect::<Result<Vec<_>>>()?;

    let ranking = rank_hands(&board, &hands)?;
    terminal::print_cards(w, "Board", &board)?;
    terminal::print_ranking(w, &ranking)?;
    w.flush()?;

    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, StyledContent, Stylize},
};
use std::io::{BufRead, Write};

use handread_cards::{Card, Suit};
use handread_eval::{HandValue, RankedHand};
use handread_trainer::{Outcome, OutsResult, Session};

/// Reads an answer, returns none at the end of input or if the player quits.
pub fn prompt(input: &mut impl BufRead, w: &mut impl Write, msg: &str) -> Result<Option<String>> {
    queue!(w, style::PrintStyledContent(format!("{msg}: ").cyan()))?;
    w.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        Ok(None)
    } else {
        Ok(Some(line.to_string()))
    }
}

fn styled_card(card: Card) -> StyledContent<String> {
    let text = card.to_string();
    match card.suit() {
        Suit::Hearts | Suit::Diamonds => text.red().bold(),
        Suit::Clubs | Suit::Spades => text.bold(),
    }
}

/// Prints a label followed by the cards.
pub fn print_cards(w: &mut impl Write, label: &str, cards: &[Card]) -> Result<()> {
    queue!(w, style::Print(format!("{label:<10}")))?;
    for card in cards {
        queue!(w, style::PrintStyledContent(styled_card(*card)), style::Print(" "))?;
    }

    writeln!(w)?;
    Ok(())
}

/// Prints the round header with the session score.
pub fn print_round_header(
    w: &mut impl Write,
    round: usize,
    rounds: usize,
    session: &Session,
) -> Result<()> {
    let text = format!(
        "Round {round}/{rounds}  correct {}/{}  streak {}",
        session.correct, session.total, session.streak
    );

    writeln!(w)?;
    queue!(w, style::PrintStyledContent(text.as_str().dark_green()))?;
    writeln!(w)?;
    Ok(())
}

/// Prints a hand value description with its best five cards.
pub fn print_value(w: &mut impl Write, label: &str, value: &HandValue) -> Result<()> {
    queue!(w, style::Print(format!("{label:<10}")))?;
    for card in value.cards() {
        queue!(w, style::PrintStyledContent(styled_card(*card)), style::Print(" "))?;
    }

    writeln!(w, " {}", value.describe())?;
    Ok(())
}

/// Prints hands ranked strongest first.
pub fn print_ranking(w: &mut impl Write, ranking: &[RankedHand]) -> Result<()> {
    for hand in ranking {
        let label = format!("{}. Hand {}", hand.rank, hand.index + 1);
        print_value(w, &label, &hand.value)?;
    }

    Ok(())
}

/// Prints a ranking round result.
pub fn print_outcome(w: &mut impl Write, outcome: &Outcome) -> Result<()> {
    let picks = outcome
        .picks
        .iter()
        .zip(&outcome.marks)
        .map(|(idx, ok)| format!("{}{}", idx + 1, if *ok { "" } else { "?" }))
        .collect::<Vec<_>>()
        .join(" > ");

    print_verdict(w, outcome.correct)?;
    writeln!(w, "Your order: {picks}")?;
    print_ranking(w, &outcome.ranking)
}

/// Prints an outs quiz result.
pub fn print_outs(w: &mut impl Write, result: &OutsResult) -> Result<()> {
    print_verdict(w, result.correct)?;
    writeln!(w, "You said {}, there are {} outs", result.guess, result.expected)?;
    if !result.outs.is_empty() {
        print_cards(w, "Outs", &result.outs)?;
    }

    writeln!(w, "{}", result.explanation)?;
    Ok(())
}

/// Prints whether an answer is correct.
pub fn print_verdict(w: &mut impl Write, correct: bool) -> Result<()> {
    let text = if correct {
        "Correct!".green()
    } else {
        "Wrong!".red()
    };

    queue!(w, style::PrintStyledContent(text))?;
    writeln!(w)?;
    Ok(())
}

/// Prints the final session score.
pub fn print_session(w: &mut impl Write, session: &Session) -> Result<()> {
    match session.accuracy() {
        Some(accuracy) => writeln!(
            w,
            "\nScore {}/{} ({accuracy:.0}%), streak {}",
            session.correct, session.total, session.streak
        )?,
        None => writeln!(w, "\nNo answers")?,
    }

    w.flush()?;
    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand reading trainer terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::{error, info};

pub mod game;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The game to play.
    #[command(subcommand)]
    mode: ModeCommand,
    /// Seed for repeatable deals.
    #[clap(long, global = true)]
    seed: Option<u64>,
    /// Number of rounds.
    #[clap(
        long,
        short,
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    rounds: u16,
}

#[derive(Debug, Subcommand)]
enum ModeCommand {
    /// Rank four hands from the strongest to the weakest.
    Rank {
        /// Probability of a teaching template instead of a random deal.
        #[clap(long, default_value_t = 0.45, value_parser = parse_ratio)]
        template_ratio: f64,
    },
    /// Pick the winner between two hands.
    Duel {
        /// Probability of a generated tricky spot instead of a random deal.
        #[clap(long, default_value_t = 0.7, value_parser = parse_ratio)]
        generator_ratio: f64,
    },
    /// Count the outs on the turn.
    Outs,
    /// Rank the given hands against a board.
    Eval {
        /// The board cards, i.e. "Ah Kd Qc Js 2h".
        #[clap(long, short)]
        board: String,
        /// A hand hole cards, i.e. "Th 9h".
        #[clap(long = "hand", required = true)]
        hands: Vec<String>,
    },
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio = s.parse::<f64>().map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mode = match cli.mode {
        ModeCommand::Rank { template_ratio } => game::Mode::Rank { template_ratio },
        ModeCommand::Duel { generator_ratio } => game::Mode::Duel { generator_ratio },
        ModeCommand::Outs => game::Mode::Outs,
        ModeCommand::Eval { board, hands } => game::Mode::Eval { board, hands },
    };

    let config = game::Config {
        mode,
        seed: cli.seed,
        rounds: cli.rounds as usize,
    };

    info!("Starting {:?} seed {:?}", config.mode, config.seed);
    if let Err(e) = game::run(config) {
        error!("{e:#}");
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use psychic_eval::HandSet;

mod report;
use report::Report;

const PROMPT: &str = "\
Please specify 10 cards separated with a space, the 5 hand cards followed
by the 5 deck cards in drawing order. Each card is a two-character code,
the first character is the face-value (A=Ace, 2-9, T=10, J=Jack, Q=Queen,
K=King) and the second character is the suit (C=Clubs, D=Diamonds,
H=Hearts, S=Spades):";

#[derive(Debug, Parser)]
#[clap(about = "Finds the best hand a psychic poker player can get.")]
struct Cli {
    /// The 10 cards of a deal, when missing deals are read from stdin one
    /// per line.
    cards: Vec<String>,
    /// Evaluates this many randomly dealt deals.
    #[clap(long, conflicts_with = "cards")]
    random: Option<usize>,
    /// Prints a JSON object for each deal.
    #[clap(long)]
    json: bool,
    /// Logs the cards making each best hand.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Evaluates the deals, returns false if any deal was invalid.
fn run(cli: &Cli) -> Result<bool> {
    let mut out = io::stdout().lock();

    if let Some(count) = cli.random {
        let mut rng = rand::rng();
        for _ in 0..count {
            Report::new(&HandSet::deal(&mut rng)).write(&mut out, cli.json)?;
        }

        return Ok(true);
    }

    if !cli.cards.is_empty() {
        let set = cli
            .cards
            .join(" ")
            .parse::<HandSet>()
            .context("invalid deal")?;
        Report::new(&set).write(&mut out, cli.json)?;
        return Ok(true);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{PROMPT}");
        eprint!(">> ");
        io::stderr().flush()?;
    }

    let mut all_valid = true;
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        debug!("line {}: {}", lineno + 1, line.trim());
        match line.parse::<HandSet>() {
            Ok(set) => Report::new(&set).write(&mut out, cli.json)?,
            Err(e) => {
                error!("line {}: {e}", lineno + 1);
                all_valid = false;
            }
        }
    }

    Ok(all_valid)
}

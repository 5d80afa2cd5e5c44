// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the preflop equity chart of each starting hand against a number of
// opponents with unknown cards:
//
// ```bash
// $ cargo r --release --example chart -- --num-players 2
// ```
use anyhow::Result;
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_eval::*;

fn run_sim(sim: &mut Simulator, c1: Card, c2: Card, n_against: u8) -> Result<f64> {
    let hero = SeatId::new(1);
    let contestants = std::iter::once(Contestant::new(hero, Some(c1), Some(c2)))
        .chain((2..=n_against + 1).map(|seat| Contestant::new(SeatId::new(seat), None, None)))
        .collect::<Vec<_>>();

    let equity = sim.simulate(CardSet::EMPTY, &[], contestants)?;
    Ok(equity.probability(hero).unwrap_or_default() * 100.0)
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=8))]
    num_players: u8,
    /// The number of trials for each starting hand.
    #[clap(long, short, default_value_t = 20_000)]
    trials: usize,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 4)]
    tasks: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .init();

    let mut sim = Simulator::new(Config {
        trials: cli.trials,
        tasks: cli.tasks,
        ..Config::default()
    });

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            probs.push(run_sim(&mut sim, c1, c2, cli.num_players)?);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}

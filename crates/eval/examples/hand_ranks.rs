// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates random 7 cards hands and compares the frequency of each hand rank
// with the exact frequency over all 133,784,560 hands:
//
// ```bash
// $ cargo r --release --example hand_ranks -- --hands 10000000
// ...
// Rank              Sampled     Exact
// High Card         17.41%    17.41%
// One Pair          43.82%    43.82%
// ...
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

/// The number of 7 cards hands for each rank.
const EXACT_COUNTS: [u64; 9] = [
    23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184, 224_848,
    41_584,
];

#[derive(Debug, Parser)]
struct Cli {
    /// The number of random hands to evaluate.
    #[clap(long, default_value_t = 1_000_000)]
    hands: usize,
    /// The random seed.
    #[clap(long, default_value_t = 101)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut deck = Deck::default();
    let mut counts = [0u64; 9];

    let now = Instant::now();

    for _ in 0..cli.hands {
        deck.refill(CardSet::EMPTY);
        deck.shuffle(&mut rng);

        let hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
        counts[HandValue::eval(&hand).rank() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total hands      {}", cli.hands);
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", cli.hands as f64 / elapsed);

    let total = EXACT_COUNTS.iter().sum::<u64>() as f64;
    println!("{:<16} {:>9} {:>9}", "Rank", "Sampled", "Exact");
    for rank in HandRank::ALL {
        let idx = rank as usize;
        println!(
            "{:<16} {:>8.2}% {:>8.2}%",
            rank.to_string(),
            counts[idx] as f64 / cli.hands.max(1) as f64 * 100.0,
            EXACT_COUNTS[idx] as f64 / total * 100.0,
        );
    }
}

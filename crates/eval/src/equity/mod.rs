// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
//!
//! A [Scenario] is a snapshot of what is known about a hand: the dead cards,
//! the board slots and the players contesting the pot with their known hole
//! cards. The [Simulator] completes the unknown cards at random for a number
//! of trials, evaluates each player 7 cards hand and splits one trial credit
//! among the players with the best hand:
//!
//! ```
//! # use showdown_eval::*;
//! # fn main() -> Result<()> {
//! let card = |s: &str| s.parse::<Card>().ok();
//! let contestants = vec![
//!     Contestant::new(SeatId::new(1), card("A♠"), card("A♥")),
//!     Contestant::new(SeatId::new(2), card("K♦"), card("K♣")),
//! ];
//!
//! let board = [card("2♣"), card("7♦"), card("9♠"), None, None];
//! let scenario = Scenario::new(CardSet::EMPTY, &board, contestants)?;
//!
//! let config = Config {
//!     trials: 1_000,
//!     seed: Some(42),
//!     ..Config::default()
//! };
//!
//! let equity = Simulator::new(config).run(&scenario)?;
//! assert!(equity.probability(SeatId::new(1)).unwrap() > 0.8);
//! # Ok(())
//! # }
//! ```
use std::time::Duration;

mod parallel;
mod scenario;
mod simulator;

pub use scenario::{Contestant, Scenario, SeatId, TrialOutcome};
pub use simulator::{CancelToken, Equity, SHARE_UNIT, Simulator};

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of trials.
    pub trials: usize,
    /// The number of parallel tasks, 1 runs the trials on the caller thread.
    pub tasks: usize,
    /// Seed for the random source, `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Stops the simulation after this time and returns a partial result.
    pub time_limit: Option<Duration>,
}

impl Config {
    /// The default number of trials.
    pub const DEFAULT_TRIALS: usize = 5_000;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: Self::DEFAULT_TRIALS,
            tasks: 1,
            seed: None,
            time_limit: None,
        }
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity simulator.
use ahash::AHashMap;
use log::{debug, error, warn};
use rand::{prelude::*, rngs::StdRng};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use showdown_cards::{Card, CardSet, Deck};

use super::{Config, Contestant, Scenario, SeatId};
use crate::error::Result;

/// The credit for winning a trial.
///
/// This is divisible by any number of winners up to [Scenario::MAX_CONTESTANTS]
/// so that split pots are accounted exactly, with a trial credit summing to
/// exactly one unit.
pub const SHARE_UNIT: u64 = 5_354_228_880;

/// A token to stop a running simulation.
///
/// The simulator checks the token between trials and returns a partial
/// [Equity] when it is cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Cancels the simulations using this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clears a cancellation so that the token can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Checks if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Stop conditions checked between trials.
#[derive(Debug)]
pub(super) struct Stop {
    cancel: CancelToken,
    deadline: Option<Instant>,
}

impl Stop {
    /// Checks the deadline every this many trials.
    const DEADLINE_CHECK_INTERVAL: usize = 64;

    fn should_stop(&self, trial: usize) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }

        trial % Self::DEADLINE_CHECK_INTERVAL == 0
            && self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// The win credits accumulated by a run of trials.
///
/// A trial credits up to [SHARE_UNIT] so shares are wide enough to count any
/// `usize` number of trials.
#[derive(Debug)]
pub(super) struct Credits {
    pub(super) shares: Vec<u128>,
    pub(super) trials: usize,
}

impl Credits {
    /// Runs up to `trials` trials, stops early if `stop` says so.
    pub(super) fn run<R: Rng>(
        scenario: &Scenario,
        trials: usize,
        rng: &mut R,
        stop: &Stop,
    ) -> Result<Credits> {
        let mut deck = Deck::without(scenario.dead());
        let mut credits = Credits {
            shares: vec![0; scenario.contestants().len()],
            trials: 0,
        };

        while credits.trials < trials {
            if stop.should_stop(credits.trials) {
                break;
            }

            let outcome = scenario
                .trial(&mut deck, rng)
                .inspect_err(|e| error!("Trial {} failed: {e}", credits.trials))?;

            for (idx, share) in credits.shares.iter_mut().enumerate() {
                *share += u128::from(outcome.share(idx));
            }

            credits.trials += 1;
        }

        Ok(credits)
    }

    /// Adds the credits from another run.
    pub(super) fn merge(&mut self, other: Credits) {
        for (share, other) in self.shares.iter_mut().zip(other.shares) {
            *share += other;
        }

        self.trials += other.trials;
    }
}

/// The result of a simulation.
#[derive(Debug, Clone)]
pub struct Equity {
    seats: Vec<SeatId>,
    shares: Vec<u128>,
    trials: usize,
    requested: usize,
}

impl Equity {
    pub(super) fn new(scenario: &Scenario, credits: Credits, requested: usize) -> Self {
        Self {
            seats: scenario.contestants().iter().map(|c| c.id).collect(),
            shares: credits.shares,
            trials: credits.trials,
            requested,
        }
    }

    /// The probability of winning the pot for a seat, in `[0, 1]`.
    ///
    /// Returns `None` if the seat was not contesting the pot, and zero if no
    /// trial has run.
    pub fn probability(&self, seat: SeatId) -> Option<f64> {
        self.position(seat).map(|idx| self.to_probability(self.shares[idx]))
    }

    /// The number of trials won by a seat, split pots count as a fraction.
    pub fn wins(&self, seat: SeatId) -> Option<f64> {
        self.position(seat)
            .map(|idx| self.shares[idx] as f64 / SHARE_UNIT as f64)
    }

    /// Iterates the seats and their probability in contestants order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, f64)> + '_ {
        self.seats
            .iter()
            .zip(&self.shares)
            .map(|(seat, &share)| (*seat, self.to_probability(share)))
    }

    /// The probability for each seat.
    pub fn probabilities(&self) -> AHashMap<SeatId, f64> {
        self.iter().collect()
    }

    /// The number of trials that have run.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Checks if all requested trials have run.
    pub fn is_complete(&self) -> bool {
        self.trials == self.requested
    }

    fn position(&self, seat: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| *s == seat)
    }

    fn to_probability(&self, share: u128) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            share as f64 / (self.trials as f64 * SHARE_UNIT as f64)
        }
    }
}

/// Monte Carlo equity simulator.
#[derive(Debug)]
pub struct Simulator<R = StdRng> {
    pub(super) config: Config,
    pub(super) rng: R,
    pub(super) cancel: CancelToken,
}

impl Simulator<StdRng> {
    /// Creates a simulator, seeded with the config seed or from the OS.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulator<R> {
    /// Creates a simulator with user initialized randomness.
    pub fn with_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            rng,
            cancel: CancelToken::default(),
        }
    }

    /// The simulator config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A token that stops running simulations when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs the configured number of trials for a scenario.
    ///
    /// Trials run on the caller thread unless the config asks for more than
    /// one task, see [Simulator::par_run].
    pub fn run(&mut self, scenario: &Scenario) -> Result<Equity> {
        if self.config.tasks > 1 {
            return self.par_run(scenario, self.config.tasks);
        }

        let trials = self.config.trials;
        debug!(
            "Simulating {} players with {} unknown cards for {trials} trials",
            scenario.contestants().len(),
            scenario.unknown_cards(),
        );

        let now = Instant::now();
        let stop = self.stop();
        let credits = Credits::run(scenario, trials, &mut self.rng, &stop)?;
        let equity = Equity::new(scenario, credits, trials);
        self.log_done(&equity, now);
        Ok(equity)
    }

    /// Builds a scenario from the known cards and runs it.
    ///
    /// `dead` must contain the cards of players that are not contesting the
    /// pot, the board and contestants cards are added to it.
    pub fn simulate(
        &mut self,
        dead: CardSet,
        board: &[Option<Card>],
        contestants: Vec<Contestant>,
    ) -> Result<Equity> {
        let scenario = Scenario::new(dead, board, contestants)?;
        self.run(&scenario)
    }

    pub(super) fn stop(&self) -> Stop {
        Stop {
            cancel: self.cancel.clone(),
            deadline: self.config.time_limit.map(|limit| Instant::now() + limit),
        }
    }

    pub(super) fn log_done(&self, equity: &Equity, start: Instant) {
        if equity.is_complete() {
            debug!(
                "Simulated {} trials in {:.3}s",
                equity.trials(),
                start.elapsed().as_secs_f64()
            );
        } else {
            warn!(
                "Simulation stopped after {} of {} trials",
                equity.trials(),
                self.config.trials
            );
        }
    }
}

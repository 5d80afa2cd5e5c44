// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity simulation.
use log::debug;
use rand::{prelude::*, rngs::StdRng};
use std::{panic, thread, time::Instant};

use super::{
    Scenario,
    simulator::{Credits, Equity, Simulator},
};
use crate::error::Result;

/// Splits `trials` over `num_tasks` so that the first tasks take the remainder.
fn trials_per_task(trials: usize, num_tasks: usize) -> impl Iterator<Item = usize> {
    let (per_task, rem) = (trials / num_tasks, trials % num_tasks);
    (0..num_tasks).map(move |task_id| per_task + usize::from(task_id < rem))
}

impl<R: Rng> Simulator<R> {
    /// Runs the configured number of trials from `num_tasks` parallel tasks.
    ///
    /// Each task gets its own random source seeded from the simulator one, so
    /// that a seeded simulator gives the same result for the same number of
    /// tasks. Tasks share the simulator cancel token and time limit.
    pub fn par_run(&mut self, scenario: &Scenario, num_tasks: usize) -> Result<Equity> {
        let num_tasks = num_tasks.max(1);
        let trials = self.config.trials;
        debug!(
            "Simulating {} players with {} unknown cards for {trials} trials on {num_tasks} tasks",
            scenario.contestants().len(),
            scenario.unknown_cards(),
        );

        let seeds = (0..num_tasks)
            .map(|_| self.rng.random::<u64>())
            .collect::<Vec<_>>();

        let now = Instant::now();
        let stop = self.stop();

        let results = thread::scope(|s| {
            let handles = seeds
                .into_iter()
                .zip(trials_per_task(trials, num_tasks))
                .map(|(seed, task_trials)| {
                    let stop = &stop;
                    s.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(seed);
                        Credits::run(scenario, task_trials, &mut rng, stop)
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        // Aggregate task credits.
        let mut credits = Credits {
            shares: vec![0; scenario.contestants().len()],
            trials: 0,
        };

        for task_credits in results {
            credits.merge(task_credits?);
        }

        let equity = Equity::new(scenario, credits, trials);
        self.log_done(&equity, now);
        Ok(equity)
    }
}

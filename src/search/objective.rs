// src/search/objective.rs

//! Expected hours saved by a schedule.
//!
//! Tasks run in schedule order. Task `p[i]` fails with probability
//! `failure_rate[p[i]]`; a failure halts the run and every hour scheduled
//! after position `i` is saved:
//!
//! ```text
//! E = sum_i reach(i) * failure_rate[p[i]] * remaining(i)
//! ```
//!
//! where `reach(i)` is the probability of surviving positions `0..i` and
//! `remaining(i)` the duration of positions `i+1..n`.

use crate::types::TaskIndex;

/// Durations and failure rates indexed by task.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    durations: &'a [f64],
    failure_rates: &'a [f64],
}

impl<'a> Objective<'a> {
    pub fn new(durations: &'a [f64], failure_rates: &'a [f64]) -> Self {
        debug_assert_eq!(durations.len(), failure_rates.len());
        Self {
            durations,
            failure_rates,
        }
    }

    pub fn score(&self, schedule: &[TaskIndex]) -> f64 {
        expected_hours_saved(schedule, self.durations, self.failure_rates)
    }
}

/// Score `schedule` in one backward pass.
///
/// Uses `S_i = f_i * remaining(i) + (1 - f_i) * S_{i+1}`, which only adds
/// non-negative terms, so the result is never negative.
pub fn expected_hours_saved(
    schedule: &[TaskIndex],
    durations: &[f64],
    failure_rates: &[f64],
) -> f64 {
    let mut saved = 0.0;
    let mut remaining = 0.0;
    for &task in schedule.iter().rev() {
        let fail = failure_rates[task];
        saved = fail * remaining + (1.0 - fail) * saved;
        remaining += durations[task];
    }
    saved
}

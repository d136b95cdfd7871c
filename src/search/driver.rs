// src/search/driver.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::debug;

use crate::config::{ConfigFile, DEFAULT_BUDGET, DEFAULT_SEEDS};
use crate::dag::PrecedenceGraph;
use crate::errors::{Result, RiskorderError};
use crate::search::objective::Objective;
use crate::search::reporter::Reporter;
use crate::search::sampler::Sampler;
use crate::types::{Schedule, Strategy};

/// Knobs for one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub strategy: Strategy,
    /// Relabelings for the sampler, including the identity.
    pub seeds: usize,
    /// Extensions drawn per relabeling.
    pub budget: usize,
    /// `Strategy::Auto` enumerates exhaustively up to this many extensions.
    pub exhaustive_limit: usize,
    /// `None` seeds the sampler from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            seeds: DEFAULT_SEEDS,
            budget: DEFAULT_BUDGET,
            exhaustive_limit: DEFAULT_SEEDS * DEFAULT_BUDGET,
            rng_seed: None,
        }
    }
}

impl SearchSettings {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            strategy: cfg.search.strategy,
            seeds: cfg.search.seeds,
            budget: cfg.search.budget,
            exhaustive_limit: cfg.exhaustive_limit(),
            rng_seed: cfg.search.rng_seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.seeds == 0 {
            return Err(RiskorderError::Config("seeds must be >= 1 (got 0)".to_string()));
        }
        if self.budget == 0 {
            return Err(RiskorderError::Config("budget must be >= 1 (got 0)".to_string()));
        }
        Ok(())
    }
}

/// Best schedule seen so far. Only replaced by a strictly higher score, so
/// ties keep the first schedule seen.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    best: Option<(Schedule, f64)>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `schedule` became the new best.
    pub fn offer(&mut self, schedule: Schedule, score: f64) -> bool {
        let better = self.best.as_ref().is_none_or(|(_, best)| score > *best);
        if better {
            self.best = Some((schedule, score));
        }
        better
    }

    pub fn best(&self) -> Option<(&[usize], f64)> {
        self.best.as_ref().map(|(s, score)| (s.as_slice(), *score))
    }

    pub fn into_best(self) -> Option<(Schedule, f64)> {
        self.best
    }
}

/// Final result of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub schedule: Schedule,
    pub score: f64,
    pub candidates_evaluated: u64,
    /// `Exhaustive` or `Sampled`; never `Auto`.
    pub strategy: Strategy,
    /// The stop flag was raised before the candidates ran out.
    pub interrupted: bool,
}

/// Drives enumeration or sampling and keeps the best-scoring schedule.
#[derive(Debug, Clone, Default)]
pub struct Search {
    settings: SearchSettings,
    stop: Option<Arc<AtomicBool>>,
}

impl Search {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            stop: None,
        }
    }

    /// Checked between candidates; once set, the run ends with the best
    /// schedule found so far.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Turn `Strategy::Auto` into a concrete strategy for `graph`.
    pub fn resolve_strategy(&self, graph: &PrecedenceGraph) -> Strategy {
        match self.settings.strategy {
            Strategy::Auto => match graph.count_extensions_up_to(self.settings.exhaustive_limit) {
                Some(count) => {
                    debug!(count, "extension count within limit; enumerating exhaustively");
                    Strategy::Exhaustive
                }
                None => {
                    debug!(
                        limit = self.settings.exhaustive_limit,
                        "extension count exceeds limit; sampling"
                    );
                    Strategy::Sampled
                }
            },
            other => other,
        }
    }

    /// Search for the schedule with the highest expected hours saved.
    ///
    /// Fails with [`RiskorderError::EmptyResult`] if no candidate was
    /// produced (no tasks), or if the run was interrupted before the first.
    pub fn run(
        &self,
        graph: &PrecedenceGraph,
        durations: &[f64],
        failure_rates: &[f64],
        reporter: &mut dyn Reporter,
    ) -> Result<SearchOutcome> {
        self.settings.validate()?;
        let n = graph.node_count();
        if durations.len() != n || failure_rates.len() != n {
            return Err(RiskorderError::Other(anyhow!(
                "graph has {n} tasks but got {} durations and {} failure rates",
                durations.len(),
                failure_rates.len()
            )));
        }

        let objective = Objective::new(durations, failure_rates);
        let strategy = self.resolve_strategy(graph);
        reporter.info(&format!("searching {n} tasks with {strategy} strategy"));

        let result = match strategy {
            Strategy::Sampled => {
                let rng = match self.settings.rng_seed {
                    Some(seed) => Pcg64Mcg::seed_from_u64(seed),
                    None => Pcg64Mcg::from_entropy(),
                };
                let sampler =
                    Sampler::new(graph, self.settings.seeds, self.settings.budget, rng);
                self.drive(sampler, &objective, strategy, reporter)
            }
            _ => self.drive(graph.linear_extensions(), &objective, Strategy::Exhaustive, reporter),
        };

        if let Err(err) = &result {
            reporter.error(&err.to_string());
        }
        result
    }

    fn drive<I>(
        &self,
        candidates: I,
        objective: &Objective<'_>,
        strategy: Strategy,
        reporter: &mut dyn Reporter,
    ) -> Result<SearchOutcome>
    where
        I: Iterator<Item = Schedule>,
    {
        let mut state = SearchState::new();
        let mut evaluated: u64 = 0;
        let mut interrupted = false;

        for candidate in candidates {
            if self.stop_requested() {
                interrupted = true;
                reporter.info("search interrupted; keeping best schedule so far");
                break;
            }
            evaluated += 1;
            let score = objective.score(&candidate);
            if state.offer(candidate, score) {
                if let Some((best, score)) = state.best() {
                    reporter.improved(score, best);
                }
            }
        }

        debug!(evaluated, interrupted, "search finished");
        let (schedule, score) = state.into_best().ok_or(RiskorderError::EmptyResult)?;
        Ok(SearchOutcome {
            schedule,
            score,
            candidates_evaluated: evaluated,
            strategy,
            interrupted,
        })
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

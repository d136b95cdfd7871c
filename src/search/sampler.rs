// src/search/sampler.rs

//! Bounded sampling of linear extensions under random relabelings.
//!
//! Enumeration order is lexicographic in node labels, so truncating it keeps
//! only extensions sharing a long common prefix. Each seed renames the nodes
//! first (seed 0 keeps the identity), draws up to `budget` extensions from
//! the renamed graph, and maps them back to original task indices.

use std::iter::Take;

use rand::Rng;
use tracing::debug;

use crate::dag::{LinearExtensions, PrecedenceGraph, Relabeling};
use crate::types::Schedule;

/// Iterator over sampled schedules, already in original task indices.
///
/// Deterministic for a given RNG state.
pub struct Sampler<'g, R> {
    graph: &'g PrecedenceGraph,
    rng: R,
    seeds: usize,
    budget: usize,
    next_seed: usize,
    current: Option<(Relabeling, Take<LinearExtensions>)>,
}

impl<'g, R: Rng> Sampler<'g, R> {
    pub fn new(graph: &'g PrecedenceGraph, seeds: usize, budget: usize, rng: R) -> Self {
        Self {
            graph,
            rng,
            seeds,
            budget,
            next_seed: 0,
            current: None,
        }
    }

    fn start_next_seed(&mut self) -> bool {
        if self.next_seed >= self.seeds {
            return false;
        }
        let n = self.graph.node_count();
        let relabeling = if self.next_seed == 0 {
            Relabeling::identity(n)
        } else {
            Relabeling::random(n, &mut self.rng)
        };
        debug!(
            seed = self.next_seed,
            budget = self.budget,
            "sampling extensions of relabeled graph"
        );
        self.next_seed += 1;

        let relabeled = relabeling.apply_to_graph(self.graph);
        let draws = relabeled.linear_extensions().take(self.budget);
        self.current = Some((relabeling, draws));
        true
    }
}

impl<R: Rng> Iterator for Sampler<'_, R> {
    type Item = Schedule;

    fn next(&mut self) -> Option<Schedule> {
        loop {
            if let Some((relabeling, draws)) = self.current.as_mut() {
                if let Some(q) = draws.next() {
                    return Some(relabeling.restore(&q));
                }
            }
            self.current = None;
            if !self.start_next_seed() {
                return None;
            }
        }
    }
}

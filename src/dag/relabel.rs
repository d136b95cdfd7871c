// src/dag/relabel.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::dag::graph::PrecedenceGraph;
use crate::types::{Schedule, TaskIndex};

/// A permutation `forward` of task indices together with its inverse.
///
/// Applying it to a graph renames node `v` to `forward[v]`; schedules drawn
/// from the renamed graph are mapped back with `inverse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relabeling {
    forward: Vec<TaskIndex>,
    inverse: Vec<TaskIndex>,
}

impl Relabeling {
    pub fn identity(n: usize) -> Self {
        let forward: Vec<TaskIndex> = (0..n).collect();
        Self {
            inverse: forward.clone(),
            forward,
        }
    }

    /// Uniformly random relabeling.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut forward: Vec<TaskIndex> = (0..n).collect();
        forward.shuffle(rng);
        Self::from_forward(forward)
    }

    /// `forward` must be a permutation of `0..forward.len()`.
    pub fn from_forward(forward: Vec<TaskIndex>) -> Self {
        let mut inverse = vec![0; forward.len()];
        for (v, &label) in forward.iter().enumerate() {
            inverse[label] = v;
        }
        Self { forward, inverse }
    }

    pub fn forward(&self) -> &[TaskIndex] {
        &self.forward
    }

    pub fn inverse(&self) -> &[TaskIndex] {
        &self.inverse
    }

    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// A fresh, isomorphic copy of `graph` under this relabeling.
    pub fn apply_to_graph(&self, graph: &PrecedenceGraph) -> PrecedenceGraph {
        graph.relabeled(&self.forward)
    }

    /// Map a schedule over relabeled indices back to original indices.
    pub fn restore(&self, schedule: &[TaskIndex]) -> Schedule {
        schedule.iter().map(|&q| self.inverse[q]).collect()
    }
}

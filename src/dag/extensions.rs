// src/dag/extensions.rs

//! Lazy enumeration of linear extensions (topological orders).
//!
//! Kahn's algorithm with backtracking: each stack frame holds the tasks that
//! were available at one depth and a cursor to the next one to try. The
//! iterator owns copies of the adjacency lists, so it does not borrow the
//! graph it was created from.

use crate::dag::graph::PrecedenceGraph;
use crate::types::{Schedule, TaskIndex};

#[derive(Debug, Clone)]
struct Frame {
    /// Tasks with no unplaced predecessors at this depth, ascending.
    candidates: Vec<TaskIndex>,
    /// Index into `candidates` of the next task to try.
    cursor: usize,
}

/// Iterator over every linear extension of a [`PrecedenceGraph`].
///
/// Extensions come out in lexicographic order of task indices and each one
/// appears exactly once.
#[derive(Debug, Clone)]
pub struct LinearExtensions {
    successors: Vec<Vec<TaskIndex>>,
    /// Count of unplaced predecessors per task.
    in_degree: Vec<usize>,
    placed: Vec<bool>,
    prefix: Vec<TaskIndex>,
    stack: Vec<Frame>,
    started: bool,
    finished: bool,
}

impl LinearExtensions {
    pub fn new(graph: &PrecedenceGraph) -> Self {
        let n = graph.node_count();
        let successors: Vec<Vec<TaskIndex>> = (0..n).map(|v| graph.successors(v)).collect();
        let mut in_degree = vec![0; n];
        for succ in &successors {
            for &s in succ {
                in_degree[s] += 1;
            }
        }

        Self {
            successors,
            in_degree,
            placed: vec![false; n],
            prefix: Vec::with_capacity(n),
            stack: Vec::with_capacity(n),
            started: false,
            finished: n == 0,
        }
    }

    fn task_count(&self) -> usize {
        self.placed.len()
    }

    fn available(&self) -> Vec<TaskIndex> {
        (0..self.task_count())
            .filter(|&v| !self.placed[v] && self.in_degree[v] == 0)
            .collect()
    }

    fn place(&mut self, task: TaskIndex) {
        self.placed[task] = true;
        self.prefix.push(task);
        for &s in &self.successors[task] {
            self.in_degree[s] -= 1;
        }
    }

    fn unplace(&mut self, task: TaskIndex) {
        debug_assert_eq!(self.prefix.last(), Some(&task));
        self.prefix.pop();
        self.placed[task] = false;
        for &s in &self.successors[task] {
            self.in_degree[s] += 1;
        }
    }
}

impl Iterator for LinearExtensions {
    type Item = Schedule;

    fn next(&mut self) -> Option<Schedule> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            let roots = self.available();
            self.stack.push(Frame {
                candidates: roots,
                cursor: 0,
            });
        }

        loop {
            let depth = match self.stack.len() {
                0 => {
                    self.finished = true;
                    return None;
                }
                len => len - 1,
            };

            // Undo the choice previously made at this depth, if any.
            let cursor = self.stack[depth].cursor;
            if cursor > 0 {
                let previous = self.stack[depth].candidates[cursor - 1];
                self.unplace(previous);
            }

            let frame = &mut self.stack[depth];
            if frame.cursor == frame.candidates.len() {
                self.stack.pop();
                continue;
            }
            let task = frame.candidates[frame.cursor];
            frame.cursor += 1;
            self.place(task);

            if self.prefix.len() == self.task_count() {
                return Some(self.prefix.clone());
            }

            let next = self.available();
            self.stack.push(Frame {
                candidates: next,
                cursor: 0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(n: usize, edges: &[(usize, usize)]) -> Vec<Schedule> {
        PrecedenceGraph::build(n, edges)
            .unwrap()
            .linear_extensions()
            .collect()
    }

    #[test]
    fn antichain_yields_all_permutations_in_lexicographic_order() {
        let exts = all(3, &[]);
        assert_eq!(
            exts,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn chain_has_a_single_extension() {
        assert_eq!(all(4, &[(2, 1), (1, 3), (3, 0)]), vec![vec![2, 1, 3, 0]]);
    }

    #[test]
    fn diamond_has_two_extensions() {
        assert_eq!(
            all(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]),
            vec![vec![0, 1, 2, 3], vec![0, 2, 1, 3]]
        );
    }

    #[test]
    fn empty_graph_yields_nothing() {
        assert_eq!(all(0, &[]).len(), 0);
    }

    #[test]
    fn single_task_yields_one_extension() {
        assert_eq!(all(1, &[]), vec![vec![0]]);
    }

    #[test]
    fn each_call_restarts_the_sequence() {
        let g = PrecedenceGraph::build(3, &[(0, 2)]).unwrap();
        let mut first = g.linear_extensions();
        let head = first.next();
        let again: Vec<_> = g.linear_extensions().collect();
        assert_eq!(again.len(), 3);
        assert_eq!(head.as_ref(), again.first());
        assert_eq!(first.count(), 2);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = PrecedenceGraph::build(2, &[(0, 1)]).unwrap().linear_extensions();
        assert_eq!(it.next(), Some(vec![0, 1]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}

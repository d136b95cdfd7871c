// src/dag/graph.rs

use anyhow::anyhow;
use petgraph::Direction;
use petgraph::algo::tred::{dag_to_toposorted_adjacency_list, dag_transitive_reduction_closure};
use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::extensions::LinearExtensions;
use crate::errors::{Result, RiskorderError};
use crate::types::{Edge, TaskIndex};

/// Precedence constraints over tasks `0..n`, backed by a petgraph `DiGraph`.
///
/// Node `i` always carries task index `i`. Construction validates that the
/// edge set is acyclic, so every value of this type has at least one linear
/// extension.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph {
    graph: DiGraph<TaskIndex, ()>,
    /// One topological order, kept from validation.
    topo: Vec<TaskIndex>,
}

impl PrecedenceGraph {
    /// Build a graph with exactly `n` nodes and the given edges.
    ///
    /// Duplicate edges collapse into one. Fails with
    /// [`RiskorderError::CyclicGraph`] if the edges contain a cycle
    /// (self-loops included).
    pub fn build(n: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph: DiGraph<TaskIndex, ()> = DiGraph::with_capacity(n, edges.len());
        for i in 0..n {
            graph.add_node(i);
        }

        for &(from, to) in edges {
            if from >= n || to >= n {
                return Err(RiskorderError::Other(anyhow!(
                    "edge ({from}, {to}) is out of range for {n} tasks"
                )));
            }
            if from == to {
                return Err(RiskorderError::CyclicGraph(format!(
                    "task {from} must run before itself"
                )));
            }
            graph.update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }

        // A topological sort fails if there is a cycle.
        let topo = match toposort(&graph, None) {
            Ok(order) => order.into_iter().map(|ix| ix.index()).collect(),
            Err(cycle) => {
                return Err(RiskorderError::CyclicGraph(format!(
                    "cycle detected involving task {}",
                    cycle.node_id().index()
                )));
            }
        };

        Ok(Self { graph, topo })
    }

    /// Build from parts that are already known to be acyclic.
    fn from_acyclic(n: usize, edges: impl IntoIterator<Item = Edge>, topo: Vec<TaskIndex>) -> Self {
        let mut graph: DiGraph<TaskIndex, ()> = DiGraph::with_capacity(n, 0);
        for i in 0..n {
            graph.add_node(i);
        }
        for (from, to) in edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        Self { graph, topo }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Direct successors of `task`, ascending.
    pub fn successors(&self, task: TaskIndex) -> Vec<TaskIndex> {
        let mut out: Vec<TaskIndex> = self
            .graph
            .neighbors_directed(NodeIndex::new(task), Direction::Outgoing)
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }

    /// Whether `to` is reachable from `from` through one or more edges.
    pub fn reaches(&self, from: TaskIndex, to: TaskIndex) -> bool {
        from != to
            && has_path_connecting(&self.graph, NodeIndex::new(from), NodeIndex::new(to), None)
    }

    /// The topological order found during validation.
    pub fn topological_order(&self) -> &[TaskIndex] {
        &self.topo
    }

    /// Transitive reduction: the smallest edge set with the same reachability.
    ///
    /// petgraph's reduction works on an adjacency list whose node indices are
    /// ranks in a topological order; ranks are mapped back through `topo`.
    pub fn reduced(&self) -> PrecedenceGraph {
        let order: Vec<NodeIndex> = self.topo.iter().map(|&v| NodeIndex::new(v)).collect();
        let (ranked, _revmap) = dag_to_toposorted_adjacency_list::<_, u32>(&self.graph, &order);
        let (reduction, _closure) = dag_transitive_reduction_closure(&ranked);

        let kept: Vec<Edge> = reduction
            .edge_indices()
            .filter_map(|e| reduction.edge_endpoints(e))
            .map(|(a, b)| (self.topo[a as usize], self.topo[b as usize]))
            .collect();

        PrecedenceGraph::from_acyclic(self.node_count(), kept, self.topo.clone())
    }

    /// Rebuild the graph with node `v` renamed to `forward[v]`.
    ///
    /// `forward` must be a permutation of `0..n`. The receiver is untouched.
    pub fn relabeled(&self, forward: &[TaskIndex]) -> PrecedenceGraph {
        let edges = self
            .edges()
            .into_iter()
            .map(|(u, v)| (forward[u], forward[v]));
        let topo = self.topo.iter().map(|&v| forward[v]).collect();
        PrecedenceGraph::from_acyclic(self.node_count(), edges, topo)
    }

    /// Whether `schedule` contains each task once and respects every edge.
    pub fn is_extension(&self, schedule: &[TaskIndex]) -> bool {
        let n = self.node_count();
        if schedule.len() != n {
            return false;
        }
        let mut position = vec![usize::MAX; n];
        for (pos, &task) in schedule.iter().enumerate() {
            if task >= n || position[task] != usize::MAX {
                return false;
            }
            position[task] = pos;
        }
        self.edges()
            .into_iter()
            .all(|(u, v)| position[u] < position[v])
    }

    /// Lazily enumerate every linear extension. Each call starts over.
    pub fn linear_extensions(&self) -> LinearExtensions {
        LinearExtensions::new(self)
    }

    /// Number of linear extensions, or `None` if there are more than `limit`.
    pub fn count_extensions_up_to(&self, limit: usize) -> Option<usize> {
        let count = self
            .linear_extensions()
            .take(limit.saturating_add(1))
            .count();
        (count <= limit).then_some(count)
    }
}

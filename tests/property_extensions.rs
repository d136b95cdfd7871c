// tests/property_extensions.rs

mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use riskorder::dag::PrecedenceGraph;
use riskorder::search::expected_hours_saved;

use common::all_permutations;

// Strategy to generate a random DAG over up to `max_tasks` nodes.
// Acyclicity comes from only allowing edges from a lower to a higher index;
// a random relabeling is applied afterwards so edges are not all "forward".
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_tasks).prop_flat_map(|n| {
        let pairs = proptest::collection::vec((0..n, 0..n), 0..(n * 2));
        let perm = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        (Just(n), pairs, perm).prop_map(|(n, pairs, perm)| {
            let edges: Vec<(usize, usize)> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .map(|(a, b)| (perm[a], perm[b]))
                .collect();
            (n, edges)
        })
    })
}

fn respects(p: &[usize], edges: &[(usize, usize)]) -> bool {
    let mut pos = vec![0; p.len()];
    for (i, &t) in p.iter().enumerate() {
        pos[t] = i;
    }
    edges.iter().all(|&(u, v)| pos[u] < pos[v])
}

fn brute_reaches(n: usize, edges: &[(usize, usize)], from: usize, to: usize) -> bool {
    let mut seen = vec![false; n];
    let mut stack = vec![from];
    while let Some(u) = stack.pop() {
        for &(a, b) in edges {
            if a == u && !seen[b] {
                seen[b] = true;
                stack.push(b);
            }
        }
    }
    seen[to]
}

proptest! {
    #[test]
    fn enumerator_matches_brute_force((n, edges) in dag_strategy(6)) {
        let graph = PrecedenceGraph::build(n, &edges).unwrap();
        let emitted: Vec<Vec<usize>> = graph.linear_extensions().collect();
        let unique: HashSet<Vec<usize>> = emitted.iter().cloned().collect();
        prop_assert_eq!(unique.len(), emitted.len(), "duplicate extension emitted");

        let expected: HashSet<Vec<usize>> = all_permutations(n)
            .into_iter()
            .filter(|p| respects(p, &edges))
            .collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn reduction_preserves_reachability((n, edges) in dag_strategy(7)) {
        let graph = PrecedenceGraph::build(n, &edges).unwrap();
        let reduced = graph.reduced();
        prop_assert!(reduced.edge_count() <= graph.edge_count());
        for u in 0..n {
            for v in 0..n {
                if u == v {
                    continue;
                }
                let original = brute_reaches(n, &edges, u, v);
                prop_assert_eq!(original, reduced.reaches(u, v), "pair ({}, {})", u, v);
            }
        }
    }

    #[test]
    fn reduction_keeps_the_same_extensions((n, edges) in dag_strategy(6)) {
        let graph = PrecedenceGraph::build(n, &edges).unwrap();
        let full: Vec<_> = graph.linear_extensions().collect();
        let reduced: Vec<_> = graph.reduced().linear_extensions().collect();
        prop_assert_eq!(full, reduced);
    }

    #[test]
    fn zero_failure_rates_always_score_zero(
        durations in proptest::collection::vec(0.0f64..100.0, 1..7),
        seed in any::<u64>(),
    ) {
        let n = durations.len();
        let rates = vec![0.0; n];
        let mut order: Vec<usize> = (0..n).collect();
        order.rotate_left((seed as usize) % n);
        prop_assert_eq!(expected_hours_saved(&order, &durations, &rates), 0.0);
    }

    #[test]
    fn scores_are_finite_and_non_negative(
        tasks in proptest::collection::vec((0.0f64..50.0, 0.0f64..=1.0), 0..8),
    ) {
        let durations: Vec<f64> = tasks.iter().map(|t| t.0).collect();
        let rates: Vec<f64> = tasks.iter().map(|t| t.1).collect();
        let order: Vec<usize> = (0..tasks.len()).rev().collect();
        let score = expected_hours_saved(&order, &durations, &rates);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
        prop_assert!(score <= durations.iter().sum::<f64>());
    }
}

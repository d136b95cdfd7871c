// src/input/edges.rs

use crate::errors::{Result, RiskorderError};
use crate::types::Edge;

/// Expand a chained edge line into individual edges.
///
/// `0,1->2->3,4` becomes `(0,2) (1,2) (2,3) (2,4)`: every index of one group
/// precedes every index of the next group.
pub fn parse_edge_line(line: &str, line_no: usize, task_count: usize) -> Result<Vec<Edge>> {
    let groups = line
        .split("->")
        .map(|group| parse_group(group, line_no, task_count))
        .collect::<Result<Vec<_>>>()?;

    if groups.len() < 2 {
        return Err(RiskorderError::Parse {
            line: line_no,
            message: format!("edge line needs at least two groups joined by `->`, got `{line}`"),
        });
    }

    let mut edges = Vec::new();
    for pair in groups.windows(2) {
        for &from in &pair[0] {
            for &to in &pair[1] {
                edges.push((from, to));
            }
        }
    }
    Ok(edges)
}

fn parse_group(group: &str, line_no: usize, task_count: usize) -> Result<Vec<usize>> {
    group
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            let index: usize = tok.parse().map_err(|_| RiskorderError::Parse {
                line: line_no,
                message: format!("invalid task index `{tok}` in edge line"),
            })?;
            if index >= task_count {
                return Err(RiskorderError::UnknownTask {
                    line: line_no,
                    index,
                    task_count,
                });
            }
            Ok(index)
        })
        .collect()
}

// src/input/mod.rs

//! Reader for the plain-text task list.
//!
//! The input has a `tasks` section followed by an `edges` section:
//!
//! ```text
//! tasks:
//! 0. Write parser, 3 hours, 90
//! 1. Ship it, 1 day, 50%
//!
//! edges:
//! 0->1
//! ```
//!
//! Section headers are optional; without them the first blank line after at
//! least one task starts the edges section. A line made only of indices,
//! commas and `->` always starts the edges section.

pub mod edges;
pub mod tasks;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::types::{Edge, Task};

pub use edges::parse_edge_line;
pub use tasks::parse_task_line;

/// Tasks and edges read from one input document.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub tasks: Vec<Task>,
    pub edges: Vec<Edge>,
}

impl ParsedInput {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.tasks.iter().map(|t| t.duration_hours).collect()
    }

    pub fn failure_rates(&self) -> Vec<f64> {
        self.tasks.iter().map(|t| t.failure_rate).collect()
    }

    /// Task names in the order given by `schedule`.
    pub fn names_in_order<'a>(&'a self, schedule: &'a [usize]) -> impl Iterator<Item = &'a str> {
        schedule.iter().map(move |&i| self.tasks[i].name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Tasks,
    Edges,
}

/// Parse a whole input document.
///
/// Task lines are validated as they are read; edge lines are checked against
/// the final task count once every task is known.
pub fn parse_input(text: &str) -> Result<ParsedInput> {
    let mut section = Section::Tasks;
    let mut explicit_headers = false;
    let mut tasks = Vec::new();
    let mut edge_lines: Vec<(usize, &str)> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() {
            if !explicit_headers && section == Section::Tasks && !tasks.is_empty() {
                section = Section::Edges;
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if let Some(header) = section_header(line) {
            section = header;
            explicit_headers = true;
            continue;
        }

        if section == Section::Tasks && is_edge_line(line) {
            section = Section::Edges;
        }

        match section {
            Section::Tasks => tasks.push(parse_task_line(line, line_no, tasks.len())?),
            Section::Edges => edge_lines.push((line_no, line)),
        }
    }

    let mut edges = Vec::new();
    for (line_no, line) in edge_lines {
        edges.extend(parse_edge_line(line, line_no, tasks.len())?);
    }

    debug!(tasks = tasks.len(), edges = edges.len(), "parsed input");
    Ok(ParsedInput { tasks, edges })
}

/// Read and parse from a file, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<ParsedInput> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_input(&text)
}

/// Edge lines are indices, commas and arrows only; task lines always
/// contain a `.` after the index.
fn is_edge_line(line: &str) -> bool {
    line.contains("->")
        && line
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, ',' | '-' | '>'))
}

fn section_header(line: &str) -> Option<Section> {
    match line.trim_end_matches(':').trim().to_lowercase().as_str() {
        "tasks" => Some(Section::Tasks),
        "edges" => Some(Section::Edges),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RiskorderError;

    #[test]
    fn blank_line_separates_sections_without_headers() {
        let input = "0. A, 10 hours, 50\n1. B, 2 hours, 90\n\n0->1\n";
        let parsed = parse_input(input).unwrap();
        assert_eq!(parsed.task_count(), 2);
        assert_eq!(parsed.edges, vec![(0, 1)]);
    }

    #[test]
    fn explicit_headers_allow_blank_lines_inside_tasks() {
        let input = "# plan\ntasks:\n0. A, 1 hour, 50\n\n1. B, 1 day, 50\nedges:\n1 -> 0\n";
        let parsed = parse_input(input).unwrap();
        assert_eq!(parsed.task_count(), 2);
        assert_eq!(parsed.tasks[1].duration_hours, 24.0);
        assert_eq!(parsed.edges, vec![(1, 0)]);
    }

    #[test]
    fn edges_after_tasks_header_need_no_edges_header() {
        let input = "tasks:\n0. A, 1 hour, 50\n1. B, 1 hour, 50\n\n0->1\n";
        let parsed = parse_input(input).unwrap();
        assert_eq!(parsed.task_count(), 2);
        assert_eq!(parsed.edges, vec![(0, 1)]);
    }

    #[test]
    fn edge_line_directly_after_tasks_starts_edges() {
        let input = "0. A, 1 hour, 50\n1. B, 1 hour, 50\n1 -> 0\n";
        let parsed = parse_input(input).unwrap();
        assert_eq!(parsed.edges, vec![(1, 0)]);
    }

    #[test]
    fn task_names_with_arrows_stay_tasks() {
        let input = "0. Map a->b, 1 hour, 50\n";
        let parsed = parse_input(input).unwrap();
        assert_eq!(parsed.tasks[0].name, "Map a->b");
        assert!(parsed.edges.is_empty());
    }

    #[test]
    fn edges_are_checked_against_final_task_count() {
        let input = "edges:\n0->2\ntasks:\n0. A, 1 hour, 50\n1. B, 1 hour, 50\n";
        match parse_input(input) {
            Err(RiskorderError::UnknownTask {
                line,
                index,
                task_count,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(index, 2);
                assert_eq!(task_count, 2);
            }
            other => panic!("expected UnknownTask, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_has_no_tasks() {
        let parsed = parse_input("").unwrap();
        assert_eq!(parsed.task_count(), 0);
        assert!(parsed.edges.is_empty());
    }
}

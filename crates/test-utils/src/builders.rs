#![allow(dead_code)]

use std::fmt::Write as _;

use riskorder::input::{ParsedInput, parse_input};
use riskorder::types::Task;

/// Builder for `ParsedInput` to simplify test setup.
///
/// Tasks get indices in the order they are added.
#[derive(Debug, Clone, Default)]
pub struct InputBuilder {
    input: ParsedInput,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task with a duration in hours and a failure rate in `[0, 1]`.
    pub fn task(mut self, name: &str, hours: f64, failure_rate: f64) -> Self {
        let index = self.input.tasks.len();
        self.input.tasks.push(Task {
            index,
            name: name.to_string(),
            duration_hours: hours,
            failure_rate,
        });
        self
    }

    pub fn edge(mut self, from: usize, to: usize) -> Self {
        self.input.edges.push((from, to));
        self
    }

    pub fn build(self) -> ParsedInput {
        self.input
    }

    /// Render in the text format read by the binary.
    ///
    /// The text carries success percentages, so `failure_rate` should be a
    /// multiple of 0.01 for an exact round trip.
    pub fn to_text(&self) -> String {
        let mut out = String::from("tasks:\n");
        for t in &self.input.tasks {
            let percent = (1.0 - t.failure_rate) * 100.0;
            let _ = writeln!(
                out,
                "{}. {}, {} hours, {}",
                t.index, t.name, t.duration_hours, percent
            );
        }
        out.push_str("edges:\n");
        for (from, to) in &self.input.edges {
            let _ = writeln!(out, "{from}->{to}");
        }
        out
    }

    /// `to_text` parsed back through the real reader.
    pub fn parse_text(&self) -> ParsedInput {
        parse_input(&self.to_text()).expect("builder renders valid input")
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Index of a task in declaration order (`0..n`).
pub type TaskIndex = usize;

/// A candidate execution order: every task index exactly once.
pub type Schedule = Vec<TaskIndex>;

/// How the search driver produces candidate schedules.
///
/// - `Exhaustive`: walk every linear extension of the precedence graph.
/// - `Sampled`: draw a bounded number of extensions per random relabeling.
/// - `Auto`: count extensions up to the exhaustive limit and pick one of the
///   above (default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Auto,
    Exhaustive,
    Sampled,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Auto
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "exhaustive" => Ok(Strategy::Exhaustive),
            "sampled" => Ok(Strategy::Sampled),
            other => Err(format!(
                "invalid strategy: {other} (expected \"auto\", \"exhaustive\" or \"sampled\")"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Auto => "auto",
            Strategy::Exhaustive => "exhaustive",
            Strategy::Sampled => "sampled",
        };
        f.write_str(s)
    }
}

/// One task as declared in the input.
///
/// `failure_rate` is the probability that the task fails and aborts the rest
/// of the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub index: TaskIndex,
    pub name: String,
    pub duration_hours: f64,
    pub failure_rate: f64,
}

/// A precedence constraint: `.0` must run before `.1`.
pub type Edge = (TaskIndex, TaskIndex);

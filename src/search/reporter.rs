// src/search/reporter.rs

use tracing::{error, info};

use crate::types::TaskIndex;

/// Progress sink for a search run.
///
/// Passed explicitly to the driver so tests can record what a run reports.
pub trait Reporter {
    fn info(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// A strictly better schedule was found.
    fn improved(&mut self, score: f64, schedule: &[TaskIndex]) {
        self.info(&format!("new best schedule ({score:.6}): {schedule:?}"));
    }
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&mut self, message: &str) {
        info!("{message}");
    }

    fn error(&mut self, message: &str) {
        error!("{message}");
    }

    fn improved(&mut self, score: f64, schedule: &[TaskIndex]) {
        info!(score, ?schedule, "new best schedule");
    }
}

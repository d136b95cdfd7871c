use riskorder::search::Reporter;

/// Reporter that keeps everything it is told.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub infos: Vec<String>,
    pub errors: Vec<String>,
    pub improvements: Vec<(f64, Vec<usize>)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schedules reported as improvements, in order.
    pub fn trace(&self) -> Vec<Vec<usize>> {
        self.improvements.iter().map(|(_, s)| s.clone()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{message}");
        self.errors.push(message.to_string());
    }

    fn improved(&mut self, score: f64, schedule: &[usize]) {
        self.improvements.push((score, schedule.to_vec()));
    }
}

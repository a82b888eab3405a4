use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Durations of the pipeline steps in the order they ran. A filter used
/// twice shows up as two steps.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        self.steps.push(StepTiming {
            name: name.into(),
            duration,
        });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Combined duration of every step called `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.duration)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            debug!(
                "{:<24} {:>12.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        debug!("{:<24} {:>12.3}ms", "total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Stops the timer and records it in `timings`.
    pub fn stop_into(self, timings: &mut PipelineTimings) {
        timings.add_step(self.name, self.start.elapsed());
    }
}

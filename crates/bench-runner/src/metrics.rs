//! Per-benchmark timings and outcomes.

use bench_core::Shape;
use bench_schemas::{Library, Mode};
use serde::Serialize;
use std::time::Duration;

/// Timing of the measured passes of one benchmark. One pass validates every
/// record in the dataset once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Number of measured passes.
    pub iterations: usize,
}

impl Timing {
    /// Aggregate pass durations. Returns `None` when nothing was measured.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let millis: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        let total: f64 = millis.iter().sum();
        let min_ms = millis.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ms = millis.iter().copied().fold(0.0f64, f64::max);

        Some(Self {
            average_ms: total / millis.len() as f64,
            min_ms,
            max_ms,
            iterations: millis.len(),
        })
    }

    /// Records validated per second at the average pass time.
    pub fn records_per_second(&self, records: usize) -> Option<f64> {
        if self.average_ms > 0.0 {
            Some(records as f64 / (self.average_ms / 1000.0))
        } else {
            None
        }
    }
}

/// How a benchmark ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Measured by the manual runner.
    Completed(Timing),
    /// Measured by criterion, which prints its own statistics.
    Delegated,
    /// A record was rejected; the benchmark has no timing.
    Failed { reason: String },
}

/// One entry of a run report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub library: Library,
    pub mode: Mode,
    pub shape: Shape,
    /// Dataset size.
    pub records: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl BenchmarkResult {
    pub fn timing(&self) -> Option<&Timing> {
        match &self.outcome {
            Outcome::Completed(timing) => Some(timing),
            _ => None,
        }
    }

    /// Average pass time, or `f64::INFINITY` for failed benchmarks.
    ///
    /// Delegated benchmarks have no timing of their own and also sort last.
    pub fn average_ms(&self) -> f64 {
        self.timing().map_or(f64::INFINITY, |t| t.average_ms)
    }

    pub fn records_per_second(&self) -> Option<f64> {
        self.timing().and_then(|t| t.records_per_second(self.records))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

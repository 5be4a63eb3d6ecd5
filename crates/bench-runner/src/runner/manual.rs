use super::{on_failure, BenchmarkRunner};
use crate::error::RunError;
use crate::metrics::{Outcome, Timing};
use crate::registry::{BenchmarkRegistry, RegisteredBenchmark};
use crate::report::RunReport;
use crate::settings::{ErrorPolicy, RunnerKind};
use bench_schemas::ValidationError;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Timing loop: one untimed warmup pass, then `iterations` timed passes.
#[derive(Debug, Clone)]
pub struct ManualRunner {
    iterations: usize,
    policy: ErrorPolicy,
}

impl ManualRunner {
    pub fn new(iterations: usize, policy: ErrorPolicy) -> Self {
        Self { iterations, policy }
    }

    /// Per-pass durations for `bench`, warmup excluded.
    fn measure(&self, bench: &RegisteredBenchmark) -> Result<Vec<Duration>, ValidationError> {
        let mut feed = bench.feed();

        // Warmup
        bench.pass(&mut feed)?;

        let mut samples: Vec<Duration> = Vec::with_capacity(self.iterations);
        for _ in 0..self.iterations {
            let start = Instant::now();
            bench.pass(&mut feed)?;
            samples.push(start.elapsed());
        }

        Ok(samples)
    }
}

impl BenchmarkRunner for ManualRunner {
    fn kind(&self) -> RunnerKind {
        RunnerKind::Manual
    }

    fn run(&mut self, registry: &BenchmarkRegistry) -> Result<RunReport, RunError> {
        if registry.is_empty() {
            return Err(RunError::NothingToRun);
        }
        if self.iterations == 0 {
            return Err(RunError::Config(
                "iterations must be at least 1 for the manual runner".to_string(),
            ));
        }

        info!(
            benchmarks = registry.len(),
            iterations = self.iterations,
            "Starting manual benchmark run"
        );

        let mut results = Vec::with_capacity(registry.len());
        for bench in registry.iter() {
            debug!(benchmark = bench.name(), shape = %bench.shape(), "Running");

            let outcome = match self.measure(bench) {
                Ok(samples) => {
                    let timing = Timing::from_samples(&samples).ok_or_else(|| {
                        RunError::Config(format!("{} produced no timed passes", bench.name()))
                    })?;
                    debug!(
                        benchmark = bench.name(),
                        average_ms = timing.average_ms,
                        "Finished"
                    );
                    Outcome::Completed(timing)
                }
                Err(e) => on_failure(self.policy, bench, e)?,
            };
            results.push(bench.result(outcome));
        }

        Ok(RunReport::new(self.kind(), self.policy, results).with_iterations(self.iterations))
    }
}

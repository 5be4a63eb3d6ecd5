//! Runners execute every registered benchmark and produce a report.

mod delegated;
mod manual;

pub use self::delegated::CriterionRunner;
pub use self::manual::ManualRunner;

use crate::error::RunError;
use crate::metrics::Outcome;
use crate::registry::{BenchmarkRegistry, RegisteredBenchmark};
use crate::report::RunReport;
use crate::settings::{ErrorPolicy, RunnerConfig, RunnerKind};
use bench_schemas::ValidationError;
use tracing::warn;

/// Executes a registry.
pub trait BenchmarkRunner {
    fn kind(&self) -> RunnerKind;

    /// Run every benchmark in registration order.
    fn run(&mut self, registry: &BenchmarkRegistry) -> Result<RunReport, RunError>;
}

/// Build the runner `config` selects.
pub fn runner_for(config: &RunnerConfig) -> Result<Box<dyn BenchmarkRunner>, RunError> {
    config.validate().map_err(RunError::Config)?;

    let runner: Box<dyn BenchmarkRunner> = match config.kind {
        RunnerKind::Manual => Box::new(ManualRunner::new(config.iterations, config.error_policy)),
        RunnerKind::Criterion => {
            Box::new(CriterionRunner::new(config.criterion, config.error_policy))
        }
    };
    Ok(runner)
}

/// Apply `policy` to a rejected record.
pub(crate) fn on_failure(
    policy: ErrorPolicy,
    bench: &RegisteredBenchmark,
    error: ValidationError,
) -> Result<Outcome, RunError> {
    match policy {
        ErrorPolicy::Abort => Err(RunError::Validation {
            benchmark: bench.name().to_string(),
            source: error,
        }),
        ErrorPolicy::Continue => {
            warn!(
                benchmark = bench.name(),
                shape = %bench.shape(),
                error = %error,
                "Benchmark failed; continuing"
            );
            Ok(Outcome::Failed {
                reason: error.to_string(),
            })
        }
    }
}

use super::{on_failure, BenchmarkRunner};
use crate::error::RunError;
use crate::metrics::Outcome;
use crate::registry::BenchmarkRegistry;
use crate::report::RunReport;
use crate::settings::{CriterionSettings, ErrorPolicy, RunnerKind};
use criterion::{Criterion, Throughput};
use tracing::{debug, info};

/// Hands every benchmark to criterion, one group per shape.
///
/// Criterion panics on a failing closure, so a preflight pass validates
/// every record once and applies the error policy before any measurement.
/// Criterion prints its own statistics; the report only lists which
/// benchmarks ran.
#[derive(Debug, Clone)]
pub struct CriterionRunner {
    settings: CriterionSettings,
    policy: ErrorPolicy,
}

impl CriterionRunner {
    pub fn new(settings: CriterionSettings, policy: ErrorPolicy) -> Self {
        Self { settings, policy }
    }

    fn criterion(&self) -> Criterion {
        Criterion::default()
            .warm_up_time(self.settings.warm_up_time)
            .measurement_time(self.settings.measurement_time)
            .sample_size(self.settings.sample_size)
            .without_plots()
    }

    /// Measure every benchmark whose outcome is still open.
    fn measure(&self, registry: &BenchmarkRegistry, outcomes: &mut [Option<Outcome>]) {
        let mut criterion = self.criterion();
        for shape in registry.shapes() {
            let pending = registry
                .iter()
                .zip(outcomes.iter())
                .any(|(bench, outcome)| bench.shape() == shape && outcome.is_none());
            if !pending {
                continue;
            }

            let mut group = criterion.benchmark_group(shape.as_str());
            group.throughput(Throughput::Elements(1));

            for (bench, outcome) in registry.iter().zip(outcomes.iter_mut()) {
                if bench.shape() != shape || outcome.is_some() {
                    continue;
                }
                debug!(benchmark = bench.name(), shape = %shape, "Measuring");

                let mut feed = bench.feed();
                group.bench_function(bench.name(), |b| b.iter(|| bench.step(&mut feed)));
                *outcome = Some(Outcome::Delegated);
            }
            group.finish();
        }
        criterion.final_summary();
    }
}

impl BenchmarkRunner for CriterionRunner {
    fn kind(&self) -> RunnerKind {
        RunnerKind::Criterion
    }

    fn run(&mut self, registry: &BenchmarkRegistry) -> Result<RunReport, RunError> {
        if registry.is_empty() {
            return Err(RunError::NothingToRun);
        }

        info!(benchmarks = registry.len(), "Preflight validation");
        let mut outcomes: Vec<Option<Outcome>> = Vec::with_capacity(registry.len());
        for bench in registry.iter() {
            let outcome = match bench.pass(&mut bench.feed()) {
                Ok(()) => None,
                Err(e) => Some(on_failure(self.policy, bench, e)?),
            };
            outcomes.push(outcome);
        }

        let survivors = outcomes.iter().filter(|o| o.is_none()).count();
        if survivors > 0 {
            info!(benchmarks = survivors, "Handing benchmarks to criterion");
            self.measure(registry, &mut outcomes);
        }

        let results = registry
            .iter()
            .zip(outcomes)
            .map(|(bench, outcome)| bench.result(outcome.unwrap_or(Outcome::Delegated)))
            .collect();

        Ok(RunReport::new(self.kind(), self.policy, results))
    }
}

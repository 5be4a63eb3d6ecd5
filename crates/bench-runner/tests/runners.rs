//! Runner behaviour on real generated data and on rejecting validators.

use bench_core::{Dataset, Shape};
use bench_generator::DataGenerator;
use bench_runner::{
    format_table, runner_for, BenchmarkRegistry, CriterionRunner, CriterionSettings,
    ErrorPolicy, ManualRunner, Outcome, RunError, RunnerConfig, RunnerKind, BenchmarkRunner,
};
use bench_schemas::{build, build_all, Library, Mode, ValidationError, Validator};
use serde_json::Value;
use std::time::Duration;

/// Rejects every record.
struct RejectAll;

impl Validator for RejectAll {
    fn library(&self) -> Library {
        Library::Garde
    }

    fn mode(&self) -> Mode {
        Mode::Default
    }

    fn shape(&self) -> Shape {
        Shape::Simple
    }

    fn validate(&self, _value: &Value) -> Result<(), ValidationError> {
        Err(ValidationError::new(
            Library::Garde,
            Shape::Simple,
            "always rejects",
        ))
    }
}

fn simple_dataset(count: usize) -> Dataset {
    DataGenerator::new(Some(42))
        .dataset(Shape::Simple, count)
        .unwrap()
}

fn registry_with_failure(dataset: &Dataset) -> BenchmarkRegistry {
    let mut registry = BenchmarkRegistry::new();
    registry
        .register(
            dataset,
            build(Library::Serde, Mode::Default, Shape::Simple).unwrap(),
        )
        .unwrap();
    registry.register(dataset, Box::new(RejectAll)).unwrap();
    registry
        .register(
            dataset,
            build(Library::JsonSchema, Mode::Compiled, Shape::Simple).unwrap(),
        )
        .unwrap();
    registry
}

#[test]
fn test_manual_run_over_both_shapes() {
    let mut generator = DataGenerator::new(Some(7));
    let mut registry = BenchmarkRegistry::new();
    for shape in Shape::ALL {
        let dataset = generator.dataset(shape, 20).unwrap();
        registry
            .register_all(&dataset, build_all(&Library::ALL, shape).unwrap())
            .unwrap();
    }

    let report = ManualRunner::new(3, ErrorPolicy::Abort)
        .run(&registry)
        .unwrap();

    assert_eq!(report.results.len(), 10);
    assert_eq!(report.iterations, Some(3));
    assert!(!report.has_failures());
    for result in &report.results {
        let timing = result.timing().expect("manual runs are measured");
        assert_eq!(timing.iterations, 3);
        assert_eq!(result.records, 20);
        assert!(timing.min_ms <= timing.average_ms && timing.average_ms <= timing.max_ms);
    }
    for shape in Shape::ALL {
        assert_eq!(report.ranking(shape).len(), 5);
        assert!(report.speedup(report.baseline_for(shape).unwrap()).is_some());
    }
}

#[test]
fn test_manual_continue_marks_failure_and_keeps_going() {
    let dataset = simple_dataset(5);
    let registry = registry_with_failure(&dataset);

    let report = ManualRunner::new(2, ErrorPolicy::Continue)
        .run(&registry)
        .unwrap();

    assert_eq!(report.results.len(), 3);
    assert!(matches!(report.results[1].outcome, Outcome::Failed { .. }));
    assert_eq!(report.results[1].average_ms(), f64::INFINITY);
    assert!(report.results[2].timing().is_some());

    let ranked: Vec<&str> = report
        .ranking(Shape::Simple)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(ranked.len(), 2);
    assert!(!ranked.contains(&"garde"));

    let table = format_table(&report);
    assert!(table.contains("garde: garde rejected simple record: always rejects"));
}

#[test]
fn test_manual_abort_returns_error() {
    let dataset = simple_dataset(5);
    let registry = registry_with_failure(&dataset);

    let err = ManualRunner::new(2, ErrorPolicy::Abort)
        .run(&registry)
        .unwrap_err();

    match err {
        RunError::Validation { benchmark, source } => {
            assert_eq!(benchmark, "garde");
            assert_eq!(source.message, "always rejects");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_manual_zero_iterations_is_rejected() {
    let dataset = simple_dataset(5);
    let mut registry = BenchmarkRegistry::new();
    registry
        .register(
            &dataset,
            build(Library::Serde, Mode::Default, Shape::Simple).unwrap(),
        )
        .unwrap();

    let err = ManualRunner::new(0, ErrorPolicy::Continue)
        .run(&registry)
        .unwrap_err();
    assert!(matches!(err, RunError::Config(_)));
}

#[test]
fn test_criterion_measures_surviving_benchmarks() {
    let mut generator = DataGenerator::new(Some(42));
    let mut registry = BenchmarkRegistry::new();
    for shape in Shape::ALL {
        let dataset = generator.dataset(shape, 5).unwrap();
        registry
            .register(&dataset, build(Library::Serde, Mode::Default, shape).unwrap())
            .unwrap();
    }

    let settings = CriterionSettings {
        warm_up_time: Duration::from_millis(10),
        measurement_time: Duration::from_millis(20),
        sample_size: CriterionSettings::MIN_SAMPLE_SIZE,
    };
    let report = CriterionRunner::new(settings, ErrorPolicy::Abort)
        .run(&registry)
        .unwrap();

    assert_eq!(report.runner, RunnerKind::Criterion);
    assert_eq!(report.iterations, None);
    assert_eq!(report.results.len(), 2);
    assert!(report
        .results
        .iter()
        .all(|r| matches!(r.outcome, Outcome::Delegated)));
    for shape in Shape::ALL {
        assert!(report.ranking(shape).is_empty());
    }
}

#[test]
fn test_criterion_preflight_applies_abort() {
    let dataset = simple_dataset(5);
    let registry = registry_with_failure(&dataset);

    let err = CriterionRunner::new(CriterionSettings::default(), ErrorPolicy::Abort)
        .run(&registry)
        .unwrap_err();
    assert!(matches!(err, RunError::Validation { .. }));
}

#[test]
fn test_criterion_preflight_applies_continue() {
    let dataset = simple_dataset(5);
    let mut registry = BenchmarkRegistry::new();
    registry.register(&dataset, Box::new(RejectAll)).unwrap();

    let report = CriterionRunner::new(CriterionSettings::default(), ErrorPolicy::Continue)
        .run(&registry)
        .unwrap();

    assert_eq!(report.runner, RunnerKind::Criterion);
    assert!(report.results[0].is_failed());
    assert!(report.ranking(Shape::Simple).is_empty());
}

#[test]
fn test_empty_registry_is_an_error() {
    let mut runner = runner_for(&RunnerConfig::default()).unwrap();
    assert!(matches!(
        runner.run(&BenchmarkRegistry::new()),
        Err(RunError::NothingToRun)
    ));
}

#[test]
fn test_runner_for_rejects_invalid_config() {
    let config = RunnerConfig {
        iterations: 0,
        ..Default::default()
    };
    assert!(matches!(runner_for(&config), Err(RunError::Config(_))));

    let criterion = RunnerConfig {
        kind: RunnerKind::Criterion,
        ..Default::default()
    };
    assert_eq!(runner_for(&criterion).unwrap().kind(), RunnerKind::Criterion);
}

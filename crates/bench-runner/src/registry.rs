//! Benchmark registration.
//!
//! Each registered benchmark pairs one validator with the dataset of its
//! shape and a cyclic feed over that dataset.

use crate::error::RunError;
use crate::feed::CyclicFeed;
use crate::metrics::{BenchmarkResult, Outcome};
use bench_core::{Dataset, Shape};
use bench_schemas::{Library, Mode, ValidationError, Validator};
use serde_json::Value;
use std::hint::black_box;
use tracing::debug;

/// One (library, mode, shape) benchmark.
pub struct RegisteredBenchmark {
    name: String,
    dataset: Dataset,
    validator: Box<dyn Validator>,
    feed: CyclicFeed<Value>,
}

impl RegisteredBenchmark {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> Shape {
        self.dataset.shape()
    }

    pub fn library(&self) -> Library {
        self.validator.library()
    }

    pub fn mode(&self) -> Mode {
        self.validator.mode()
    }

    /// Number of records in one pass.
    pub fn records(&self) -> usize {
        self.dataset.len()
    }

    /// A fresh feed positioned at the first record.
    pub fn feed(&self) -> CyclicFeed<Value> {
        self.feed.clone()
    }

    /// Validate the next record from `feed`. This is the measured body.
    #[inline]
    pub fn step(&self, feed: &mut CyclicFeed<Value>) -> Result<(), ValidationError> {
        black_box(self.validator.validate(black_box(feed.next_record())))
    }

    /// Validate every record once, in order, from `feed`.
    pub fn pass(&self, feed: &mut CyclicFeed<Value>) -> Result<(), ValidationError> {
        for _ in 0..feed.len() {
            self.step(feed)?;
        }
        Ok(())
    }

    /// Build a report entry for this benchmark.
    pub fn result(&self, outcome: Outcome) -> BenchmarkResult {
        BenchmarkResult {
            name: self.name.clone(),
            library: self.library(),
            mode: self.mode(),
            shape: self.shape(),
            records: self.records(),
            outcome,
        }
    }
}

impl std::fmt::Debug for RegisteredBenchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredBenchmark")
            .field("name", &self.name)
            .field("shape", &self.shape())
            .field("records", &self.records())
            .finish()
    }
}

/// Ordered collection of benchmarks, executed in registration order.
#[derive(Debug, Default)]
pub struct BenchmarkRegistry {
    benchmarks: Vec<RegisteredBenchmark>,
}

impl BenchmarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `validator` against `dataset`. The dataset is shared, not
    /// copied.
    pub fn register(
        &mut self,
        dataset: &Dataset,
        validator: Box<dyn Validator>,
    ) -> Result<(), RunError> {
        let name = validator.name();

        if validator.shape() != dataset.shape() {
            return Err(RunError::ShapeMismatch {
                benchmark: name,
                expected: validator.shape(),
                actual: dataset.shape(),
            });
        }

        let feed = CyclicFeed::new(dataset.shared()).ok_or_else(|| RunError::EmptyDataset {
            benchmark: name.clone(),
            shape: dataset.shape(),
        })?;

        debug!(
            benchmark = %name,
            shape = %dataset.shape(),
            records = dataset.len(),
            "Registered benchmark"
        );

        self.benchmarks.push(RegisteredBenchmark {
            name,
            dataset: dataset.clone(),
            validator,
            feed,
        });
        Ok(())
    }

    /// Register each validator against `dataset`, in order.
    pub fn register_all(
        &mut self,
        dataset: &Dataset,
        validators: Vec<Box<dyn Validator>>,
    ) -> Result<(), RunError> {
        for validator in validators {
            self.register(dataset, validator)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredBenchmark> {
        self.benchmarks.iter()
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Shapes present, in first-registration order.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for bench in &self.benchmarks {
            if !shapes.contains(&bench.shape()) {
                shapes.push(bench.shape());
            }
        }
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_schemas::build;
    use serde_json::json;

    fn simple_dataset(count: usize) -> Dataset {
        let values = (0..count)
            .map(|i| json!({"name": format!("user_{i}"), "age": 30}))
            .collect();
        Dataset::from_values(Shape::Simple, values)
    }

    #[test]
    fn test_register_and_iterate_in_order() {
        let dataset = simple_dataset(3);
        let mut registry = BenchmarkRegistry::new();
        registry
            .register_all(
                &dataset,
                bench_schemas::build_all(&Library::ALL, Shape::Simple).unwrap(),
            )
            .unwrap();

        let names: Vec<&str> = registry.iter().map(|b| b.name()).collect();
        assert_eq!(
            names,
            vec![
                "serde",
                "validator",
                "garde",
                "jsonschema",
                "jsonschema (compiled)"
            ]
        );
        assert_eq!(registry.shapes(), vec![Shape::Simple]);
        assert!(registry.iter().all(|b| b.records() == 3));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let dataset = simple_dataset(0);
        let validator = build(Library::Serde, Mode::Default, Shape::Simple).unwrap();

        let err = BenchmarkRegistry::new()
            .register(&dataset, validator)
            .unwrap_err();
        assert!(matches!(err, RunError::EmptyDataset { shape: Shape::Simple, .. }));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let dataset = simple_dataset(2);
        let validator = build(Library::Serde, Mode::Default, Shape::Event).unwrap();

        let err = BenchmarkRegistry::new()
            .register(&dataset, validator)
            .unwrap_err();
        assert!(matches!(err, RunError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_each_feed_starts_fresh() {
        let dataset = simple_dataset(3);
        let mut registry = BenchmarkRegistry::new();
        registry
            .register(
                &dataset,
                build(Library::Serde, Mode::Default, Shape::Simple).unwrap(),
            )
            .unwrap();
        let bench = registry.iter().next().unwrap();

        let mut first = bench.feed();
        bench.step(&mut first).unwrap();
        assert_eq!(first.cursor(), 1);
        assert_eq!(bench.feed().cursor(), 0);

        bench.pass(&mut first).unwrap();
        assert_eq!(first.cursor(), 1);
    }
}

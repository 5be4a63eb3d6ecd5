//! Error types for registering and running benchmarks.

use bench_core::Shape;
use bench_schemas::ValidationError;
use thiserror::Error;

/// Errors that stop a benchmark run.
#[derive(Error, Debug)]
pub enum RunError {
    /// A record was rejected while the error policy is `abort`.
    #[error("Benchmark '{benchmark}' failed: {source}")]
    Validation {
        benchmark: String,
        #[source]
        source: ValidationError,
    },

    /// Benchmarks need at least one record to cycle over.
    #[error("Cannot register '{benchmark}': the {shape} dataset is empty")]
    EmptyDataset { benchmark: String, shape: Shape },

    /// Validator and dataset disagree on the record shape.
    #[error(
        "Cannot register '{benchmark}': validator expects {expected} records but the dataset holds {actual} records"
    )]
    ShapeMismatch {
        benchmark: String,
        expected: Shape,
        actual: Shape,
    },

    /// Runner settings are unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The registry had nothing to run.
    #[error("No benchmarks registered")]
    NothingToRun,
}

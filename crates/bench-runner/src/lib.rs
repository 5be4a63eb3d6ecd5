//! Benchmark registration, execution and reporting.
//!
//! A [`BenchmarkRegistry`] pairs every validator with the dataset of its
//! shape. A [`BenchmarkRunner`] executes the registry, either with the
//! built-in timing loop ([`ManualRunner`]) or by handing each benchmark to
//! criterion ([`CriterionRunner`]), and returns a [`RunReport`].

pub mod error;
pub mod feed;
pub mod metrics;
pub mod registry;
pub mod report;
pub mod runner;
pub mod settings;

pub use error::RunError;
pub use feed::CyclicFeed;
pub use metrics::{BenchmarkResult, Outcome, Timing};
pub use registry::{BenchmarkRegistry, RegisteredBenchmark};
pub use report::{format_markdown, format_table, RunReport, Severity};
pub use runner::{runner_for, BenchmarkRunner, CriterionRunner, ManualRunner};
pub use settings::{CriterionSettings, ErrorPolicy, RunnerConfig, RunnerKind};

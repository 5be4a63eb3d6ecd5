//! schema-bench
//!
//! A harness for comparing the speed of Rust data-validation libraries.
//! Synthetic records of two shapes are generated once, then every library
//! validates the same records and the timings are compared.
//!
//! # Workspace Crates
//!
//! - `bench_core` - record shapes, value ranges and shared datasets
//! - `bench_generator` - seeded synthetic record generation
//! - `bench_schemas` - one schema per library and shape behind a common `Validator` trait
//! - `bench_runner` - registration, the manual and criterion runners, reporting
//!
//! # CLI Usage
//!
//! ```bash
//! # Quick comparison of every library
//! schema-bench run --preset quick
//!
//! # Reproducible run over event records only, as markdown
//! schema-bench run --shapes event --seed 42 --format markdown
//!
//! # Statistical measurement through criterion
//! schema-bench run --runner criterion --measurement-time 5s
//!
//! # Print a few generated records
//! schema-bench generate --shape event --count 2 --seed 1
//! ```

pub mod config;
pub mod harness;

pub use config::{BenchArgs, BenchConfig, ConfigError, FileConfig, OutputFormat, PresetSize};

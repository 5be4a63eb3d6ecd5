//! Synthetic record generator for the schema-bench harness.
//!
//! This crate provides the [`DataGenerator`] which fills [`SimpleRecord`]
//! and [`EventRecord`] values with random data. Every field is drawn from the
//! domain declared in [`bench_core::ranges`], so all generated records are
//! well-formed by construction.
//!
//! # Example
//!
//! ```rust
//! use bench_core::Shape;
//! use bench_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(Some(42));
//! let records = generator.simple_records(3);
//! assert_eq!(records.len(), 3);
//!
//! let dataset = generator.dataset(Shape::Event, 10).unwrap();
//! assert_eq!(dataset.len(), 10);
//! ```
//!
//! [`SimpleRecord`]: bench_core::SimpleRecord
//! [`EventRecord`]: bench_core::EventRecord

pub mod generator;
pub mod generators;

pub use generator::{DataGenerator, GeneratorError, NameStyle};

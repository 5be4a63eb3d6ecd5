//! Core types for the schema-bench harness.
//!
//! This crate provides the foundational types shared by the generator,
//! the schema adapters and the runner:
//!
//! - [`SimpleRecord`] and [`EventRecord`] - the two benchmarked record shapes
//! - [`ranges`] - the documented value domain of every generated field
//! - [`Shape`] - tag selecting one of the two shapes
//! - [`Dataset`] - a fixed, read-only pool of records rendered as JSON
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-generator  (fills records with random values)
//!    ├─── bench-schemas    (one schema per library and shape)
//!    └─── bench-runner     (cyclic feed, runners, report)
//! ```

pub mod dataset;
pub mod ranges;
pub mod records;
pub mod shape;

pub use dataset::{Dataset, DatasetError};
pub use records::{
    BrowserName, ConnectionType, DeviceType, EventRecord, EventType, Language, OsName,
    PropertyValue, Record, SimpleRecord,
};
pub use shape::Shape;

//! Error types for schema adapters.

use crate::library::{Library, Mode};
use bench_core::Shape;
use thiserror::Error;

/// A record was rejected by a library.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{library} rejected {shape} record: {message}")]
pub struct ValidationError {
    pub library: Library,
    pub shape: Shape,
    /// Library-specific detail.
    pub message: String,
}

impl ValidationError {
    pub fn new(library: Library, shape: Shape, message: impl Into<String>) -> Self {
        Self {
            library,
            shape,
            message: message.into(),
        }
    }
}

/// A schema could not be prepared.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The JSON Schema document was rejected while compiling
    #[error("Invalid JSON Schema for {shape}: {message}")]
    InvalidJsonSchema { shape: Shape, message: String },

    /// The library has no such execution mode
    #[error("{library} has no {mode} mode")]
    UnsupportedMode { library: Library, mode: Mode },
}

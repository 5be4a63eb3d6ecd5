//! The `Validator` seam and the generic deserialize-then-check adapter.

use crate::error::ValidationError;
use crate::library::{benchmark_name, Library, Mode};
use bench_core::Shape;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// One library's schema for one record shape.
///
/// `validate` must not mutate its input and must give the same outcome for
/// the same value every time.
pub trait Validator: Send + Sync {
    fn library(&self) -> Library;

    fn mode(&self) -> Mode;

    fn shape(&self) -> Shape;

    /// Validate one JSON record.
    fn validate(&self, value: &Value) -> Result<(), ValidationError>;

    /// Display name used in reports.
    fn name(&self) -> String {
        benchmark_name(self.library(), self.mode())
    }
}

/// Rule check run on the parsed schema value.
pub type Check<S> = fn(&S) -> Result<(), String>;

/// Adapter for libraries that validate a typed struct: the JSON value is
/// deserialized into `S` and then handed to `check`.
pub struct DeserializeValidator<S> {
    library: Library,
    shape: Shape,
    check: Check<S>,
    _schema: PhantomData<fn() -> S>,
}

impl<S> DeserializeValidator<S> {
    pub fn new(library: Library, shape: Shape, check: Check<S>) -> Self {
        Self {
            library,
            shape,
            check,
            _schema: PhantomData,
        }
    }

    fn error(&self, message: impl Into<String>) -> ValidationError {
        ValidationError::new(self.library, self.shape, message)
    }
}

impl<S: DeserializeOwned> Validator for DeserializeValidator<S> {
    fn library(&self) -> Library {
        self.library
    }

    fn mode(&self) -> Mode {
        Mode::Default
    }

    fn shape(&self) -> Shape {
        self.shape
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let parsed = S::deserialize(value).map_err(|e| self.error(e.to_string()))?;
        (self.check)(&parsed).map_err(|message| self.error(message))
    }
}

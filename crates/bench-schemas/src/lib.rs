//! Schema adapters for the libraries compared by schema-bench.
//!
//! Each of the four libraries gets one schema per record shape, all
//! describing the same logical structure:
//!
//! | library      | schema definition                         | modes              |
//! |--------------|-------------------------------------------|--------------------|
//! | `serde`      | record structs + range checks             | default            |
//! | `validator`  | `#[derive(validator::Validate)]` structs  | default            |
//! | `garde`      | `#[derive(garde::Validate)]` structs      | default            |
//! | `jsonschema` | JSON Schema 2020-12 documents             | default, compiled  |
//!
//! Every adapter implements [`Validator`], taking the record as a
//! `serde_json::Value`.
//!
//! # Example
//!
//! ```rust
//! use bench_core::Shape;
//! use bench_schemas::{build, Library, Mode, Validator};
//!
//! let validator = build(Library::Garde, Mode::Default, Shape::Simple).unwrap();
//! let record = serde_json::json!({"name": "Ada", "age": 36});
//! assert!(validator.validate(&record).is_ok());
//! ```

// The event document is one large `json!` literal
#![recursion_limit = "256"]

pub mod adapter;
pub mod error;
pub mod garde_rules;
pub mod json_schema;
pub mod library;
pub mod typed;
pub mod validator_rules;

pub use adapter::{DeserializeValidator, Validator};
pub use error::{SchemaError, ValidationError};
pub use json_schema::JsonSchemaValidator;
pub use library::{benchmark_name, Library, Mode};

use bench_core::Shape;

/// Build the adapter for one (library, mode, shape).
pub fn build(library: Library, mode: Mode, shape: Shape) -> Result<Box<dyn Validator>, SchemaError> {
    if !library.modes().contains(&mode) {
        return Err(SchemaError::UnsupportedMode { library, mode });
    }

    let validator: Box<dyn Validator> = match (library, shape) {
        (Library::Serde, Shape::Simple) => Box::new(typed::simple()),
        (Library::Serde, Shape::Event) => Box::new(typed::event()),
        (Library::Validator, Shape::Simple) => Box::new(validator_rules::simple()),
        (Library::Validator, Shape::Event) => Box::new(validator_rules::event()),
        (Library::Garde, Shape::Simple) => Box::new(garde_rules::simple()),
        (Library::Garde, Shape::Event) => Box::new(garde_rules::event()),
        (Library::JsonSchema, shape) => Box::new(JsonSchemaValidator::new(shape, mode)?),
    };
    Ok(validator)
}

/// Build every mode of every listed library for `shape`, in list order.
pub fn build_all(
    libraries: &[Library],
    shape: Shape,
) -> Result<Vec<Box<dyn Validator>>, SchemaError> {
    let mut validators = Vec::new();
    for &library in libraries {
        for &mode in library.modes() {
            validators.push(build(library, mode, shape)?);
        }
    }
    Ok(validators)
}

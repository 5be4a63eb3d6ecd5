//! Identifiers for the benchmarked libraries and their execution modes.

use serde::{Deserialize, Serialize};

/// A competing validation library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// Typed deserialization plus explicit range checks.
    Serde,
    /// The `validator` derive crate.
    Validator,
    /// The `garde` derive crate.
    Garde,
    /// JSON Schema via the `jsonschema` crate.
    JsonSchema,
}

impl Library {
    pub const ALL: [Library; 4] = [
        Library::Serde,
        Library::Validator,
        Library::Garde,
        Library::JsonSchema,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Library::Serde => "serde",
            Library::Validator => "validator",
            Library::Garde => "garde",
            Library::JsonSchema => "jsonschema",
        }
    }

    /// Execution modes this library offers. Every library has a default
    /// mode; some also have a precompiled one.
    pub fn modes(&self) -> &'static [Mode] {
        match self {
            Library::JsonSchema => &[Mode::Default, Mode::Compiled],
            _ => &[Mode::Default],
        }
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Library {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serde" => Ok(Library::Serde),
            "validator" => Ok(Library::Validator),
            "garde" => Ok(Library::Garde),
            "jsonschema" | "json-schema" => Ok(Library::JsonSchema),
            _ => Err(format!("Unknown library: {s}")),
        }
    }
}

/// How a library executes its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The library's ordinary entry point.
    Default,
    /// A prepared validator built once and reused.
    Compiled,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Default => write!(f, "default"),
            Mode::Compiled => write!(f, "compiled"),
        }
    }
}

/// Display name of a (library, mode) pair, e.g. `jsonschema (compiled)`.
pub fn benchmark_name(library: Library, mode: Mode) -> String {
    match mode {
        Mode::Default => library.to_string(),
        Mode::Compiled => format!("{library} (compiled)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_from_str() {
        assert_eq!("GARDE".parse::<Library>().unwrap(), Library::Garde);
        assert_eq!(
            "json-schema".parse::<Library>().unwrap(),
            Library::JsonSchema
        );
        assert!("zod".parse::<Library>().is_err());
    }

    #[test]
    fn test_modes() {
        assert_eq!(Library::Serde.modes(), &[Mode::Default]);
        assert_eq!(
            Library::JsonSchema.modes(),
            &[Mode::Default, Mode::Compiled]
        );
    }

    #[test]
    fn test_benchmark_name() {
        assert_eq!(benchmark_name(Library::Garde, Mode::Default), "garde");
        assert_eq!(
            benchmark_name(Library::JsonSchema, Mode::Compiled),
            "jsonschema (compiled)"
        );
    }
}

//! Error types for schema loading and validation

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a schema fixture or validating against it
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The fixture file could not be read
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid JSON
    #[error("Failed to parse schema file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but is not a usable JSON Schema
    #[error("Invalid JSON schema '{name}': {message}")]
    InvalidSchema { name: String, message: String },

    /// The instance does not conform to the schema
    #[error("Instance does not match schema '{name}': {}", errors.join("; "))]
    Violations { name: String, errors: Vec<String> },
}

impl SchemaError {
    /// Violation messages, empty for every other variant
    pub fn violations(&self) -> &[String] {
        match self {
            SchemaError::Violations { errors, .. } => errors,
            _ => &[],
        }
    }
}

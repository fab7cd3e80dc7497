use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::{SchemaError, SchemaFixture};

const SCHEMA_DIR: &str = "SCHEMA_DIR";

/// Directory holding the fixtures bundled with this crate
pub fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas")
}

/// Resolve a fixture file name against `SCHEMA_DIR`, or the bundled directory when unset
pub fn json_schema_file(name: &str) -> PathBuf {
    SchemaStore::from_env().path_for(name)
}

/// Loads schema documents from a directory and validates instances against them
#[derive(Debug, Clone)]
pub struct SchemaStore {
    dir: PathBuf,
}

impl SchemaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store over the fixtures shipped in `schemas/`
    pub fn bundled() -> Self {
        Self::new(bundled_dir())
    }

    /// Uses `SCHEMA_DIR` when set, the bundled fixtures otherwise
    pub fn from_env() -> Self {
        match std::env::var(SCHEMA_DIR) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::bundled(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read and parse a schema document by file name
    pub fn load(&self, name: &str) -> Result<Value, SchemaError> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "loading json schema");

        let raw = std::fs::read_to_string(&path).map_err(|source| SchemaError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| SchemaError::Parse { path, source })
    }

    pub fn load_fixture(&self, fixture: SchemaFixture) -> Result<Value, SchemaError> {
        self.load(fixture.file_name())
    }

    /// Validate `instance` against the schema stored under `name`
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self.load(name)?;
        validate_named(name, instance, &schema)
    }

    pub fn validate_fixture(
        &self,
        fixture: SchemaFixture,
        instance: &Value,
    ) -> Result<(), SchemaError> {
        self.validate(fixture.file_name(), instance)
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Validate `instance` against an in-memory schema document
pub fn validate(instance: &Value, schema: &Value) -> Result<(), SchemaError> {
    let name = schema
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("<inline>")
        .to_string();
    validate_named(&name, instance, schema)
}

fn validate_named(name: &str, instance: &Value, schema: &Value) -> Result<(), SchemaError> {
    let validator =
        jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidSchema {
            name: name.to_string(),
            message: e.to_string(),
        })?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        debug!(schema = %name, "instance matches schema");
        Ok(())
    } else {
        debug!(schema = %name, violations = errors.len(), "instance does not match schema");
        Err(SchemaError::Violations {
            name: name.to_string(),
            errors,
        })
    }
}

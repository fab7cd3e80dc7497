//! # Schema fixtures
//!
//! JSON Schema documents describing the reqres user-management responses,
//! plus a small store that loads them from disk by file name and validates
//! response bodies against them.
//!
//! ```rust,ignore
//! use schema_fixtures::{SchemaFixture, SchemaStore};
//!
//! let store = SchemaStore::from_env();
//! store.validate_fixture(SchemaFixture::OneUser, &body)?;
//! ```

mod error;
mod fixture;
mod store;

pub use error::SchemaError;
pub use fixture::SchemaFixture;
pub use store::{bundled_dir, json_schema_file, validate, SchemaStore};

//! Core contracts and helpers for entigen.
//!
//! This crate defines the schema snapshot consumed by the generator, the
//! per-platform SQL type mapping, and small utilities shared by the
//! introspection adapters, the renderer and the CLI.

pub mod connection;
pub mod error;
pub mod filter;
pub mod naming;
pub mod platform;
pub mod schema;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use connection::ConnectionInfo;
pub use error::{Error, Result};
pub use filter::TableFilter;
pub use naming::{class_name, is_identifier_column, ucfirst};
pub use platform::Platform;
pub use schema::{Column, SchemaSnapshot, Table};
pub use snapshot::{load_snapshot, snapshot_json_schema, write_snapshot};
pub use types::{TargetType, map_column_type, normalize_declaration};
pub use validation::validate_snapshot;

/// Current contract version for snapshot JSON files.
pub const SNAPSHOT_VERSION: &str = "0.1";

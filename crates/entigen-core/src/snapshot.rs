use std::fs::{File, create_dir_all};
use std::io::BufWriter;
use std::path::Path;

use jsonschema::JSONSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::SchemaSnapshot;
use crate::validation::validate_snapshot;

/// JSON Schema describing the snapshot file format.
pub fn snapshot_json_schema() -> Result<Value> {
    let schema = schema_for!(SchemaSnapshot);
    serde_json::to_value(&schema).map_err(Error::from)
}

/// Read a snapshot file, checking it against the JSON Schema and the
/// snapshot invariants before returning it.
pub fn load_snapshot(path: &Path) -> Result<SchemaSnapshot> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;

    let schema = snapshot_json_schema()?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| Error::Other(err.to_string()))?;
    if let Err(errors) = compiled.validate(&document) {
        let messages: Vec<String> = errors
            .map(|error| format!("{}: {error}", error.instance_path))
            .collect();
        return Err(Error::InvalidSchema(format!(
            "{} does not match the snapshot format: {}",
            path.display(),
            messages.join("; ")
        )));
    }

    let snapshot: SchemaSnapshot = serde_json::from_value(document)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Write a snapshot as pretty JSON, creating parent directories as needed.
pub fn write_snapshot(path: &Path, snapshot: &SchemaSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, snapshot).map_err(Error::from)
}

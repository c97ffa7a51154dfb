use std::collections::BTreeSet;

use crate::SNAPSHOT_VERSION;
use crate::error::{Error, Result};
use crate::schema::SchemaSnapshot;

/// Validate internal consistency of a snapshot.
///
/// This checks:
/// - the snapshot version is supported
/// - table names are non-empty and unique
/// - column names are non-empty and unique per table
pub fn validate_snapshot(snapshot: &SchemaSnapshot) -> Result<()> {
    if snapshot.snapshot_version != SNAPSHOT_VERSION {
        return Err(Error::Unsupported(format!(
            "snapshot version {} (expected {SNAPSHOT_VERSION})",
            snapshot.snapshot_version
        )));
    }

    let mut tables = BTreeSet::new();
    for table in &snapshot.tables {
        if table.name.trim().is_empty() {
            return Err(Error::InvalidSchema("table with empty name".to_string()));
        }
        if !tables.insert(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if column.name.trim().is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "column with empty name in table {}",
                    table.name
                )));
            }
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::schema::{Column, Table};

    fn column(name: &str) -> Column {
        Column {
            ordinal_position: 1,
            name: name.to_string(),
            data_type: "int".to_string(),
            length: None,
            is_nullable: false,
            is_autoincrement: false,
            comment: None,
        }
    }

    fn snapshot(tables: Vec<Table>) -> SchemaSnapshot {
        let mut snapshot = SchemaSnapshot::new(Platform::MySql, None);
        snapshot.tables = tables;
        snapshot
    }

    #[test]
    fn accepts_consistent_snapshot() {
        let snapshot = snapshot(vec![Table {
            name: "users".to_string(),
            columns: vec![column("id"), column("email")],
        }]);
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn rejects_duplicate_columns() {
        let snapshot = snapshot(vec![Table {
            name: "users".to_string(),
            columns: vec![column("id"), column("id")],
        }]);
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(err.to_string().contains("users.id"));
    }

    #[test]
    fn rejects_duplicate_tables() {
        let table = Table {
            name: "users".to_string(),
            columns: Vec::new(),
        };
        let snapshot = snapshot(vec![table.clone(), table]);
        assert!(matches!(
            validate_snapshot(&snapshot),
            Err(Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut snapshot = snapshot(Vec::new());
        snapshot.snapshot_version = "9.9".to_string();
        assert!(matches!(
            validate_snapshot(&snapshot),
            Err(Error::Unsupported(_))
        ));
    }
}

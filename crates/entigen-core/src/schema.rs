use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::SNAPSHOT_VERSION;
use crate::filter::TableFilter;
use crate::platform::Platform;

/// Schema snapshot captured from a database, the input of entity generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaSnapshot {
    /// Contract version for this snapshot format.
    pub snapshot_version: String,
    /// Platform the snapshot was taken from.
    pub platform: Platform,
    /// Database name when available.
    pub database: Option<String>,
    /// Tables retained for generation.
    pub tables: Vec<Table>,
    /// Tables removed by an ignore filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_tables: Vec<String>,
}

impl SchemaSnapshot {
    pub fn new(platform: Platform, database: Option<String>) -> Self {
        Self {
            snapshot_version: SNAPSHOT_VERSION.to_string(),
            platform,
            database,
            tables: Vec::new(),
            skipped_tables: Vec::new(),
        }
    }

    /// Move every table matched by the filter into `skipped_tables`.
    ///
    /// Returns the names moved by this call, in snapshot order.
    pub fn apply_filter(&mut self, filter: &TableFilter) -> Vec<String> {
        let (skipped, kept): (Vec<Table>, Vec<Table>) = std::mem::take(&mut self.tables)
            .into_iter()
            .partition(|table| filter.is_ignored(&table.name));
        self.tables = kept;

        let names: Vec<String> = skipped.into_iter().map(|table| table.name).collect();
        self.skipped_tables.extend(names.iter().cloned());
        names
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// A table and its columns in ordinal order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

/// Column metadata needed to type and annotate an entity field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub ordinal_position: i32,
    pub name: String,
    /// Native SQL declaration as reported by the database (e.g. `character varying(255)`).
    pub data_type: String,
    /// Declared character length, when the type carries one.
    pub length: Option<u32>,
    pub is_nullable: bool,
    pub is_autoincrement: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> Table {
        Table {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    #[test]
    fn apply_filter_moves_ignored_tables() {
        let mut snapshot = SchemaSnapshot::new(Platform::MySql, Some("shop".to_string()));
        snapshot.tables = vec![table("orders"), table("migrations"), table("users")];

        let filter = TableFilter::new(["migrations", "Users"]);
        let skipped = snapshot.apply_filter(&filter);

        assert_eq!(skipped, vec!["migrations"]);
        assert_eq!(snapshot.skipped_tables, vec!["migrations"]);
        let kept: Vec<&str> = snapshot.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(kept, vec!["orders", "users"]);
        assert!(snapshot.table("users").is_some());
        assert!(snapshot.table("migrations").is_none());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Target-language type of a generated entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Int,
    Float,
    Bool,
    String,
    DateTime,
    /// Opaque fallback for declarations without a known mapping.
    Mixed,
}

impl TargetType {
    pub fn php_name(self) -> &'static str {
        match self {
            TargetType::Int => "int",
            TargetType::Float => "float",
            TargetType::Bool => "bool",
            TargetType::String => "string",
            TargetType::DateTime => "\\DateTimeInterface",
            TargetType::Mixed => "mixed",
        }
    }

    pub fn is_opaque(self) -> bool {
        matches!(self, TargetType::Mixed)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.php_name())
    }
}

/// Reduce a native SQL declaration to its base type name.
///
/// Lowercases, drops every parenthesised argument list and trailing
/// `unsigned`/`zerofill` modifiers, and collapses whitespace, so that
/// `NUMERIC(10, 2)` becomes `numeric` and `timestamp(0) without time zone`
/// becomes `timestamp without time zone`.
pub fn normalize_declaration(declaration: &str) -> String {
    let mut base = String::with_capacity(declaration.len());
    let mut depth = 0usize;
    for ch in declaration.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => base.push(ch),
            _ => {}
        }
    }

    let mut words: Vec<String> = base
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    while matches!(
        words.last().map(String::as_str),
        Some("unsigned" | "zerofill")
    ) {
        words.pop();
    }
    words.join(" ")
}

/// Map a native SQL declaration to a target type for the given platform.
///
/// Never fails: unknown declarations and unknown platforms map to
/// [`TargetType::Mixed`].
pub fn map_column_type(platform: &Platform, declaration: &str) -> TargetType {
    let base = normalize_declaration(declaration);
    match platform {
        Platform::MySql => map_mysql(&base),
        Platform::Postgres => map_postgres(&base),
        Platform::SqlServer => map_sql_server(&base),
        Platform::Other(_) => TargetType::Mixed,
    }
}

fn map_mysql(base: &str) -> TargetType {
    match base {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "year" => {
            TargetType::Int
        }
        "float" | "double" | "decimal" | "numeric" => TargetType::Float,
        "date" | "time" | "datetime" | "timestamp" => TargetType::DateTime,
        "char" | "varchar" | "text" | "tinytext" | "mediumtext" | "longtext" => TargetType::String,
        "binary" | "varbinary" | "blob" | "tinyblob" | "mediumblob" | "longblob" => {
            TargetType::String
        }
        "json" => TargetType::String,
        "geometry" | "point" | "linestring" | "polygon" => TargetType::Mixed,
        _ => TargetType::Mixed,
    }
}

fn map_postgres(base: &str) -> TargetType {
    match base {
        "smallserial" | "serial" | "bigserial" | "int2" | "int4" | "int8" => TargetType::Int,
        "real" | "double precision" | "float4" | "float8" | "money" => TargetType::Float,
        "boolean" | "bool" => TargetType::Bool,
        "character varying" | "character" | "bpchar" | "citext" | "uuid" | "bytea" | "jsonb"
        | "xml" | "inet" | "cidr" | "macaddr" => TargetType::String,
        "timestamp without time zone"
        | "timestamp with time zone"
        | "timestamptz"
        | "time without time zone"
        | "time with time zone"
        | "timetz" => TargetType::DateTime,
        other => map_mysql(other),
    }
}

fn map_sql_server(base: &str) -> TargetType {
    match base {
        "varchar" | "nvarchar" | "text" | "uniqueidentifier" => TargetType::String,
        "int" | "integer" | "bigint" | "smallint" => TargetType::Int,
        "tinyint" | "bit" => TargetType::Bool,
        "datetime" | "datetime2" | "date" => TargetType::DateTime,
        "float" | "decimal" => TargetType::Float,
        _ => TargetType::Mixed,
    }
}

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Database platform a snapshot was taken from.
///
/// The platform selects which SQL type table is used when mapping columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Postgres,
    MySql,
    SqlServer,
    Other(String),
}

impl Platform {
    /// Resolve a platform from a connection URL scheme.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Platform::Postgres,
            "mysql" | "mariadb" => Platform::MySql,
            "mssql" | "sqlserver" => Platform::SqlServer,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Postgres => "postgres",
            Platform::MySql => "mysql",
            Platform::SqlServer => "sqlserver",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

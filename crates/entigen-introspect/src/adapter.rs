use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::postgres::PgPoolOptions;

use entigen_core::{Column, ConnectionInfo, Error, Platform, Result, SchemaSnapshot, Table};

use crate::mysql::MySqlAdapter;
use crate::options::IntrospectOptions;
use crate::postgres::PostgresAdapter;

/// Trait implemented by database adapters that can enumerate tables and columns.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Platform whose type table applies to this adapter's declarations.
    fn platform(&self) -> Platform;

    /// Name of the database the connection points at, when it has one.
    async fn database_name(&self) -> Result<Option<String>>;

    /// Names of the base tables in `schema` (or the adapter's default namespace).
    async fn list_table_names(&self, schema: Option<&str>) -> Result<Vec<String>>;

    /// Columns of `table` in ordinal order.
    async fn list_columns(&self, schema: Option<&str>, table: &str) -> Result<Vec<Column>>;
}

/// Open a pool for the connection URL and wrap it in the matching adapter.
pub async fn connect(info: &ConnectionInfo, url: &str) -> Result<Box<dyn Adapter>> {
    match &info.platform {
        Some(Platform::Postgres) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(10))
                .connect(url)
                .await
                .map_err(|err| Error::Db(err.to_string()))?;
            Ok(Box::new(PostgresAdapter::new(pool)))
        }
        Some(Platform::MySql) => {
            let pool = MySqlPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(10))
                .connect(url)
                .await
                .map_err(|err| Error::Db(err.to_string()))?;
            Ok(Box::new(MySqlAdapter::new(pool)))
        }
        Some(other) => Err(Error::Unsupported(format!(
            "live introspection of {other} databases; use a snapshot file instead"
        ))),
        None => Err(Error::Unsupported(format!(
            "connection string without scheme: {}",
            info.redacted
        ))),
    }
}

/// Build a snapshot by listing tables, dropping ignored ones, and reading the
/// columns of every retained table.
///
/// Columns of ignored tables are never queried.
pub async fn introspect(adapter: &dyn Adapter, opts: &IntrospectOptions) -> Result<SchemaSnapshot> {
    let schema = opts.schema.as_deref();
    let database = adapter.database_name().await?;
    let mut snapshot = SchemaSnapshot::new(adapter.platform(), database);

    let mut names = adapter.list_table_names(schema).await?;
    names.sort();
    tracing::info!(event = "tables_listed", count = names.len());

    for name in names {
        if opts.filter.is_ignored(&name) {
            tracing::info!(event = "table_skipped", table = %name);
            snapshot.skipped_tables.push(name);
            continue;
        }

        let mut columns = adapter.list_columns(schema, &name).await?;
        columns.sort_by_key(|column| column.ordinal_position);
        tracing::debug!(event = "columns_listed", table = %name, count = columns.len());
        snapshot.tables.push(Table { name, columns });
    }

    Ok(snapshot)
}

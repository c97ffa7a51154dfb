use async_trait::async_trait;
use sqlx::MySqlPool;

use entigen_core::{Column, Platform, Result};

use crate::adapter::Adapter;

mod mapper;
mod queries;

/// Adapter for MySQL and MariaDB databases.
///
/// Without an explicit schema the connection's current database is used.
#[derive(Debug, Clone)]
pub struct MySqlAdapter {
    pool: MySqlPool,
}

impl MySqlAdapter {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Adapter for MySqlAdapter {
    fn platform(&self) -> Platform {
        Platform::MySql
    }

    async fn database_name(&self) -> Result<Option<String>> {
        queries::fetch_database_name(&self.pool).await
    }

    async fn list_table_names(&self, schema: Option<&str>) -> Result<Vec<String>> {
        queries::list_table_names(&self.pool, schema).await
    }

    async fn list_columns(&self, schema: Option<&str>, table: &str) -> Result<Vec<Column>> {
        let raw = queries::list_columns(&self.pool, schema, table).await?;
        Ok(mapper::map_columns(raw))
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use entigen_core::{Column, Platform, Result};

use crate::adapter::Adapter;

mod mapper;
mod queries;

const DEFAULT_SCHEMA: &str = "public";

/// Adapter for PostgreSQL databases.
#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pool: PgPool,
}

impl PostgresAdapter {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Adapter for PostgresAdapter {
    fn platform(&self) -> Platform {
        Platform::Postgres
    }

    async fn database_name(&self) -> Result<Option<String>> {
        queries::fetch_database_name(&self.pool).await.map(Some)
    }

    async fn list_table_names(&self, schema: Option<&str>) -> Result<Vec<String>> {
        queries::list_table_names(&self.pool, schema.unwrap_or(DEFAULT_SCHEMA)).await
    }

    async fn list_columns(&self, schema: Option<&str>, table: &str) -> Result<Vec<Column>> {
        let raw = queries::list_columns(&self.pool, schema.unwrap_or(DEFAULT_SCHEMA), table).await?;
        Ok(mapper::map_columns(raw))
    }
}

use sqlx::MySqlPool;

use entigen_core::{Error, Result};

// information_schema columns are cast to CHAR/SIGNED so they decode the same
// way on MySQL 5.7, 8.x and MariaDB.

pub async fn fetch_database_name(pool: &MySqlPool) -> Result<Option<String>> {
    sqlx::query_scalar::<_, Option<String>>("select cast(database() as char)")
        .fetch_one(pool)
        .await
        .map_err(|err| Error::Db(err.to_string()))
}

pub async fn list_table_names(pool: &MySqlPool, schema: Option<&str>) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select cast(table_name as char)
        from information_schema.tables
        where table_schema = coalesce(?, database())
          and table_type = 'BASE TABLE'
        order by table_name
        "#,
    )
    .bind(schema)
    .fetch_all(pool)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawColumn {
    pub ordinal_position: i64,
    pub name: String,
    pub column_type: String,
    pub character_max_length: Option<i64>,
    pub is_nullable: i64,
    pub extra: Option<String>,
    pub comment: Option<String>,
}

pub async fn list_columns(
    pool: &MySqlPool,
    schema: Option<&str>,
    table: &str,
) -> Result<Vec<RawColumn>> {
    sqlx::query_as::<_, RawColumn>(
        r#"
        select
          cast(ordinal_position as signed) as ordinal_position,
          cast(column_name as char) as name,
          cast(column_type as char) as column_type,
          cast(character_maximum_length as signed) as character_max_length,
          cast(is_nullable = 'YES' as signed) as is_nullable,
          cast(extra as char) as extra,
          cast(column_comment as char) as comment
        from information_schema.columns
        where table_schema = coalesce(?, database())
          and table_name = ?
        order by ordinal_position
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}

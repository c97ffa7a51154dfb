use entigen_core::TableFilter;

/// Options that control how introspection behaves.
#[derive(Debug, Clone, Default)]
pub struct IntrospectOptions {
    /// Namespace to read tables from. Defaults to `public` on PostgreSQL and
    /// to the connection's current database on MySQL.
    pub schema: Option<String>,
    /// Tables skipped before their columns are read.
    pub filter: TableFilter,
}

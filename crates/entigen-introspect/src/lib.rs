//! Database introspection adapters.

pub mod adapter;
pub mod mysql;
pub mod options;
pub mod postgres;

pub use adapter::{Adapter, connect, introspect};
pub use mysql::MySqlAdapter;
pub use options::IntrospectOptions;
pub use postgres::PostgresAdapter;

pub use entigen_core::SchemaSnapshot;

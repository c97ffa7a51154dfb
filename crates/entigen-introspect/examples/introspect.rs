use anyhow::{Context, Result};

use entigen_core::ConnectionInfo;
use entigen_introspect::{IntrospectOptions, connect, introspect};

#[tokio::main]
async fn main() -> Result<()> {
    let db_url = std::env::var("DATABASE_URL").context("set DATABASE_URL")?;
    let info = ConnectionInfo::parse(&db_url);

    let adapter = connect(&info, &db_url)
        .await
        .with_context(|| format!("failed to connect to {}", info.redacted))?;
    let snapshot = introspect(adapter.as_ref(), &IntrospectOptions::default()).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

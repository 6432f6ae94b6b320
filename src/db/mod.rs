pub mod backend;
pub mod instrumented;
pub mod postgres;
pub mod schema;

use anyhow::Result;
use std::sync::Arc;

pub use backend::DatabaseBackend;
pub use instrumented::InstrumentedDatabase;
pub use postgres::PostgresBackend;

/// Shared handle to the storage backend
pub type Database = Arc<dyn DatabaseBackend>;

/// Connect to PostgreSQL, ensure the schema exists, and wrap the backend
/// with metrics instrumentation.
pub async fn init_database(config: &crate::config::DatabaseConfig) -> Result<Database> {
    tracing::info!("Initializing PostgreSQL backend");
    let pool = postgres::connection::create_pool(config).await?;
    postgres::connection::test_connection(&pool).await?;
    schema::ensure_schema(&pool).await?;

    let backend = PostgresBackend::new(pool);
    Ok(Arc::new(InstrumentedDatabase::new(Arc::new(backend))) as Database)
}

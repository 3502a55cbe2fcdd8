use crate::db::{create_db_pool, DatabaseConfig};
use sqlx::PgPool;
use std::env;

/// Shared application state. The Postgres pool is the only process-wide
/// resource; it is opened here and closed when the server future resolves.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|e| anyhow::anyhow!("DATABASE_URL must be set: {}", e))?;
        let db_config = DatabaseConfig::from_env();
        let db_pool = create_db_pool(&database_url, db_config).await?;

        Ok(AppState { db_pool })
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::StoreHealth;

/// Pings PostgreSQL with a trivial query
pub struct PostgresStoreHealth {
    pool: PgPool,
}

impl PostgresStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PostgresStoreHealth {
    async fn ping(&self) -> CatalogResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| CatalogError::store("Database ping failed", e))
    }
}

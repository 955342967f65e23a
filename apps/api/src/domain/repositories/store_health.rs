use async_trait::async_trait;

use crate::domain::errors::CatalogResult;

/// Reachability check for the backing store
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Succeeds when the store can serve queries right now
    async fn ping(&self) -> CatalogResult<()>;
}

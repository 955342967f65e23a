use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::CatalogResult;
use crate::domain::shirt::{Shirt, ShirtDetails};

/// Repository trait for the Shirt aggregate
///
/// Inserts and updates must fail with `CatalogError::NotFound` when the
/// referenced team is gone at write time, so the reference rule holds even
/// if the team was deleted after the service checked it.
#[async_trait]
pub trait ShirtRepository: Send + Sync {
    /// Insert a new shirt, returning it with its store-assigned ID
    async fn insert(&self, details: &ShirtDetails) -> CatalogResult<Shirt>;

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Shirt>>;

    /// List every shirt, oldest first
    async fn list(&self) -> CatalogResult<Vec<Shirt>>;

    /// Replace every field of a shirt; `None` when no shirt matched `id`
    async fn update(&self, id: Uuid, details: &ShirtDetails) -> CatalogResult<Option<Shirt>>;

    /// Delete a shirt by ID; `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Count shirts referencing a team
    async fn count_by_team(&self, team_id: Uuid) -> CatalogResult<u64>;
}

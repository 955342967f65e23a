use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::CatalogResult;
use crate::domain::team::{Team, TeamDetails};

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations assign identifiers and translate store failures into
/// `CatalogError::Store`.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team, returning it with its store-assigned ID
    async fn insert(&self, details: &TeamDetails) -> CatalogResult<Team>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Team>>;

    /// Check whether a team with this ID exists
    async fn exists(&self, id: Uuid) -> CatalogResult<bool>;

    /// List every team, oldest first
    async fn list(&self) -> CatalogResult<Vec<Team>>;

    /// Replace the mutable fields of a team
    ///
    /// Returns `None` when no team matched `id`. Matching a team whose
    /// fields are already equal to `details` counts as a match.
    async fn update(&self, id: Uuid, details: &TeamDetails) -> CatalogResult<Option<Team>>;

    /// Delete a team by ID
    ///
    /// Returns `false` when nothing was deleted. Fails with
    /// `CatalogError::Conflict` if shirts still reference the team.
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;
}

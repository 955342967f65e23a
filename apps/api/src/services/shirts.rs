use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{parse_id, CatalogError, CatalogResult};
use crate::domain::repositories::{ShirtRepository, TeamRepository};
use crate::domain::shirt::{Shirt, ShirtDetails, ShirtInput};

const SHIRT_NOT_FOUND: &str = "Shirt not found";

/// Shirt operations, including the rule that every shirt references a live
/// team
#[derive(Clone)]
pub struct ShirtService {
    shirts: Arc<dyn ShirtRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl ShirtService {
    pub fn new(shirts: Arc<dyn ShirtRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { shirts, teams }
    }

    /// Field checks first, then the team lookup, then the insert. Nothing
    /// is written unless every check passes.
    pub async fn create(&self, input: ShirtInput) -> CatalogResult<Shirt> {
        let details = self.validate(input).await?;
        let shirt = self.shirts.insert(&details).await?;

        tracing::info!(shirt_id = %shirt.id(), team_id = %shirt.team_id(), "shirt created");
        Ok(shirt)
    }

    pub async fn get(&self, id: &str) -> CatalogResult<Shirt> {
        let id = parse_id(id)?;
        self.shirts
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(SHIRT_NOT_FOUND.to_string()))
    }

    pub async fn list(&self) -> CatalogResult<Vec<Shirt>> {
        self.shirts.list().await
    }

    /// Re-validates every field, re-resolving the team even when `team_id`
    /// is unchanged.
    pub async fn update(&self, id: &str, input: ShirtInput) -> CatalogResult<Shirt> {
        let id = parse_id(id)?;
        let details = self.validate(input).await?;

        let shirt = self
            .shirts
            .update(id, &details)
            .await?
            .ok_or_else(|| CatalogError::NotFound(SHIRT_NOT_FOUND.to_string()))?;

        tracing::info!(shirt_id = %shirt.id(), "shirt updated");
        Ok(shirt)
    }

    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        let id = parse_id(id)?;

        if !self.shirts.delete(id).await? {
            return Err(CatalogError::NotFound(SHIRT_NOT_FOUND.to_string()));
        }

        tracing::info!(shirt_id = %id, "shirt deleted");
        Ok(())
    }

    /// Number of shirts referencing a team
    pub async fn count_by_team(&self, team_id: Uuid) -> CatalogResult<u64> {
        self.shirts.count_by_team(team_id).await
    }

    async fn validate(&self, input: ShirtInput) -> CatalogResult<ShirtDetails> {
        let details = ShirtDetails::new(input)?;

        if !self.teams.exists(details.team_id()).await? {
            return Err(CatalogError::NotFound("Team does not exist".to_string()));
        }

        Ok(details)
    }
}

use std::sync::Arc;

use crate::domain::errors::{parse_id, CatalogError, CatalogResult};
use crate::domain::repositories::{ShirtRepository, TeamRepository};
use crate::domain::team::{Team, TeamDetails};

const TEAM_NOT_FOUND: &str = "Futbol team not found";

/// Team operations, including the rule that a team cannot be deleted while
/// shirts reference it
#[derive(Clone)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    shirts: Arc<dyn ShirtRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>, shirts: Arc<dyn ShirtRepository>) -> Self {
        Self { teams, shirts }
    }

    pub async fn create(&self, name: String, country: String) -> CatalogResult<Team> {
        let details = TeamDetails::new(name, country)?;
        let team = self.teams.insert(&details).await?;

        tracing::info!(team_id = %team.id(), name = team.name(), "team created");
        Ok(team)
    }

    pub async fn get(&self, id: &str) -> CatalogResult<Team> {
        let id = parse_id(id)?;
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(TEAM_NOT_FOUND.to_string()))
    }

    pub async fn list(&self) -> CatalogResult<Vec<Team>> {
        self.teams.list().await
    }

    /// Replaces name and country; an update that changes nothing still
    /// succeeds as long as the team exists.
    pub async fn update(&self, id: &str, name: String, country: String) -> CatalogResult<Team> {
        let id = parse_id(id)?;
        let details = TeamDetails::new(name, country)?;

        let team = self
            .teams
            .update(id, &details)
            .await?
            .ok_or_else(|| CatalogError::NotFound(TEAM_NOT_FOUND.to_string()))?;

        tracing::info!(team_id = %team.id(), "team updated");
        Ok(team)
    }

    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        let id = parse_id(id)?;

        let associated = self.shirts.count_by_team(id).await?;
        if associated > 0 {
            tracing::debug!(team_id = %id, associated, "team delete blocked by shirts");
            return Err(CatalogError::Conflict(
                "Cannot delete team with associated shirts".to_string(),
            ));
        }

        if !self.teams.delete(id).await? {
            return Err(CatalogError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        tracing::info!(team_id = %id, "team deleted");
        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{has_sqlstate, rejected_value, sqlstate, FOREIGN_KEY_VIOLATION};
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamDetails};

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    country: String,
}

/// Maps an insert/update failure; blank names rejected by a CHECK are invalid input
fn write_error(context: &str, e: sqlx::Error) -> CatalogError {
    rejected_value(sqlstate(&e).as_deref()).unwrap_or_else(|| CatalogError::store(context, e))
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.country)
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// Teams live in the `futbol_teams` table; the database generates IDs.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, details: &TeamDetails) -> CatalogResult<Team> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO futbol_teams (name, country)
            VALUES ($1, $2)
            RETURNING id, name, country
            "#,
        )
        .bind(details.name())
        .bind(details.country())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to insert team", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, country
            FROM futbol_teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::store("Failed to find team by id", e))?;

        Ok(row.map(Team::from))
    }

    async fn exists(&self, id: Uuid) -> CatalogResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM futbol_teams WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogError::store("Failed to check team existence", e))
    }

    async fn list(&self) -> CatalogResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, country
            FROM futbol_teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::store("Failed to list teams", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn update(&self, id: Uuid, details: &TeamDetails) -> CatalogResult<Option<Team>> {
        // PostgreSQL reports matched rows, so an unchanged team still returns it.
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE futbol_teams
            SET name = $2, country = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, country
            "#,
        )
        .bind(id)
        .bind(details.name())
        .bind(details.country())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update team", e))?;

        Ok(row.map(Team::from))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM futbol_teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if has_sqlstate(&e, FOREIGN_KEY_VIOLATION) {
                    CatalogError::Conflict("Cannot delete team with associated shirts".to_string())
                } else {
                    CatalogError::store("Failed to delete team", e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}

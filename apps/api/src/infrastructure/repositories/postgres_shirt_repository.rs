use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::{rejected_value, sqlstate, FOREIGN_KEY_VIOLATION};
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::ShirtRepository;
use crate::domain::shirt::{Shirt, ShirtDetails, ShirtSize};

#[derive(sqlx::FromRow)]
struct ShirtRow {
    id: Uuid,
    team_id: Uuid,
    name: String,
    description: String,
    image: String,
    price: Decimal,
    discount: Decimal,
    size: ShirtSize,
}

impl From<ShirtRow> for Shirt {
    fn from(r: ShirtRow) -> Self {
        Shirt::from_persistence(
            r.id,
            r.team_id,
            r.name,
            r.description,
            r.image,
            r.price,
            r.discount,
            r.size,
        )
    }
}

/// Maps a write failure into the catalog taxonomy
///
/// A dangling `team_id` is a missing team; constraint and range failures are
/// invalid input. Anything else is a store error.
fn write_error(context: &str, e: sqlx::Error) -> CatalogError {
    let code = sqlstate(&e);
    if code.as_deref() == Some(FOREIGN_KEY_VIOLATION) {
        return CatalogError::NotFound("Team does not exist".to_string());
    }
    rejected_value(code.as_deref()).unwrap_or_else(|| CatalogError::store(context, e))
}

/// PostgreSQL implementation of ShirtRepository
///
/// `shirts.team_id` is a foreign key with `ON DELETE RESTRICT`, so the
/// database rejects both dangling shirts and deleting a referenced team.
pub struct PostgresShirtRepository {
    pool: PgPool,
}

impl PostgresShirtRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShirtRepository for PostgresShirtRepository {
    async fn insert(&self, details: &ShirtDetails) -> CatalogResult<Shirt> {
        let row = sqlx::query_as::<_, ShirtRow>(
            r#"
            INSERT INTO shirts (team_id, name, description, image, price, discount, size)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, team_id, name, description, image, price, discount, size
            "#,
        )
        .bind(details.team_id())
        .bind(details.name())
        .bind(details.description())
        .bind(details.image())
        .bind(details.price())
        .bind(details.discount())
        .bind(details.size())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to insert shirt", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Shirt>> {
        let row = sqlx::query_as::<_, ShirtRow>(
            r#"
            SELECT id, team_id, name, description, image, price, discount, size
            FROM shirts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::store("Failed to find shirt by id", e))?;

        Ok(row.map(Shirt::from))
    }

    async fn list(&self) -> CatalogResult<Vec<Shirt>> {
        let rows = sqlx::query_as::<_, ShirtRow>(
            r#"
            SELECT id, team_id, name, description, image, price, discount, size
            FROM shirts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::store("Failed to list shirts", e))?;

        Ok(rows.into_iter().map(Shirt::from).collect())
    }

    async fn update(&self, id: Uuid, details: &ShirtDetails) -> CatalogResult<Option<Shirt>> {
        let row = sqlx::query_as::<_, ShirtRow>(
            r#"
            UPDATE shirts
            SET team_id = $2, name = $3, description = $4, image = $5,
                price = $6, discount = $7, size = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING id, team_id, name, description, image, price, discount, size
            "#,
        )
        .bind(id)
        .bind(details.team_id())
        .bind(details.name())
        .bind(details.description())
        .bind(details.image())
        .bind(details.price())
        .bind(details.discount())
        .bind(details.size())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update shirt", e))?;

        Ok(row.map(Shirt::from))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM shirts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::store("Failed to delete shirt", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_team(&self, team_id: Uuid) -> CatalogResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shirts WHERE team_id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogError::store("Failed to count shirts by team", e))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

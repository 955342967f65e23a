use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{has_sqlstate, UNIQUE_VIOLATION};
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::{NewUser, User, UserRepository};
use crate::domain::user::Email;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    is_admin: bool,
    is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = CatalogError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        let email = Email::new(&r.email)
            .map_err(|e| CatalogError::store("Invalid email from database", e))?;

        Ok(User {
            id: r.id,
            email,
            password_hash: r.password_hash,
            full_name: r.full_name,
            is_admin: r.is_admin,
            is_active: r.is_active,
        })
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> CatalogResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, full_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, full_name, is_admin, is_active
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if has_sqlstate(&e, UNIQUE_VIOLATION) {
                CatalogError::Conflict("Email already registered".to_string())
            } else {
                CatalogError::store("Failed to create user", e)
            }
        })?;

        row.try_into()
    }

    async fn find_by_email(&self, email: &Email) -> CatalogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, full_name, is_admin, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::store("Failed to find user by email", e))?;

        row.map(User::try_from).transpose()
    }
}

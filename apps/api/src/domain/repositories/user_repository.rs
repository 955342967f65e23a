use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::CatalogResult;
use crate::domain::user::Email;

/// User data for persistence
///
/// Admin rights are granted directly in the store, never through the API.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub full_name: String,
    pub is_admin: bool,
    pub is_active: bool,
}

/// Fields needed to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
    pub full_name: String,
}

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new, active, non-admin user
    ///
    /// Fails with `CatalogError::Conflict` if the email is already taken.
    async fn create(&self, user: NewUser) -> CatalogResult<User>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> CatalogResult<Option<User>>;
}

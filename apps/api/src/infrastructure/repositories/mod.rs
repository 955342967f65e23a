// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_shirt_repository;
pub mod postgres_store_health;
pub mod postgres_team_repository;
pub mod postgres_user_repository;

pub use in_memory::InMemoryStore;
pub use postgres_shirt_repository::PostgresShirtRepository;
pub use postgres_store_health::PostgresStoreHealth;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::errors::CatalogError;

/// SQLSTATE raised when a foreign key constraint is violated
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE raised when a unique constraint is violated
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE raised when a CHECK constraint is violated
pub(crate) const CHECK_VIOLATION: &str = "23514";

/// SQLSTATE raised when a value does not fit its column type
pub(crate) const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// SQLSTATE carried by `err`, if it came from the database
pub(crate) fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// Returns true if `err` is a database error carrying `code`
pub(crate) fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    sqlstate(err).as_deref() == Some(code)
}

/// Reclassifies a rejected value as invalid input
///
/// Returns `None` for codes that do not describe bad input.
pub(crate) fn rejected_value(code: Option<&str>) -> Option<CatalogError> {
    match code {
        Some(CHECK_VIOLATION) => Some(CatalogError::InvalidInput(
            "Value violates a catalog constraint".to_string(),
        )),
        Some(NUMERIC_VALUE_OUT_OF_RANGE) => Some(CatalogError::InvalidInput(
            "Numeric value out of range".to_string(),
        )),
        _ => None,
    }
}

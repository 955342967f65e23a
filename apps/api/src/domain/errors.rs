use thiserror::Error;

/// Errors raised by the team and shirt catalog
///
/// Each variant maps to exactly one HTTP status in the API layer. Store
/// failures carry a human-readable detail for logs; it is never returned
/// to callers verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Wraps an unexpected store failure with the operation that caused it
    pub fn store(context: &str, err: impl std::fmt::Display) -> Self {
        CatalogError::Store(format!("{}: {}", context, err))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Parses an opaque record identifier
///
/// # Example
/// ```
/// use ventacamisetas_api::domain::errors::{parse_id, CatalogError};
///
/// assert!(parse_id("not-a-uuid").is_err());
/// assert!(matches!(parse_id("x"), Err(CatalogError::InvalidIdentifier(_))));
/// ```
pub fn parse_id(raw: &str) -> CatalogResult<uuid::Uuid> {
    uuid::Uuid::parse_str(raw).map_err(|_| CatalogError::InvalidIdentifier(raw.to_string()))
}

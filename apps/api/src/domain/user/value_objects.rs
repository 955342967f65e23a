use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::CatalogError;

/// Email value object identifying a user and a principal
///
/// # Invariants
/// - Exactly one '@' with a non-empty local part and domain
/// - Stored trimmed and lower-cased, so lookups are case-insensitive
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use ventacamisetas_api::domain::user::Email;
    ///
    /// let email = Email::new(" Admin@Example.com ").expect("valid email");
    /// assert_eq!(email.as_str(), "admin@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, CatalogError> {
        let email = email.as_ref().trim().to_lowercase();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(CatalogError::InvalidInput(format!("Invalid email: {}", email)))
        }
    }

    fn is_valid(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

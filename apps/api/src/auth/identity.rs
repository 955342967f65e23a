use async_trait::async_trait;
use thiserror::Error;

use super::jwt::verify_token;
use crate::domain::user::Email;

/// Credential and role failures raised by the authorization gate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingCredentials,

    #[error("Invalid authorization format. Use: Bearer <token>")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Admin privileges required")]
    Forbidden,
}

/// The identity resolved from a verified bearer credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: Email,
    pub admin: bool,
}

/// Resolves a bearer credential into a principal
///
/// The verifier is consulted once per gated request and must not keep
/// per-request state.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Verifies HS256 identity tokens signed with a shared secret
pub struct JwtIdentityVerifier {
    secret: String,
}

impl JwtIdentityVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let claims =
            verify_token(token, &self.secret).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let email = Email::new(&claims.email)
            .map_err(|_| AuthError::InvalidToken("token has no valid email".to_string()))?;

        Ok(Principal {
            email,
            admin: claims.admin,
        })
    }
}

/// Extracts the token from an `Authorization` header value
///
/// # Example
/// ```
/// use ventacamisetas_api::auth::identity::bearer_token;
///
/// assert_eq!(bearer_token("Bearer abc.def").unwrap(), "abc.def");
/// assert!(bearer_token("Basic abc").is_err());
/// ```
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MalformedHeader)
}

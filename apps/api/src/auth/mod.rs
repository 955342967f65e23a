// Authentication module
// Token issuing/verification, password hashing and the identity port

pub mod identity;
pub mod jwt;
pub mod password;

pub use identity::{AuthError, IdentityVerifier, JwtIdentityVerifier, Principal};

// JWT token creation and verification
// Identity tokens carry the user's email and admin flag

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default lifetime of issued tokens
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `email` - The user's email address
/// * `admin` - Whether the user may perform catalog writes
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    pub exp: usize,
}

/// Creates a signed identity token
///
/// # Arguments
/// * `user_id` - The user's ID to include in the token
/// * `email` - The user's email address
/// * `admin` - The user's admin flag
/// * `secret` - The secret key for signing
/// * `ttl` - How long the token stays valid
///
/// # Token Properties
/// - Signed with HS256 algorithm
///
/// # Example
/// ```
/// use chrono::Duration;
/// use ventacamisetas_api::auth::jwt::create_token;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "fan@example.com", false, "your-secret-key", Duration::hours(8))
///     .expect("valid token");
/// assert!(!token.is_empty());
/// ```
pub fn create_token(
    user_id: Uuid,
    email: &str,
    admin: bool,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiry = Utc::now() + ttl;
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        admin,
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verifies and decodes a JWT token
///
/// Fails if the signature does not match `secret` or the token expired.
///
/// # Example
/// ```
/// use chrono::Duration;
/// use ventacamisetas_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "admin@example.com", true, "secret", Duration::hours(1)).unwrap();
///
/// let claims = verify_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// assert!(claims.admin);
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

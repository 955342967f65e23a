use axum::{extract::State, Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, is_acceptable, verify_password, MIN_PASSWORD_LENGTH};
use crate::auth::Principal;
use crate::domain::errors::CatalogError;
use crate::domain::repositories::NewUser;
use crate::domain::user::Email;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub email: String,
    pub message: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
}

/// Register a new (non-admin) user
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let email = Email::new(&req.email)?;

    if !is_acceptable(&req.password) {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = state
        .users
        .create(NewUser {
            email,
            password_hash,
            full_name: req.full_name,
        })
        .await
        .map_err(|e| match e {
            CatalogError::Conflict(message) => ApiError::bad_request(message),
            other => other.into(),
        })?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(RegisterResponse {
        user_id: user.id,
        email: user.email.to_string(),
        message: "User registered successfully".to_string(),
    }))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::new(&req.email).map_err(|_| ApiError::unauthorized("Invalid credentials"))?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !user.is_active {
        return Err(ApiError::unauthorized("Account is disabled"));
    }

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = create_token(
        user.id,
        user.email.as_str(),
        user.is_admin,
        &state.jwt_secret,
        state.token_ttl,
    )
    .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
    }))
}

/// Echo endpoint for administrators
///
/// GET /exampleadmin
pub async fn example_admin(Extension(principal): Extension<Principal>) -> Json<Value> {
    Json(json!({
        "message": "This is an example admin endpoint.",
        "admin": principal.email.as_str()
    }))
}

/// Echo endpoint for any authenticated user
///
/// GET /exampleuser
pub async fn example_user(Extension(principal): Extension<Principal>) -> Json<Value> {
    Json(json!({
        "message": "This is an example user endpoint.",
        "email": principal.email.as_str()
    }))
}

/// Service version
///
/// GET /
pub async fn version() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}

/// Name reported by the health and readiness endpoints
pub const SERVICE_NAME: &str = "ventacamisetas-api";

/// Liveness check; answers without touching the store
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check; pings the store
///
/// GET /ready. Always answers 200 and reports the outcome in the body.
pub async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    let connected = match state.store_health.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "store not ready");
            false
        }
    };

    Json(json!({
        "status": if connected { "ready" } else { "not_ready" },
        "database": if connected { "connected" } else { "disconnected" },
        "service": SERVICE_NAME,
    }))
}

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::identity::bearer_token;
use crate::auth::{AuthError, Principal};

/// Resolves the request's bearer credential into a principal
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Principal, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = bearer_token(header)?;
    state.identity.verify(token).await
}

/// Gate for catalog writes
///
/// Rejects with 401 when the credential is missing or invalid and with 403
/// when the principal is not an admin. On success the `Principal` is
/// available to the handler as `Extension<Principal>`.
///
/// Usage:
/// ```rust,ignore
/// let admin = middleware::from_fn_with_state(state.clone(), require_admin);
/// Router::new().route("/futbol_teams", post(create_team.layer(admin)));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = authenticate(&state, request.headers()).await.map_err(|e| {
        tracing::debug!(error = %e, "admin gate rejected credential");
        e
    })?;

    if !principal.admin {
        tracing::warn!(email = %principal.email, "non-admin attempted a protected operation");
        return Err(AuthError::Forbidden.into());
    }

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Gate for routes any authenticated user may call
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = authenticate(&state, request.headers()).await.map_err(|e| {
        tracing::debug!(error = %e, "user gate rejected credential");
        e
    })?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

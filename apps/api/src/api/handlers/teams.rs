use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::Principal;
use crate::domain::team::Team;

/// Request body for creating or replacing a team
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            country: team.country().to_string(),
        }
    }
}

/// Confirmation returned by delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteMessage {
    pub message: String,
}

impl DeleteMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create a new team
///
/// POST /futbol_teams
pub async fn create_team(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.team_service().create(req.name, req.country).await?;

    tracing::info!(admin = %principal.email, team_id = %team.id(), "POST /futbol_teams");
    Ok(Json(TeamResponse::from(&team)))
}

/// List every team
///
/// GET /futbol_teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.team_service().list().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /futbol_teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.team_service().get(&id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Replace a team's name and country
///
/// PUT /futbol_teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service()
        .update(&id, req.name, req.country)
        .await?;

    tracing::info!(admin = %principal.email, team_id = %team.id(), "PUT /futbol_teams");
    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team that no shirt references
///
/// DELETE /futbol_teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<DeleteMessage>, ApiError> {
    state.team_service().delete(&id).await?;

    tracing::info!(admin = %principal.email, team_id = %id, "DELETE /futbol_teams");
    Ok(Json(DeleteMessage::new("Team deleted successfully")))
}

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::teams::DeleteMessage;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::Principal;
use crate::domain::shirt::{Shirt, ShirtInput, ShirtSize};

/// Request body for creating or replacing a shirt
///
/// `size` stays a string here so an unknown size is reported as a 400 by
/// the domain rather than rejected by the JSON decoder.
#[derive(Debug, Deserialize)]
pub struct ShirtRequest {
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount: Option<Decimal>,
    pub size: String,
}

impl From<ShirtRequest> for ShirtInput {
    fn from(req: ShirtRequest) -> Self {
        Self {
            team_id: req.team_id,
            name: req.name,
            description: req.description,
            image: req.image,
            price: req.price,
            discount: req.discount,
            size: req.size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShirtResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    pub size: ShirtSize,
}

impl From<&Shirt> for ShirtResponse {
    fn from(shirt: &Shirt) -> Self {
        let details = shirt.details();
        Self {
            id: shirt.id(),
            team_id: details.team_id(),
            name: details.name().to_string(),
            description: details.description().to_string(),
            image: details.image().to_string(),
            price: details.price(),
            discount: details.discount(),
            size: details.size(),
        }
    }
}

/// Create a new shirt for an existing team
///
/// POST /shirts
pub async fn create_shirt(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<ShirtRequest>,
) -> Result<Json<ShirtResponse>, ApiError> {
    let shirt = state.shirt_service().create(req.into()).await?;

    tracing::info!(admin = %principal.email, shirt_id = %shirt.id(), "POST /shirts");
    Ok(Json(ShirtResponse::from(&shirt)))
}

/// List every shirt
///
/// GET /shirts
pub async fn list_shirts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShirtResponse>>, ApiError> {
    let shirts = state.shirt_service().list().await?;

    Ok(Json(shirts.iter().map(ShirtResponse::from).collect()))
}

/// Get a shirt by ID
///
/// GET /shirts/:id
pub async fn get_shirt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShirtResponse>, ApiError> {
    let shirt = state.shirt_service().get(&id).await?;

    Ok(Json(ShirtResponse::from(&shirt)))
}

/// Replace every field of a shirt
///
/// PUT /shirts/:id
pub async fn update_shirt(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(req): Json<ShirtRequest>,
) -> Result<Json<ShirtResponse>, ApiError> {
    let shirt = state.shirt_service().update(&id, req.into()).await?;

    tracing::info!(admin = %principal.email, shirt_id = %shirt.id(), "PUT /shirts");
    Ok(Json(ShirtResponse::from(&shirt)))
}

/// Delete a shirt
///
/// DELETE /shirts/:id
pub async fn delete_shirt(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<DeleteMessage>, ApiError> {
    state.shirt_service().delete(&id).await?;

    tracing::info!(admin = %principal.email, shirt_id = %id, "DELETE /shirts");
    Ok(Json(DeleteMessage::new("Shirt deleted successfully")))
}

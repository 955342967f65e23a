//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;
use ventacamisetas_api::api::{router, AppState};
use ventacamisetas_api::auth::jwt::create_token;
use ventacamisetas_api::domain::shirt::ShirtInput;
use ventacamisetas_api::infrastructure::repositories::InMemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Application wired to a fresh in-memory store
pub fn setup_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let app = router(AppState::in_memory(store.clone(), TEST_SECRET));
    (app, store)
}

pub fn admin_token() -> String {
    token_for("admin@ventacamisetas.com", true)
}

pub fn user_token() -> String {
    token_for("fan@ventacamisetas.com", false)
}

pub fn token_for(email: &str, admin: bool) -> String {
    create_token(Uuid::new_v4(), email, admin, TEST_SECRET, Duration::hours(1))
        .expect("valid token")
}

/// Sends one request and returns the status with the decoded JSON body
///
/// Non-JSON bodies are returned as a JSON string.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, json)
}

pub fn team_payload() -> Value {
    json!({ "name": "Real Madrid", "country": "España" })
}

pub fn shirt_payload(team_id: &str) -> Value {
    json!({
        "team_id": team_id,
        "name": "Camiseta local 2025",
        "description": "Camiseta oficial del Real Madrid temporada 2025",
        "image": "https://images.com/realmadrid2025.jpg",
        "price": 90.0,
        "discount": 10,
        "size": "M"
    })
}

pub fn shirt_input(team_id: &str) -> ShirtInput {
    ShirtInput {
        team_id: team_id.to_string(),
        name: "Camiseta local 2025".to_string(),
        description: "Camiseta oficial del Real Madrid temporada 2025".to_string(),
        image: "https://images.com/realmadrid2025.jpg".to_string(),
        price: rust_decimal::Decimal::new(9000, 2),
        discount: Some(rust_decimal::Decimal::from(10)),
        size: "M".to_string(),
    }
}

use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{auth, shirts, teams};
use super::middleware::{require_admin, require_user};
use super::state::AppState;

/// Builds the application router
///
/// Gates are attached per route: reads are public, every catalog write
/// goes through `require_admin`.
pub fn router(state: AppState) -> Router {
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);
    let user = middleware::from_fn_with_state(state.clone(), require_user);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(auth::version))
        .route("/health", get(auth::health_check))
        .route("/ready", get(auth::readiness_check))
        // Account routes
        .route("/users", post(auth::register))
        .route("/login", post(auth::login))
        .route("/exampleadmin", get(auth::example_admin.layer(admin.clone())))
        .route("/exampleuser", get(auth::example_user.layer(user)))
        // Team routes
        .route(
            "/futbol_teams",
            get(teams::list_teams).post(teams::create_team.layer(admin.clone())),
        )
        .route(
            "/futbol_teams/:id",
            get(teams::get_team)
                .put(teams::update_team.layer(admin.clone()))
                .delete(teams::delete_team.layer(admin.clone())),
        )
        // Shirt routes
        .route(
            "/shirts",
            get(shirts::list_shirts).post(shirts::create_shirt.layer(admin.clone())),
        )
        .route(
            "/shirts/:id",
            get(shirts::get_shirt)
                .put(shirts::update_shirt.layer(admin.clone()))
                .delete(shirts::delete_shirt.layer(admin)),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

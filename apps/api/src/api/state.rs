use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;

use crate::auth::{IdentityVerifier, JwtIdentityVerifier};
use crate::config::AppConfig;
use crate::domain::repositories::{ShirtRepository, StoreHealth, TeamRepository, UserRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresShirtRepository, PostgresStoreHealth, PostgresTeamRepository,
    PostgresUserRepository,
};
use crate::services::{ShirtService, TeamService};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub shirts: Arc<dyn ShirtRepository>,
    pub users: Arc<dyn UserRepository>,
    pub store_health: Arc<dyn StoreHealth>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub jwt_secret: Arc<str>,
    pub token_ttl: Duration,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            shirts: Arc::new(PostgresShirtRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            store_health: Arc::new(PostgresStoreHealth::new(pool)),
            identity: Arc::new(JwtIdentityVerifier::new(config.jwt_secret.clone())),
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
            token_ttl: config.token_ttl(),
        }
    }

    /// State backed by a single in-process store
    pub fn in_memory(store: Arc<InMemoryStore>, jwt_secret: &str) -> Self {
        Self {
            teams: store.clone(),
            shirts: store.clone(),
            users: store.clone(),
            store_health: store,
            identity: Arc::new(JwtIdentityVerifier::new(jwt_secret)),
            jwt_secret: Arc::from(jwt_secret),
            token_ttl: Duration::hours(crate::auth::jwt::DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    pub fn team_service(&self) -> TeamService {
        TeamService::new(self.teams.clone(), self.shirts.clone())
    }

    pub fn shirt_service(&self) -> ShirtService {
        ShirtService::new(self.shirts.clone(), self.teams.clone())
    }
}

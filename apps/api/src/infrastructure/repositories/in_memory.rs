use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::repositories::{
    NewUser, ShirtRepository, StoreHealth, TeamRepository, User, UserRepository,
};
use crate::domain::shirt::{Shirt, ShirtDetails};
use crate::domain::team::{Team, TeamDetails};
use crate::domain::user::Email;

#[derive(Default)]
struct Collections {
    teams: Vec<Team>,
    shirts: Vec<Shirt>,
    users: Vec<User>,
}

/// In-process store implementing every repository port
///
/// All collections sit behind one lock, so the team/shirt reference rule is
/// enforced atomically just like the PostgreSQL foreign key. Records are kept
/// in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| CatalogError::Store("lock poisoned".into()))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| CatalogError::Store("lock poisoned".into()))
    }

    /// Grants or revokes admin rights, the way an operator would in the database
    pub fn set_admin(&self, email: &Email, is_admin: bool) -> CatalogResult<bool> {
        let mut store = self.write()?;
        Ok(match store.users.iter_mut().find(|u| &u.email == email) {
            Some(user) => {
                user.is_admin = is_admin;
                true
            }
            None => false,
        })
    }
}

fn team_exists(store: &Collections, id: Uuid) -> bool {
    store.teams.iter().any(|t| t.id() == id)
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn insert(&self, details: &TeamDetails) -> CatalogResult<Team> {
        let team = Team::with_id(Uuid::new_v4(), details.clone());
        self.write()?.teams.push(team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Team>> {
        Ok(self.read()?.teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn exists(&self, id: Uuid) -> CatalogResult<bool> {
        let store = self.read()?;
        Ok(team_exists(&store, id))
    }

    async fn list(&self) -> CatalogResult<Vec<Team>> {
        Ok(self.read()?.teams.clone())
    }

    async fn update(&self, id: Uuid, details: &TeamDetails) -> CatalogResult<Option<Team>> {
        let mut store = self.write()?;
        Ok(store.teams.iter_mut().find(|t| t.id() == id).map(|team| {
            *team = Team::with_id(id, details.clone());
            team.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut store = self.write()?;
        if store.shirts.iter().any(|s| s.team_id() == id) {
            return Err(CatalogError::Conflict(
                "Cannot delete team with associated shirts".to_string(),
            ));
        }

        let before = store.teams.len();
        store.teams.retain(|t| t.id() != id);
        Ok(store.teams.len() < before)
    }
}

#[async_trait]
impl ShirtRepository for InMemoryStore {
    async fn insert(&self, details: &ShirtDetails) -> CatalogResult<Shirt> {
        let mut store = self.write()?;
        if !team_exists(&store, details.team_id()) {
            return Err(CatalogError::NotFound("Team does not exist".to_string()));
        }

        let shirt = Shirt::with_id(Uuid::new_v4(), details.clone());
        store.shirts.push(shirt.clone());
        Ok(shirt)
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Shirt>> {
        Ok(self.read()?.shirts.iter().find(|s| s.id() == id).cloned())
    }

    async fn list(&self) -> CatalogResult<Vec<Shirt>> {
        Ok(self.read()?.shirts.clone())
    }

    async fn update(&self, id: Uuid, details: &ShirtDetails) -> CatalogResult<Option<Shirt>> {
        let mut store = self.write()?;
        if !team_exists(&store, details.team_id()) {
            return Err(CatalogError::NotFound("Team does not exist".to_string()));
        }

        Ok(store.shirts.iter_mut().find(|s| s.id() == id).map(|shirt| {
            *shirt = Shirt::with_id(id, details.clone());
            shirt.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut store = self.write()?;
        let before = store.shirts.len();
        store.shirts.retain(|s| s.id() != id);
        Ok(store.shirts.len() < before)
    }

    async fn count_by_team(&self, team_id: Uuid) -> CatalogResult<u64> {
        Ok(self
            .read()?
            .shirts
            .iter()
            .filter(|s| s.team_id() == team_id)
            .count() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> CatalogResult<User> {
        let mut store = self.write()?;
        if store.users.iter().any(|u| u.email == user.email) {
            return Err(CatalogError::Conflict("Email already registered".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            full_name: user.full_name,
            is_admin: false,
            is_active: true,
        };
        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> CatalogResult<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| &u.email == email).cloned())
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    /// Ready as long as the lock is usable
    async fn ping(&self) -> CatalogResult<()> {
        self.read().map(|_| ())
    }
}

//! In-memory repositories with the same observable behavior as the MySQL and
//! MongoDB ones. Used by service and handler tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Duration, Utc};

use crate::constants::DEFAULT_ROLES;
use crate::models::{Movie, MovieFilter, NewMovie, NewUser, Role, User};
use crate::repositories::{MovieRepository, RepoError, RoleRepository, UserRepository};

#[derive(Default)]
struct Clock {
    last: Option<DateTime<Utc>>,
}

impl Clock {
    /// Strictly increasing timestamps so ordering tests are deterministic.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = match self.last {
            Some(last) => last + Duration::milliseconds(1),
            None => Utc::now(),
        };
        self.last = Some(now);
        now
    }
}

/// Unique keys compare like the `utf8mb4` default collation, ignoring case.
fn same_key(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Default)]
struct UserTables {
    roles: Vec<Role>,
    users: Vec<User>,
    grants: Vec<(i64, i64)>,
    next_user_id: i64,
    clock: Clock,
}

impl UserTables {
    fn roles_of(&self, user_id: i64) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .grants
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, rid)| self.roles.iter().find(|r| r.id == *rid).cloned())
            .collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles
    }

    fn hydrate(&self, user: &User) -> User {
        User {
            roles: self.roles_of(user.id),
            ..user.clone()
        }
    }

    fn role_id(&self, name: &str) -> Option<i64> {
        self.roles.iter().find(|r| r.name == name).map(|r| r.id)
    }
}

/// Shared state behind both user-side repositories, like a single database.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    tables: Arc<Mutex<UserTables>>,
}

impl InMemoryUserStore {
    /// A store whose `roles` table already holds the default roles.
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            for (i, name) in DEFAULT_ROLES.iter().enumerate() {
                tables.roles.push(Role {
                    id: i as i64 + 1,
                    name: name.to_string(),
                });
            }
        }
        store
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    pub fn roles(&self) -> InMemoryRoleRepository {
        InMemoryRoleRepository {
            store: self.clone(),
        }
    }

    pub fn grant_count(&self) -> usize {
        self.tables.lock().unwrap().grants.len()
    }
}

pub struct InMemoryUserRepository {
    store: InMemoryUserStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser, roles: &[&str]) -> Result<User, RepoError> {
        let mut tables = self.store.tables.lock().unwrap();
        if tables
            .users
            .iter()
            .any(|u| same_key(&u.username, &user.username) || same_key(&u.email, &user.email))
        {
            return Err(RepoError::Conflict("users unique key".to_string()));
        }

        let mut role_ids = Vec::new();
        for role in roles {
            match tables.role_id(role) {
                Some(id) => role_ids.push(id),
                None => return Err(RepoError::Query(format!("role {} does not exist", role))),
            }
        }

        tables.next_user_id += 1;
        let id = tables.next_user_id;
        let now = tables.clock.tick();
        let created = User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: now,
            updated_at: now,
            roles: Vec::new(),
        };
        tables.users.push(created.clone());
        for role_id in role_ids {
            tables.grants.push((id, role_id));
        }
        Ok(tables.hydrate(&created))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| tables.hydrate(u)))
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| same_key(&u.username, username))
            .map(|u| tables.hydrate(u)))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| same_key(&u.email, email))
            .map(|u| tables.hydrate(u)))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        Ok(self.get_by_email(email).await?.is_some())
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        let mut users: Vec<User> = tables.users.iter().map(|u| tables.hydrate(u)).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn update(&self, user: &User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.lock().unwrap();
        if tables.users.iter().any(|u| {
            u.id != user.id
                && (same_key(&u.username, &user.username) || same_key(&u.email, &user.email))
        }) {
            return Err(RepoError::Conflict("users unique key".to_string()));
        }

        let now = tables.clock.tick();
        let stored = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        stored.username = user.username.clone();
        stored.email = user.email.clone();
        stored.password_hash = user.password_hash.clone();
        stored.first_name = user.first_name.clone();
        stored.last_name = user.last_name.clone();
        stored.updated_at = now;

        let updated = stored.clone();
        Ok(tables.hydrate(&updated))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.lock().unwrap();
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        if tables.users.len() == before {
            return Err(RepoError::NotFound);
        }
        tables.grants.retain(|(uid, _)| *uid != id);
        Ok(())
    }

    async fn grant_role(&self, user_id: i64, role: &str) -> Result<(), RepoError> {
        let mut tables = self.store.tables.lock().unwrap();
        let role_id = tables.role_id(role).ok_or(RepoError::NotFound)?;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(RepoError::NotFound);
        }
        if !tables.grants.contains(&(user_id, role_id)) {
            tables.grants.push((user_id, role_id));
        }
        Ok(())
    }
}

pub struct InMemoryRoleRepository {
    store: InMemoryUserStore,
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables.roles.iter().find(|r| r.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Role>, RepoError> {
        let tables = self.store.tables.lock().unwrap();
        let mut roles = tables.roles.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn ensure_defaults(&self) -> Result<(), RepoError> {
        let mut tables = self.store.tables.lock().unwrap();
        for name in DEFAULT_ROLES {
            if tables.role_id(name).is_none() {
                let id = tables.roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                tables.roles.push(Role {
                    id,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Default)]
struct MovieTable {
    movies: HashMap<ObjectId, Movie>,
    clock: Clock,
}

#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    table: Arc<Mutex<MovieTable>>,
}

impl InMemoryMovieRepository {
    fn sorted(&self, keep: impl Fn(&Movie) -> bool) -> Vec<Movie> {
        let table = self.table.lock().unwrap();
        let mut movies: Vec<Movie> = table.movies.values().filter(|m| keep(m)).cloned().collect();
        movies.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        movies
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, movie: NewMovie) -> Result<Movie, RepoError> {
        let mut table = self.table.lock().unwrap();
        let now = table.clock.tick();
        let movie = movie.into_movie(ObjectId::new(), now);
        table.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn get_by_id(&self, id: ObjectId) -> Result<Option<Movie>, RepoError> {
        Ok(self.table.lock().unwrap().movies.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        Ok(self.sorted(|_| true))
    }

    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepoError> {
        Ok(self.sorted(|m| {
            filter
                .title
                .as_deref()
                .map_or(true, |t| contains_ignore_case(&m.title, t))
                && filter
                    .genre
                    .as_deref()
                    .map_or(true, |g| contains_ignore_case(&m.genre, g))
        }))
    }

    async fn update(&self, id: ObjectId, movie: NewMovie) -> Result<Movie, RepoError> {
        let mut table = self.table.lock().unwrap();
        let now = table.clock.tick();
        let stored = table.movies.get_mut(&id).ok_or(RepoError::NotFound)?;
        let created_at = stored.created_at;
        *stored = Movie {
            created_at,
            ..movie.into_movie(id, now)
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), RepoError> {
        let mut table = self.table.lock().unwrap();
        table
            .movies
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, RepoError> {
        let table = self.table.lock().unwrap();
        let genres: BTreeSet<String> = table
            .movies
            .values()
            .map(|m| m.genre.clone())
            .filter(|g| !g.is_empty())
            .collect();
        Ok(genres.into_iter().collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.lock().unwrap().movies.len() as u64)
    }
}

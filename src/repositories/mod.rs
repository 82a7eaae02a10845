//! Repository layer for database operations.
//!
//! Services only see the traits declared here. The MySQL and MongoDB
//! implementations are the sole owners of the mapping between entities and
//! rows/documents.

pub mod movie_repository;
pub mod role_repository;
pub mod user_repository;

#[cfg(test)]
pub mod memory;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{Movie, MovieFilter, NewMovie, NewUser, Role, User};

pub use movie_repository::MongoMovieRepository;
pub use role_repository::MySqlRoleRepository;
pub use user_repository::MySqlUserRepository;

#[derive(Debug, Error, PartialEq)]
pub enum RepoError {
    /// A uniqueness constraint was violated.
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    /// No record matched the id.
    #[error("record not found")]
    NotFound,
    /// The store did not answer before the deadline.
    #[error("store operation timed out")]
    Timeout,
    #[error("store error: {0}")]
    Query(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Conflict(db_err.message().to_string())
            }
            sqlx::Error::PoolTimedOut => RepoError::Timeout,
            _ => RepoError::Query(err.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        RepoError::Query(err.to_string())
    }
}

/// Run a store call under a deadline. Expiry is reported, never retried.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, RepoError>>,
{
    tokio::time::timeout(deadline, operation)
        .await
        .map_err(|_| RepoError::Timeout)?
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and grant it the named roles in one transaction.
    async fn create(&self, user: NewUser, roles: &[&str]) -> Result<User, RepoError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepoError>;

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;

    /// All users, newest first.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Overwrite the mutable fields of `user` and refresh `updated_at`.
    async fn update(&self, user: &User) -> Result<User, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// Grant a role by name. Granting a role the user already has is a no-op.
    async fn grant_role(&self, user_id: i64, role: &str) -> Result<(), RepoError>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, RepoError>;

    /// All roles ordered by name.
    async fn list(&self) -> Result<Vec<Role>, RepoError>;

    /// Insert the default roles that are missing.
    async fn ensure_defaults(&self) -> Result<(), RepoError>;
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: NewMovie) -> Result<Movie, RepoError>;

    async fn get_by_id(&self, id: ObjectId) -> Result<Option<Movie>, RepoError>;

    /// All movies, newest first.
    async fn list(&self) -> Result<Vec<Movie>, RepoError>;

    /// Movies matching every populated filter field, newest first.
    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepoError>;

    async fn update(&self, id: ObjectId, movie: NewMovie) -> Result<Movie, RepoError>;

    async fn delete(&self, id: ObjectId) -> Result<(), RepoError>;

    /// Distinct genres, sorted ascending.
    async fn distinct_genres(&self) -> Result<Vec<String>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

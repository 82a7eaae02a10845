//! User service for user CRUD operations and role management.

use std::sync::Arc;

use log::{debug, info};

use crate::constants::{ERR_EMAIL_EXISTS, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND, ROLE_ADMIN};
use crate::errors::ApiError;
use crate::models::{Role, UpdateUserRequest, User, UserResponse};
use crate::repositories::{RepoError, RoleRepository, UserRepository};
use crate::services::password::PasswordHasher;
use crate::utils::mask_email;

fn user_not_found() -> ApiError {
    ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
}

fn map_missing(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound => user_not_found(),
        other => other.into(),
    }
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.users.list().await?;
        debug!("Listing {} users", users.len());
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserResponse, ApiError> {
        Ok(self.find(id).await?.into())
    }

    /// Replace username, email and names; the password digest changes only when a new
    /// password is supplied. Concurrent updates are last-write-wins.
    pub async fn update(&self, id: i64, req: UpdateUserRequest) -> Result<UserResponse, ApiError> {
        let current = self.find(id).await?;

        // The store compares case-insensitively, so the lookup may return this same user.
        let owner = self.users.get_by_username(&req.username).await?;
        if owner.is_some_and(|u| u.id != id) {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }
        let owner = self.users.get_by_email(&req.email).await?;
        if owner.is_some_and(|u| u.id != id) {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        let password_hash = match req.password.filter(|p| !p.is_empty()) {
            Some(password) => self.hasher.hash_async(password).await?,
            None => current.password_hash.clone(),
        };

        let updated = self
            .users
            .update(&User {
                username: req.username,
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                ..current
            })
            .await
            .map_err(map_missing)?;

        info!("Updated user {} ({})", updated.id, mask_email(&updated.email));
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.users.delete(id).await.map_err(map_missing)?;
        info!("Deleted user {}", id);
        Ok(())
    }

    /// Grant `ROLE_ADMIN`. Promoting an admin again leaves it unchanged.
    pub async fn promote(&self, id: i64) -> Result<UserResponse, ApiError> {
        self.find(id).await?;
        self.users
            .grant_role(id, ROLE_ADMIN)
            .await
            .map_err(map_missing)?;
        info!("Granted {} to user {}", ROLE_ADMIN, id);
        self.get(id).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        Ok(self.roles.list().await?)
    }

    async fn find(&self, id: i64) -> Result<User, ApiError> {
        self.users.get_by_id(id).await?.ok_or_else(user_not_found)
    }
}

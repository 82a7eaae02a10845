//! Authentication service for login and registration.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::constants::{ERR_EMAIL_EXISTS, ERR_INVALID_CREDENTIALS, ERR_USERNAME_EXISTS, ROLE_USER};
use crate::errors::ApiError;
use crate::models::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenIssuer;
use crate::utils::mask_username;

/// Service for authentication operations.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Authenticate a user by username and password and return a token.
    ///
    /// An unknown username and a wrong password produce the same error.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ApiError> {
        let invalid = || ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string());

        let user = self
            .users
            .get_by_username(&req.username)
            .await?
            .ok_or_else(|| {
                debug!("Login failed for {}: unknown user", mask_username(&req.username));
                invalid()
            })?;

        if !self
            .hasher
            .verify_async(req.password, user.password_hash.clone())
            .await?
        {
            debug!("Login failed for {}: wrong password", mask_username(&user.username));
            return Err(invalid());
        }

        info!("User {} logged in", mask_username(&user.username));
        self.auth_response(user)
    }

    /// Create an account with `ROLE_USER` and return a token for it.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, ApiError> {
        if self.users.exists_by_username(&req.username).await? {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }
        if self.users.exists_by_email(&req.email).await? {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        let password_hash = self.hasher.hash_async(req.password).await?;

        // A concurrent registration can still win the race; the unique keys report it as a conflict.
        let user = self
            .users
            .create(
                NewUser {
                    username: req.username,
                    email: req.email,
                    password_hash,
                    first_name: req.first_name,
                    last_name: req.last_name,
                },
                &[ROLE_USER],
            )
            .await?;

        info!("Registered user {}", mask_username(&user.username));
        self.auth_response(user)
    }

    fn auth_response(&self, user: User) -> Result<AuthResponse, ApiError> {
        let token = self
            .tokens
            .issue(user.id, &user.username, user.role_names(), Utc::now())?;
        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ERR_USER_CONFLICT, MIN_BCRYPT_COST};
    use crate::repositories::memory::InMemoryUserStore;
    use chrono::Duration;

    fn service(store: &InMemoryUserStore) -> AuthService {
        AuthService::new(
            Arc::new(store.users()),
            PasswordHasher::new(MIN_BCRYPT_COST),
            TokenIssuer::new("test-secret", "user-service", Duration::hours(24)),
        )
    }

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: "secreto123".into(),
            email: email.into(),
            first_name: Some("John".into()),
            last_name: None,
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_register_grants_user_role_and_token() {
        let store = InMemoryUserStore::seeded();
        let service = service(&store);

        let response = service
            .register(register_request("johndoe", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(response.user.username, "johndoe");
        assert_eq!(response.user.roles.len(), 1);
        assert_eq!(response.user.roles[0].name, ROLE_USER);

        let claims = TokenIssuer::new("test-secret", "user-service", Duration::hours(24))
            .verify(&response.token, Utc::now())
            .unwrap();
        assert_eq!(claims.user_id, response.user.id);
        assert_eq!(claims.roles, vec![ROLE_USER.to_string()]);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let store = InMemoryUserStore::seeded();
        service(&store)
            .register(register_request("johndoe", "john@example.com"))
            .await
            .unwrap();

        let stored = store.users().get_by_username("johndoe").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secreto123");
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let store = InMemoryUserStore::seeded();
        let service = service(&store);
        service
            .register(register_request("johndoe", "john@example.com"))
            .await
            .unwrap();

        let err = service
            .register(register_request("johndoe", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));

        let err = service
            .register(register_request("janedoe", "john@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));

        assert_eq!(store.users().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration() {
        let store = InMemoryUserStore::seeded();
        let service = service(&store);

        let (a, b) = tokio::join!(
            service.register(register_request("johndoe", "a@example.com")),
            service.register(register_request("johndoe", "b@example.com")),
        );

        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let err = results.into_iter().find_map(Result::err).unwrap();
        assert!(
            err == ApiError::Conflict(ERR_USERNAME_EXISTS.to_string())
                || err == ApiError::Conflict(ERR_USER_CONFLICT.to_string())
        );
        assert_eq!(store.grant_count(), 1);
    }

    #[tokio::test]
    async fn test_login() {
        let store = InMemoryUserStore::seeded();
        let service = service(&store);
        service
            .register(register_request("johndoe", "john@example.com"))
            .await
            .unwrap();

        let response = service
            .login(login_request("johndoe", "secreto123"))
            .await
            .unwrap();
        assert_eq!(response.user.username, "johndoe");
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = InMemoryUserStore::seeded();
        let service = service(&store);
        service
            .register(register_request("johndoe", "john@example.com"))
            .await
            .unwrap();

        let expected = ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string());
        assert_eq!(
            service.login(login_request("johndoe", "wrong")).await.unwrap_err(),
            expected
        );
        assert_eq!(
            service.login(login_request("nobody", "secreto123")).await.unwrap_err(),
            expected
        );
    }
}

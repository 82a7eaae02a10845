//! Password hashing with bcrypt.

use crate::constants::DEFAULT_BCRYPT_COST;
use crate::errors::ApiError;

/// Salted bcrypt hashing at a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password using bcrypt. Only the first 72 bytes of the password are significant.
    pub fn hash(&self, password: &str) -> Result<String, ApiError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Verify a password against a bcrypt hash. A malformed hash never matches.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// `hash` on the blocking pool.
    pub async fn hash_async(&self, password: String) -> Result<String, ApiError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await?
    }

    /// `verify` on the blocking pool.
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool, ApiError> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await?)
    }
}

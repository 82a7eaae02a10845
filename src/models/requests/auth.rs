//! Authentication request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for user registration
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    /// Unique username (3-50 characters)
    #[schema(example = "johndoe")]
    pub username: String,
    /// Password (6-120 characters)
    #[schema(example = "secreto123")]
    pub password: String,
    /// Email address (max 80 characters)
    #[schema(example = "john@example.com")]
    pub email: String,
    /// First name (max 50 characters)
    #[schema(example = "John")]
    pub first_name: Option<String>,
    /// Last name (max 50 characters)
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
}

/// Request payload for user login
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "secreto123")]
    pub password: String,
}

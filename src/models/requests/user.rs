//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for updating a user. Replaces all mutable fields.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    #[schema(example = "newusername")]
    pub username: String,
    #[schema(example = "newemail@example.com")]
    pub email: String,
    #[schema(example = "John")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    /// New password; the stored digest is kept when absent or empty
    pub password: Option<String>,
}

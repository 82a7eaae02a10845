//! JWT Claims model.

use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub roles: Vec<String>, // role names, e.g. ROLE_USER
    pub iss: String,
    pub iat: i64, // issued at, unix seconds
    pub exp: i64, // expiration, unix seconds
}

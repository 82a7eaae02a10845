//! Services organized by domain concern.

pub mod auth_service;
pub mod movie_service;
pub mod password;
pub mod token;
pub mod user_service;

pub use auth_service::AuthService;
pub use movie_service::MovieService;
pub use password::PasswordHasher;
pub use token::{TokenError, TokenIssuer};
pub use user_service::UserService;

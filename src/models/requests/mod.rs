//! Request models for API endpoints.

pub mod auth;
pub mod movie;
pub mod user;

pub use auth::*;
pub use movie::*;
pub use user::*;

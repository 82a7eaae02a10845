//! Response models for API endpoints.

pub mod api;
pub mod movie;
pub mod user;

pub use api::*;
pub use movie::*;
pub use user::*;

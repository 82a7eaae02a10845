//! Request validation. Every validator stops at the first failing rule.

pub mod common;
pub mod movie;
pub mod user;

pub use movie::validate_movie_request;
pub use user::{validate_login_request, validate_register_request, validate_update_user_request};

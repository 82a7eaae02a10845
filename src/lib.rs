//! Movie catalog and user/authentication REST services.
//!
//! The `movie-service` binary serves the catalog from MongoDB; the
//! `user-service` binary handles accounts, roles and tokens on MySQL.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod utils;
pub mod validators;

//! Application constants module.
//!
//! This module centralizes the constant strings and limits used by both services,
//! including error messages, success messages, role names and store names.

pub mod collections;
pub mod errors;
pub mod limits;
pub mod messages;
pub mod roles;

pub use collections::*;
pub use errors::*;
pub use limits::*;
pub use messages::*;
pub use roles::*;

//! Data models organized by type.

pub mod claims;
pub mod movie;
pub mod requests;
pub mod responses;
pub mod user;

pub use claims::*;
pub use movie::*;
pub use requests::*;
pub use responses::*;
pub use user::*;

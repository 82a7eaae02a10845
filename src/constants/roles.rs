//! Role names seeded into the `roles` table.

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Roles inserted at startup when missing.
pub const DEFAULT_ROLES: [&str; 2] = [ROLE_USER, ROLE_ADMIN];

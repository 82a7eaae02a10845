//! Field limits and store deadlines.

use std::time::Duration;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 80;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 120;
pub const NAME_MAX_LEN: usize = 50;

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const MAX_MOVIE_DURATION: i32 = 600;

/// Deadline for single-record store operations.
pub const POINT_DEADLINE: Duration = Duration::from_secs(5);

/// Deadline for list, search and aggregate operations.
pub const SCAN_DEADLINE: Duration = Duration::from_secs(10);

/// bcrypt cost used when `BCRYPT_COST` is unset.
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
pub const MIN_JWT_EXPIRATION_HOURS: i64 = 1;
/// One year.
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 8760;

//! User and authentication request validators.

use crate::constants::{
    EMAIL_MAX_LEN, ERR_EMAIL_FORMAT, ERR_EMAIL_TOO_LONG, ERR_FIRST_NAME_TOO_LONG,
    ERR_LAST_NAME_TOO_LONG, ERR_PASSWORD_REQUIRED, ERR_PASSWORD_TOO_LONG, ERR_PASSWORD_TOO_SHORT,
    ERR_USERNAME_REQUIRED, ERR_USERNAME_TOO_LONG, ERR_USERNAME_TOO_SHORT, NAME_MAX_LEN,
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use crate::errors::ApiError;
use crate::models::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::validators::common::{char_len, ensure, is_valid_email, max_len, require};

fn validate_username(username: &str) -> Result<(), ApiError> {
    ensure(
        char_len(username.trim()) >= USERNAME_MIN_LEN,
        ERR_USERNAME_TOO_SHORT,
    )?;
    max_len(username, USERNAME_MAX_LEN, ERR_USERNAME_TOO_LONG)
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    ensure(is_valid_email(email), ERR_EMAIL_FORMAT)?;
    max_len(email, EMAIL_MAX_LEN, ERR_EMAIL_TOO_LONG)
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    ensure(char_len(password) >= PASSWORD_MIN_LEN, ERR_PASSWORD_TOO_SHORT)?;
    max_len(password, PASSWORD_MAX_LEN, ERR_PASSWORD_TOO_LONG)
}

fn validate_names(first_name: Option<&str>, last_name: Option<&str>) -> Result<(), ApiError> {
    max_len(first_name.unwrap_or_default(), NAME_MAX_LEN, ERR_FIRST_NAME_TOO_LONG)?;
    max_len(last_name.unwrap_or_default(), NAME_MAX_LEN, ERR_LAST_NAME_TOO_LONG)
}

pub fn validate_register_request(req: &RegisterRequest) -> Result<(), ApiError> {
    validate_username(&req.username)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_names(req.first_name.as_deref(), req.last_name.as_deref())
}

pub fn validate_login_request(req: &LoginRequest) -> Result<(), ApiError> {
    require(&req.username, ERR_USERNAME_REQUIRED)?;
    ensure(!req.password.is_empty(), ERR_PASSWORD_REQUIRED)
}

/// Same rules as registration; the password is only checked when a new one is given.
pub fn validate_update_user_request(req: &UpdateUserRequest) -> Result<(), ApiError> {
    validate_username(&req.username)?;
    validate_email(&req.email)?;
    if let Some(password) = req.password.as_deref().filter(|p| !p.is_empty()) {
        validate_password(password)?;
    }
    validate_names(req.first_name.as_deref(), req.last_name.as_deref())
}

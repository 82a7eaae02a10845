//! Common validation utilities and helpers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ApiError;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Length in characters, so accented names count the way users type them.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Fail with `message` unless `ok` holds.
pub fn ensure(ok: bool, message: &str) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Validation(message.to_string()))
    }
}

/// Fail with `message` when the value is empty after trimming.
pub fn require(value: &str, message: &str) -> Result<(), ApiError> {
    ensure(!value.trim().is_empty(), message)
}

/// Fail with `message` when the value is longer than `max` characters.
pub fn max_len(value: &str, max: usize, message: &str) -> Result<(), ApiError> {
    ensure(char_len(value) <= max, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("j.doe+movies@mail.example.co"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john.example.com"));
        assert!(!is_valid_email("john@example.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_lengths_count_characters() {
        assert_eq!(char_len("Película"), 8);
        assert!(max_len("ñññ", 3, "demasiado largo").is_ok());
        assert_eq!(
            max_len("ññññ", 3, "demasiado largo"),
            Err(ApiError::Validation("demasiado largo".into()))
        );
    }

    #[test]
    fn test_require_trims() {
        assert!(require("  ", "obligatorio").is_err());
        assert!(require(" x ", "obligatorio").is_ok());
    }
}

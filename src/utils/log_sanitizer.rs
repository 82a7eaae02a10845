//! Log sanitization utilities for masking usernames and emails before logging.

const VISIBLE_CHARS: usize = 3;

fn visible_prefix(value: &str) -> &str {
    match value.char_indices().nth(VISIBLE_CHARS) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Mask an email address, keeping the first 3 characters of the local part and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

/// Mask a username, keeping only the first 3 characters.
pub fn mask_username(username: &str) -> String {
    format!("{}***", visible_prefix(username))
}

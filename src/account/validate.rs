//! Registration input checks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USERNAME_PATTERN: Regex = Regex::new("^[a-zA-Z0-9_]{3,20}$").unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new("^[A-Za-z0-9+_.-]+@(.+)$").unwrap();
}

/// 3-20 characters: letters, digits, and underscore.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// Permissive shape check: a non-empty local part, an @, and something
/// after it. Deliverability is the mail server's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// At least 6 characters.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

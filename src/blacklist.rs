//! Blacklist of known-weak passwords.
//!
//! The list is fixed and built once on first use; there is no reload path.

use std::collections::HashSet;
use std::sync::LazyLock;

const COMMON_PASSWORDS: [&str; 15] = [
    "123456", "password", "12345678", "qwerty", "abc123", "monkey", "1234567", "letmein",
    "trustno1", "dragon", "baseball", "iloveyou", "master", "sunshine", "ashley",
];

static BLACKLIST: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORDS.into_iter().collect());

/// Returns the loaded blacklist.
pub fn blacklist() -> &'static HashSet<&'static str> {
    &BLACKLIST
}

/// Checks if a password is in the blacklist.
///
/// The password is lowercased before an exact lookup; substrings of a
/// listed entry do not match.
pub fn is_blacklisted(password: &str) -> bool {
    BLACKLIST.contains(password.to_lowercase().as_str())
}

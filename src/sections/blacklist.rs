//! Blacklist section - checks if password is in common password list.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

pub const COMMON_ADVICE: &str = "This is a commonly used password";

/// Awards 10 points unless the password is blacklisted.
pub fn blacklist_section(password: &SecretString) -> SectionScore {
    let mut section = SectionScore::default();
    if is_blacklisted(password.expose_secret()) {
        section.advise(COMMON_ADVICE);
    } else {
        section.award(10);
    }
    section
}

//! Length section - awards points by length tier.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

pub const SHORT_ADVICE: &str = "Use at least 8 characters";

/// Scores the password length. Only one tier applies.
///
/// - 12 or more characters: 30 points
/// - 8 to 11 characters: 20 points
/// - shorter: no points and a feedback entry
pub fn length_section(password: &SecretString) -> SectionScore {
    let mut section = SectionScore::default();
    let len = password.expose_secret().chars().count();

    if len >= LONG_LENGTH {
        section.award(30);
    } else if len >= MIN_LENGTH {
        section.award(20);
    } else {
        section.advise(SHORT_ADVICE);
    }
    section
}

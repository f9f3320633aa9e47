//! Character variety section - checks for digits, uppercase, lowercase and special chars.

use secrecy::{ExposeSecret, SecretString};
use crate::charset::{classify, CharClass};
use super::SectionScore;

const CLASS_POINTS: u8 = 20;

pub const DIGIT_ADVICE: &str = "Add a number";
pub const UPPER_ADVICE: &str = "Add an uppercase letter";
pub const LOWER_ADVICE: &str = "Add a lowercase letter";
pub const SPECIAL_ADVICE: &str = "Add a special character (!@#$%)";

/// Awards 20 points per character class present, in a single pass.
///
/// Feedback for missing classes is appended in the order digit, upper,
/// lower, special.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let (mut has_digit, mut has_upper, mut has_lower, mut has_special) =
        (false, false, false, false);

    for c in password.expose_secret().chars() {
        match classify(c) {
            Some(CharClass::Digit) => has_digit = true,
            Some(CharClass::Upper) => has_upper = true,
            Some(CharClass::Lower) => has_lower = true,
            Some(CharClass::Special) => has_special = true,
            None => {}
        }
    }

    let mut section = SectionScore::default();
    for (present, advice) in [
        (has_digit, DIGIT_ADVICE),
        (has_upper, UPPER_ADVICE),
        (has_lower, LOWER_ADVICE),
        (has_special, SPECIAL_ADVICE),
    ] {
        if present {
            section.award(CLASS_POINTS);
        } else {
            section.advise(advice);
        }
    }
    section
}

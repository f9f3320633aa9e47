//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{blacklist_section, character_variety_section, length_section};
use crate::types::{Strength, StrengthReport};

const LOOKS_GOOD: &str = "Password looks good!";

/// Evaluates password strength and returns a detailed report.
///
/// Every rule is scored independently and the points are added up
/// without clamping, so the total ranges over `0..=StrengthReport::MAX_SCORE`.
/// The label is derived from the total alone. Accepts any string, including
/// the empty one.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let length = length_section(password);
    let variety = character_variety_section(password);
    let common = blacklist_section(password);

    let score = length.points + variety.points + common.points;

    let mut feedback: Vec<String> = [length, variety, common]
        .into_iter()
        .flat_map(|section| section.feedback)
        .map(String::from)
        .collect();
    if feedback.is_empty() {
        feedback.push(LOOKS_GOOD.to_string());
    }

    let strength = Strength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, %strength, feedback = feedback.len(), "password evaluated");

    StrengthReport {
        password: SecretString::new(password.expose_secret().into()),
        score,
        strength,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pwd: &str) -> StrengthReport {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate("");
        assert_eq!(report.score, 10);
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(
            report.feedback,
            vec![
                "Use at least 8 characters",
                "Add a number",
                "Add an uppercase letter",
                "Add a lowercase letter",
                "Add a special character (!@#$%)",
            ]
        );
    }

    #[test]
    fn test_evaluate_blacklisted_password() {
        let report = evaluate("password");
        assert_eq!(report.score, 40);
        assert_eq!(report.strength, Strength::Medium);
        assert_eq!(
            report.feedback,
            vec![
                "Add a number",
                "Add an uppercase letter",
                "Add a special character (!@#$%)",
                "This is a commonly used password",
            ]
        );
    }

    #[test]
    fn test_evaluate_blacklisted_is_case_insensitive() {
        let report = evaluate("PassWord");
        assert!(report
            .feedback
            .iter()
            .any(|f| f == "This is a commonly used password"));
        assert_eq!(report.score, 60);
    }

    #[test]
    fn test_evaluate_all_rules_pass() {
        // 20 (length 9) + 4 * 20 (classes) + 10 (not common)
        let report = evaluate("Hello123!");
        assert_eq!(report.score, 110);
        assert_eq!(report.strength, Strength::Strong);
        assert_eq!(report.feedback, vec!["Password looks good!"]);
    }

    #[test]
    fn test_evaluate_long_password_scores_maximum() {
        let report = evaluate("TestPassword123!");
        assert_eq!(report.score, StrengthReport::MAX_SCORE);
        assert_eq!(report.strength, Strength::Strong);
        assert_eq!(report.feedback, vec!["Password looks good!"]);
    }

    #[test]
    fn test_evaluate_long_tier_adds_ten_over_medium_tier() {
        let medium = evaluate("Abcdefg1!");
        let long = evaluate("Abcdefghijk1!");
        assert_eq!(medium.score, 110);
        assert_eq!(long.score, 120);
        assert_eq!(long.score - medium.score, 10);
    }

    #[test]
    fn test_evaluate_blacklist_costs_exactly_ten() {
        // "iloveyou" is listed, "iloveyuo" is not
        let listed = evaluate("ILoveYou");
        let unlisted = evaluate("ILoveYuo");
        assert_eq!(listed.score, 60);
        assert_eq!(unlisted.score, 70);
        assert_eq!(listed.strength, Strength::Medium);
        assert_eq!(unlisted.strength, Strength::Strong);
    }

    #[test]
    fn test_evaluate_band_boundaries() {
        // 20 (length) + 20 (lower) + 20 (digit) + 10 (not common)
        let report = evaluate("summer2024");
        assert_eq!(report.score, 70);
        assert_eq!(report.strength, Strength::Strong);

        // 20 (length) + 20 (lower) + 10 (not common)
        let report = evaluate("abcdefgh");
        assert_eq!(report.score, 50);
        assert_eq!(report.strength, Strength::Medium);
    }

    #[test]
    fn test_evaluate_short_password_keeps_rule_order() {
        let report = evaluate("abc");
        assert_eq!(report.score, 30);
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(report.feedback[0], "Use at least 8 characters");
        assert_eq!(report.feedback.len(), 4);
    }

    #[test]
    fn test_evaluate_echoes_password() {
        let report = evaluate("Tr0ub4dor&3");
        assert_eq!(report.password.expose_secret(), "Tr0ub4dor&3");
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = [
            "",
            "a",
            "password",
            "PASSWORD",
            "12345678",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "ünïcödé-Pässwörd-42",
            "    ",
        ];

        for pwd_str in test_passwords {
            let report = evaluate(pwd_str);
            assert!(
                report.score <= StrengthReport::MAX_SCORE,
                "Score {} out of bounds for password '{}'",
                report.score,
                pwd_str
            );
            assert!(!report.feedback.is_empty());
            assert_eq!(report.strength, Strength::from_score(report.score));
        }
    }
}

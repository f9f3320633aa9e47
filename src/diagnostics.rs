//! Readiness self-check.
//!
//! Runs both operations on fixed inputs and inspects the results
//! structurally. Scores are not validated beyond their range.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::charset::CharClass;
use crate::evaluator::evaluate_password_strength;
use crate::generator::{generate_password, GeneratorConfig};
use crate::types::{Strength, StrengthReport};

pub const SAMPLE_PASSWORD: &str = "TestPassword123!";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelfCheckError {
    #[error("Evaluation returned a malformed report: {0}")]
    MalformedReport(&'static str),
    #[error("Generated password has length {actual}, expected {expected}")]
    UnexpectedLength { expected: usize, actual: usize },
    #[error("Generated password is missing a {0:?} character")]
    MissingClass(CharClass),
}

/// Summary of a successful self-check.
#[derive(Debug)]
pub struct Readiness {
    pub sample_score: u8,
    pub sample_strength: Strength,
    pub generated: SecretString,
}

/// Evaluates a sample password and generates one with the default config.
pub fn self_check() -> Result<Readiness, SelfCheckError> {
    let result = run_checks();

    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(readiness) => tracing::info!(
                score = readiness.sample_score,
                strength = %readiness.sample_strength,
                "self-check passed"
            ),
            Err(e) => tracing::error!("self-check failed: {}", e),
        }
    }

    result
}

fn run_checks() -> Result<Readiness, SelfCheckError> {
    let sample = SecretString::new(SAMPLE_PASSWORD.into());
    let report = evaluate_password_strength(&sample);

    if report.password.expose_secret() != SAMPLE_PASSWORD {
        return Err(SelfCheckError::MalformedReport("password not echoed"));
    }
    if report.score > StrengthReport::MAX_SCORE {
        return Err(SelfCheckError::MalformedReport("score above rubric maximum"));
    }
    if report.feedback.is_empty() {
        return Err(SelfCheckError::MalformedReport("feedback is empty"));
    }
    if report.strength != Strength::from_score(report.score) {
        return Err(SelfCheckError::MalformedReport("label does not match score"));
    }

    let config = GeneratorConfig::default();
    let generated = generate_password(&config);
    check_generated(generated.expose_secret(), &config)?;

    Ok(Readiness {
        sample_score: report.score,
        sample_strength: report.strength,
        generated,
    })
}

fn check_generated(password: &str, config: &GeneratorConfig) -> Result<(), SelfCheckError> {
    let actual = password.chars().count();
    let expected = config.effective_length();
    if actual != expected {
        return Err(SelfCheckError::UnexpectedLength { expected, actual });
    }
    for class in config.required_classes() {
        if !password.chars().any(|c| class.contains(c)) {
            return Err(SelfCheckError::MissingClass(class));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        let readiness = self_check().expect("self-check should pass");
        assert_eq!(readiness.sample_score, StrengthReport::MAX_SCORE);
        assert_eq!(readiness.sample_strength, Strength::Strong);
        assert_eq!(readiness.generated.expose_secret().chars().count(), 12);
    }

    #[test]
    fn test_check_generated_wrong_length() {
        let config = GeneratorConfig::default();
        assert_eq!(
            check_generated("Ab1!", &config),
            Err(SelfCheckError::UnexpectedLength {
                expected: 12,
                actual: 4
            })
        );
    }

    #[test]
    fn test_check_generated_missing_class() {
        let config = GeneratorConfig::default();
        assert_eq!(
            check_generated("Abcdefgh1234", &config),
            Err(SelfCheckError::MissingClass(CharClass::Special))
        );
        assert_eq!(check_generated("Abcdefgh1234", &config.with_special(false)), Ok(()));
    }
}

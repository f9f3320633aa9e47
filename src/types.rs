//! Value types returned by the evaluator.

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

/// Strength label derived solely from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Lower bound of the `Medium` band (inclusive).
    pub const MEDIUM_THRESHOLD: u8 = 40;
    /// Lower bound of the `Strong` band (inclusive).
    pub const STRONG_THRESHOLD: u8 = 70;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            Strength::Strong
        } else if score >= Self::MEDIUM_THRESHOLD {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0:?}")]
pub struct ParseStrengthError(pub String);

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Strength::Weak),
            "medium" => Ok(Strength::Medium),
            "strong" => Ok(Strength::Strong),
            _ => Err(ParseStrengthError(s.to_string())),
        }
    }
}

/// Result of a single evaluation.
///
/// `score` is the plain sum of the rule points and lies in
/// `0..=Self::MAX_SCORE`. `feedback` is never empty and keeps the order in
/// which the rules fired.
#[derive(Debug, Clone)]
pub struct StrengthReport {
    pub password: SecretString,
    pub score: u8,
    pub strength: Strength,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    /// 30 (length) + 4 * 20 (classes) + 10 (not blacklisted).
    pub const MAX_SCORE: u8 = 120;
}

//! Password strength scoring and password generation library
//!
//! Scores passwords against a fixed rubric (length, character classes and
//! a blacklist of common passwords) and generates random passwords that
//! contain every required character class.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_rubric::{evaluate, generate, Strength};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("Hello123!".to_string().into());
//! let report = evaluate(&password);
//! assert_eq!(report.strength, Strength::Strong);
//! println!("Score: {} {:?}", report.score, report.feedback);
//!
//! let generated = generate(16, true);
//! assert_eq!(generated.expose_secret().chars().count(), 16);
//! ```

mod blacklist;
mod evaluator;
mod sections;
mod types;

pub mod charset;
pub mod diagnostics;
pub mod generator;

// Public API
pub use blacklist::{blacklist, is_blacklisted};
pub use charset::{classify, CharClass};
pub use evaluator::evaluate_password_strength;
pub use evaluator::evaluate_password_strength as evaluate;
pub use generator::{generate, generate_password, generate_password_with, GeneratorConfig, RandomSource};
pub use types::{ParseStrengthError, Strength, StrengthReport};

//! Random password generation with guaranteed class coverage.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::charset::CharClass;

/// Source of randomness used by the generator.
///
/// Implemented for every [`rand::Rng`], so a seeded RNG can be passed in
/// tests and the OS generator in production.
pub trait RandomSource {
    /// Picks one character uniformly. `alphabet` must not be empty.
    fn pick(&mut self, alphabet: &[char]) -> char;

    /// Shuffles `chars` uniformly in place.
    fn shuffle(&mut self, chars: &mut [char]);
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet[self.gen_range(0..alphabet.len())]
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        SliceRandom::shuffle(chars, self);
    }
}

/// Options for password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Requested length; values below [`Self::MIN_LENGTH`] are raised to it.
    pub length: usize,
    /// Whether `!@#$%` are required and drawn from.
    pub use_special: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            use_special: true,
        }
    }
}

impl GeneratorConfig {
    pub const MIN_LENGTH: usize = 8;
    pub const DEFAULT_LENGTH: usize = 12;

    pub fn new(length: usize, use_special: bool) -> Self {
        Self {
            length,
            use_special,
        }
    }

    pub fn with_special(mut self, use_special: bool) -> Self {
        self.use_special = use_special;
        self
    }

    pub fn effective_length(&self) -> usize {
        self.length.max(Self::MIN_LENGTH)
    }

    /// Classes seeded into every password, in seeding order.
    pub fn required_classes(&self) -> Vec<CharClass> {
        let mut classes = vec![CharClass::Upper, CharClass::Lower, CharClass::Digit];
        if self.use_special {
            classes.push(CharClass::Special);
        }
        classes
    }
}

/// Generates a password using the OS random number generator.
pub fn generate_password(config: &GeneratorConfig) -> SecretString {
    let mut rng = OsRng;
    generate_password_with(&mut rng, config)
}

/// Generates a password with the default-style positional parameters.
pub fn generate(length: usize, use_special: bool) -> SecretString {
    generate_password(&GeneratorConfig::new(length, use_special))
}

/// Generates a password drawing all randomness from `rng`.
///
/// One character of each required class is seeded first, the rest is
/// filled uniformly from the combined pool, then the whole sequence is
/// shuffled so the seeded characters are not front-loaded.
pub fn generate_password_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> SecretString {
    let length = config.effective_length();

    #[cfg(feature = "tracing")]
    {
        if length != config.length {
            tracing::debug!(requested = config.length, length, "raised password length to minimum");
        }
    }

    let required = config.required_classes();
    let pool: Vec<char> = required
        .iter()
        .flat_map(|class| class.alphabet())
        .copied()
        .collect();

    let mut password_chars = Vec::with_capacity(length);
    for class in &required {
        password_chars.push(rng.pick(class.alphabet()));
    }
    while password_chars.len() < length {
        password_chars.push(rng.pick(&pool));
    }

    rng.shuffle(&mut password_chars);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, use_special = config.use_special, "password generated");

    SecretString::new(password_chars.into_iter().collect::<String>().into())
}

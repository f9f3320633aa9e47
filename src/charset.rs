//! Character classes shared by the evaluator and the generator.

pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const SPECIALS: &[char] = &['!', '@', '#', '$', '%'];

/// One of the four classes the rubric tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Upper,
    Lower,
    Special,
}

impl CharClass {
    /// Every character belonging to this class.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Special => SPECIALS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Digit => is_digit(c),
            CharClass::Upper => is_upper(c),
            CharClass::Lower => is_lower(c),
            CharClass::Special => is_special(c),
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Membership in `!@#$%` only, not the full punctuation range.
pub fn is_special(c: char) -> bool {
    SPECIALS.contains(&c)
}

/// Returns the class of `c`, or `None` for characters no rule counts.
pub fn classify(c: char) -> Option<CharClass> {
    [
        CharClass::Digit,
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Special,
    ]
    .into_iter()
    .find(|class| class.contains(c))
}

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const AMBIGUOUS: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSet {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
    Ambiguous,
}

impl CharacterSet {
    pub const fn chars(self) -> &'static str {
        match self {
            CharacterSet::Lowercase => LOWERCASE,
            CharacterSet::Uppercase => UPPERCASE,
            CharacterSet::Numbers => NUMBERS,
            CharacterSet::Symbols => SYMBOLS,
            CharacterSet::Ambiguous => AMBIGUOUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        length as f64 * (self.0.len() as f64).log2()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

// Ambiguous characters are stripped after composition, wherever they came from.
pub fn compose_alphabet(config: &GenerationConfig) -> Result<Alphabet> {
    let sets = [
        (config.include_lowercase, CharacterSet::Lowercase),
        (config.include_uppercase, CharacterSet::Uppercase),
        (config.include_numbers, CharacterSet::Numbers),
        (config.include_symbols, CharacterSet::Symbols),
    ];

    let mut chars: Vec<char> = sets
        .iter()
        .filter(|(included, _)| *included)
        .flat_map(|(_, set)| set.chars().chars())
        .collect();

    if config.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    Ok(Alphabet(chars))
}

// File: src/core/phonetic.rs
use crate::core::alphabet::DigitAlphabet;
use crate::core::types::DigitString;

/// Separates alternative pronunciations inside one dictionary field.
pub const DEFAULT_ALTERNATE_DIVIDER: &str = "||";

/// Extracts digits from a pronunciation string.
pub struct PhoneticTransliterator {
    alphabet: DigitAlphabet,
    divider: String,
}

impl PhoneticTransliterator {
    pub fn new(alphabet: DigitAlphabet, divider: &str) -> Self {
        Self {
            alphabet,
            divider: divider.to_string(),
        }
    }

    /// Spaces and `(` are dropped first, then everything from the first
    /// alternate divider on.
    pub fn clean(&self, pronunciation: &str) -> String {
        let stripped: String = pronunciation
            .chars()
            .filter(|&c| !c.is_whitespace() && c != '(')
            .collect();
        match stripped.find(self.divider.as_str()) {
            Some(end) if !self.divider.is_empty() => stripped[..end].to_string(),
            _ => stripped,
        }
    }

    /// Unknown symbols are skipped. An empty result means the pronunciation
    /// carries no usable signal.
    pub fn transliterate(&self, pronunciation: &str) -> DigitString {
        self.clean(pronunciation)
            .chars()
            .filter_map(|c| self.alphabet.digit_for(c))
            .collect()
    }
}

impl Default for PhoneticTransliterator {
    fn default() -> Self {
        Self::new(DigitAlphabet::swedish(), DEFAULT_ALTERNATE_DIVIDER)
    }
}

// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A sequence of mnemonic digits, always ASCII `0`..=`9`.
pub type DigitString = String;

/// The final word -> digit mapping. A `BTreeMap` keeps every walk over it
/// in a reproducible order.
pub type WordIndex = BTreeMap<String, WordIndexEntry>;

/// Grammatical class of a dictionary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalClass {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl GrammaticalClass {
    /// Maps the two-letter dictionary codes. Unknown or missing codes become `Other`.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("nn") => Self::Noun,
            Some("vb") => Self::Verb,
            Some("jj") => Self::Adjective,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GrammaticalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both the long names and the dictionary codes.
impl FromStr for GrammaticalClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "nn" => Ok(Self::Noun),
            "verb" | "vb" => Ok(Self::Verb),
            "adjective" | "jj" => Ok(Self::Adjective),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown grammatical class '{}'", other)),
        }
    }
}

/// One normalized dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub word: String,
    /// Empty when the dictionary has no pronunciation for the word.
    pub pronunciation: String,
    pub class: GrammaticalClass,
}

impl LexicalEntry {
    pub fn new(word: &str, pronunciation: &str, class: GrammaticalClass) -> Self {
        Self {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            class,
        }
    }

    pub fn has_pronunciation(&self) -> bool {
        !self.pronunciation.trim().is_empty()
    }
}

/// A surviving word together with its final digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordIndexEntry {
    pub word: String,
    pub digits: DigitString,
    pub class: GrammaticalClass,
}

pub fn is_digit_string(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_codes_map_to_classes() {
        assert_eq!(GrammaticalClass::from_code(Some("nn")), GrammaticalClass::Noun);
        assert_eq!(GrammaticalClass::from_code(Some("vb")), GrammaticalClass::Verb);
        assert_eq!(GrammaticalClass::from_code(Some("jj")), GrammaticalClass::Adjective);
        assert_eq!(GrammaticalClass::from_code(Some("ab")), GrammaticalClass::Other);
        assert_eq!(GrammaticalClass::from_code(None), GrammaticalClass::Other);
    }

    #[test]
    fn class_parses_names_and_codes() {
        assert_eq!("Noun".parse::<GrammaticalClass>(), Ok(GrammaticalClass::Noun));
        assert_eq!("jj".parse::<GrammaticalClass>(), Ok(GrammaticalClass::Adjective));
        assert!("remove".parse::<GrammaticalClass>().is_err());
    }

    #[test]
    fn digit_strings_are_ascii_digits_only() {
        assert!(is_digit_string("0123"));
        assert!(is_digit_string(""));
        assert!(!is_digit_string("12a"));
    }
}

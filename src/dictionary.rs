// File: src/dictionary.rs
//! Reading the Folkets XML dictionary and normalizing it into a [`Lexicon`].

use crate::core::types::{DigitString, GrammaticalClass, LexicalEntry};
use crate::errors::{MajorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Compound and stress markers that are not part of a word's identity.
const DECORATIONS: &[char] = &['|', 'ˈ', 'ˌ'];

/// A dictionary word as read, before any cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub word: String,
    pub pronunciation: Option<String>,
    pub class_code: Option<String>,
}

#[derive(Deserialize)]
struct XmlDictionary {
    #[serde(rename = "word", default)]
    words: Vec<XmlWord>,
}

#[derive(Deserialize)]
struct XmlWord {
    #[serde(rename = "@value")]
    value: String,
    #[serde(rename = "@class", default)]
    class: Option<String>,
    #[serde(rename = "phonetic", default)]
    phonetics: Vec<XmlPhonetic>,
}

#[derive(Deserialize)]
struct XmlPhonetic {
    #[serde(rename = "@value", default)]
    value: String,
}

/// Parses `<dictionary><word value=".." class=".."><phonetic value=".."/>..</word>..</dictionary>`.
/// Child elements other than `phonetic` are ignored.
pub fn parse_xml(text: &str) -> Result<Vec<RawEntry>> {
    let dictionary: XmlDictionary = quick_xml::de::from_str(text)?;
    Ok(dictionary
        .words
        .into_iter()
        .map(|w| RawEntry {
            word: w.value,
            pronunciation: w.phonetics.into_iter().next().map(|p| p.value),
            class_code: w.class,
        })
        .collect())
}

pub fn load_dictionary(path: &Path) -> Result<Vec<RawEntry>> {
    if !path.is_file() {
        return Err(MajorError::MissingInput(path.to_path_buf()));
    }
    info!(path = %path.display(), "parsing dictionary");
    let text = fs::read_to_string(path)?;
    let entries = parse_xml(&text)?;
    info!(entries = entries.len(), "dictionary parsed");
    Ok(entries)
}

/// Strips decorations. Phrases (anything with whitespace) are not words.
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || word.contains(char::is_whitespace) {
        return None;
    }
    let cleaned: String = word.chars().filter(|c| !DECORATIONS.contains(c)).collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

pub fn normalize(raw: &[RawEntry]) -> Lexicon {
    let mut lexicon = Lexicon::default();
    for entry in raw {
        if let Some(word) = normalize_word(&entry.word) {
            let pronunciation = entry.pronunciation.as_deref().unwrap_or("").trim();
            let class = GrammaticalClass::from_code(entry.class_code.as_deref());
            lexicon.insert(LexicalEntry::new(&word, pronunciation, class));
        }
    }
    info!(words = lexicon.len(), skipped = raw.len() - lexicon.len(), "dictionary normalized");
    lexicon
}

/// The set of words the index is built from, after patching.
///
/// Besides the entries themselves it remembers digit strings forced by
/// patch records and the words a patch removed, so a removal cannot be
/// undone by a later record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    entries: BTreeMap<String, LexicalEntry>,
    forced: BTreeMap<String, DigitString>,
    removed: BTreeSet<String>,
}

impl Lexicon {
    pub fn from_entries<I: IntoIterator<Item = LexicalEntry>>(entries: I) -> Self {
        let mut lexicon = Self::default();
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Later inserts for the same word replace earlier ones.
    pub fn insert(&mut self, entry: LexicalEntry) {
        self.entries.insert(entry.word.clone(), entry);
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.forced.remove(word);
        self.removed.insert(word.to_string());
        self.entries.remove(word).is_some()
    }

    pub fn force_digits(&mut self, word: &str, digits: DigitString) {
        self.forced.insert(word.to_string(), digits);
    }

    pub fn clear_forced(&mut self, word: &str) {
        self.forced.remove(word);
    }

    pub fn get(&self, word: &str) -> Option<&LexicalEntry> {
        self.entries.get(word)
    }

    pub fn forced_digits(&self, word: &str) -> Option<&str> {
        self.forced.get(word).map(String::as_str)
    }

    pub fn is_removed(&self, word: &str) -> bool {
        self.removed.contains(word)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub total: usize,
    pub with_pronunciation: usize,
}

/// Counts over the dictionary as read. A word counts as pronounced when it
/// has a `phonetic` element at all, even an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub nouns: ClassCounts,
    pub verbs: ClassCounts,
    pub adjectives: ClassCounts,
}

impl DictionaryStats {
    pub fn collect(raw: &[RawEntry]) -> Self {
        let mut stats = Self {
            total_words: raw.len(),
            ..Self::default()
        };
        for entry in raw {
            let counts = match GrammaticalClass::from_code(entry.class_code.as_deref()) {
                GrammaticalClass::Noun => &mut stats.nouns,
                GrammaticalClass::Verb => &mut stats.verbs,
                GrammaticalClass::Adjective => &mut stats.adjectives,
                GrammaticalClass::Other => continue,
            };
            counts.total += 1;
            if entry.pronunciation.is_some() {
                counts.with_pronunciation += 1;
            }
        }
        stats
    }
}

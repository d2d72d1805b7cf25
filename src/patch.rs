// File: src/patch.rs
//! Manual corrections applied to the lexicon before transliteration.

use crate::core::types::{is_digit_string, DigitString, GrammaticalClass, LexicalEntry};
use crate::dictionary::{normalize_word, Lexicon};
use crate::errors::{MajorError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const REMOVE: &str = "remove";
const FIELDS_PER_RECORD: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchAction {
    /// Delete the word. Nothing after this can bring it back.
    Remove,
    /// New pronunciation and class; digits are computed as usual.
    Replace {
        pronunciation: String,
        class: GrammaticalClass,
    },
    /// The given digits are used as is, skipping transliteration.
    Force {
        pronunciation: String,
        class: GrammaticalClass,
        digits: DigitString,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecord {
    pub word: String,
    pub action: PatchAction,
}

impl PatchRecord {
    pub fn remove(word: &str) -> Self {
        Self { word: word.to_string(), action: PatchAction::Remove }
    }

    /// Builds a record from its four fields:
    /// `word, pronunciationOrDigits, classOrRemove, explicitDigits`.
    ///
    /// The word is normalized like a dictionary word, so `snabb|tåg` patches
    /// `snabbtåg`. Phrases are rejected.
    pub fn from_fields(fields: &[&str], line: u64) -> Result<Self> {
        let malformed = |reason: String| MajorError::MalformedPatch { line, reason };

        let [word, pronunciation, class, digits] = fields else {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                FIELDS_PER_RECORD,
                fields.len()
            )));
        };
        if word.trim().is_empty() {
            return Err(malformed("empty word".to_string()));
        }
        let Some(word) = normalize_word(word) else {
            return Err(malformed(format!("'{}' is not a single word", word.trim())));
        };

        if class.trim().eq_ignore_ascii_case(REMOVE) {
            return Ok(Self::remove(&word));
        }
        let class: GrammaticalClass = class.parse().map_err(malformed)?;
        let pronunciation = pronunciation.trim().to_string();
        let digits = digits.trim();

        let action = if digits.is_empty() {
            PatchAction::Replace { pronunciation, class }
        } else if is_digit_string(digits) {
            PatchAction::Force { pronunciation, class, digits: digits.to_string() }
        } else {
            return Err(malformed(format!("'{}' is not a digit string", digits)));
        };
        Ok(Self { word, action })
    }
}

/// Applies one record and hands the lexicon back.
///
/// Fold a patch file over the lexicon with this, in file order, so that
/// later records for a word win.
pub fn apply_patch(mut lexicon: Lexicon, record: &PatchRecord) -> Lexicon {
    let word = record.word.as_str();
    if lexicon.is_removed(word) {
        debug!(word, "ignoring patch for removed word");
        return lexicon;
    }
    match &record.action {
        PatchAction::Remove => {
            if !lexicon.remove(word) {
                warn!(word, "patch removes a word that is not in the dictionary");
            }
        }
        PatchAction::Replace { pronunciation, class } => {
            lexicon.clear_forced(word);
            lexicon.insert(LexicalEntry::new(word, pronunciation, *class));
        }
        PatchAction::Force { pronunciation, class, digits } => {
            lexicon.insert(LexicalEntry::new(word, pronunciation, *class));
            lexicon.force_digits(word, digits.clone());
        }
    }
    lexicon
}

pub fn apply_all(lexicon: Lexicon, records: &[PatchRecord]) -> Lexicon {
    records.iter().fold(lexicon, apply_patch)
}

/// Reads comma separated records; `#` starts a comment line.
pub fn parse_patches<R: Read>(reader: R) -> Result<Vec<PatchRecord>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());
        let fields: Vec<&str> = row.iter().collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        records.push(PatchRecord::from_fields(&fields, line)?);
    }
    Ok(records)
}

pub fn load_patches(path: &Path) -> Result<Vec<PatchRecord>> {
    if !path.is_file() {
        return Err(MajorError::MissingInput(path.to_path_buf()));
    }
    let records = parse_patches(File::open(path)?)?;
    info!(path = %path.display(), records = records.len(), "patch file loaded");
    Ok(records)
}

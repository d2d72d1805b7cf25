// File: src/config.rs
//! Report settings: compiled defaults, overlaid by an optional JSON file,
//! overlaid by command line flags in the binary.

use crate::core::engine::TransliterationConfig;
use crate::core::phonetic::DEFAULT_ALTERNATE_DIVIDER;
use crate::core::reconcile::DEFAULT_LENGTHENING_SUFFIXES;
use crate::core::types::GrammaticalClass;
use crate::errors::{MajorError, Result};
use crate::report::{Fragments, LengthPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub class: GrammaticalClass,
    pub prefix_len: usize,
    pub include_longer: bool,
    pub alternate_divider: String,
    pub lengthening_suffixes: Vec<String>,
    pub header: Option<PathBuf>,
    pub description: Option<PathBuf>,
    pub footer: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Swedish nouns for the major system".to_string(),
            class: GrammaticalClass::Noun,
            prefix_len: 2,
            include_longer: false,
            alternate_divider: DEFAULT_ALTERNATE_DIVIDER.to_string(),
            lengthening_suffixes: DEFAULT_LENGTHENING_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            header: None,
            description: None,
            footer: None,
        }
    }
}

impl ReportConfig {
    /// Missing keys keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MajorError::MissingInput(path.to_path_buf()));
        }
        let config: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(MajorError::InvalidConfig("prefix length must be at least 1".into()));
        }
        if self.alternate_divider.is_empty() {
            return Err(MajorError::InvalidConfig("alternate divider must not be empty".into()));
        }
        Ok(())
    }

    pub fn length_policy(&self) -> LengthPolicy {
        LengthPolicy::from_flag(self.include_longer)
    }

    pub fn transliteration(&self) -> TransliterationConfig {
        TransliterationConfig {
            alternate_divider: self.alternate_divider.clone(),
            lengthening_suffixes: self.lengthening_suffixes.clone(),
            ..TransliterationConfig::default()
        }
    }

    pub fn load_fragments(&self) -> Result<Fragments> {
        let read = |path: &Option<PathBuf>| -> Result<Option<String>> {
            match path {
                Some(path) if !path.is_file() => Err(MajorError::MissingInput(path.clone())),
                Some(path) => Ok(Some(fs::read_to_string(path)?)),
                None => Ok(None),
            }
        };
        Ok(Fragments {
            header: read(&self.header)?,
            description: read(&self.description)?,
            footer: read(&self.footer)?,
        })
    }
}

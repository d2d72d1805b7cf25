// File: src/errors.rs
use std::path::PathBuf;

/// Crate-wide result type, defaulting to [`MajorError`].
pub type Result<T, E = MajorError> = std::result::Result<T, E>;

/// Everything that can abort a run.
///
/// Transliteration itself never fails: unknown symbols are skipped and
/// disagreements only show up in the accuracy counters. What remains here are
/// structural input problems and I/O.
#[derive(Debug, thiserror::Error)]
pub enum MajorError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// A patch row that cannot be applied without corrupting the index.
    #[error("malformed patch record on line {line}: {reason}")]
    MalformedPatch { line: u64, reason: String },

    #[error("invalid digit alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not parse dictionary: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("index snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

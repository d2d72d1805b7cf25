// src/lib.rs

pub mod config;
pub mod core;
pub mod dictionary;
pub mod errors;
pub mod patch;
pub mod persistence;
pub mod report;

pub use crate::core::engine::{IndexBuild, IndexEngine, TransliterationConfig};
pub use crate::errors::{MajorError, Result};

// src/core/mod.rs
pub mod alphabet;
pub mod converter;
pub mod engine;
pub mod phonetic;
pub mod reconcile;
pub mod types;

//! # tally-core
//!
//! Core types, traits, configuration, and error handling shared by the
//! Tally localization engine and its collaborators.

pub mod category;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod payload;
pub mod traits;

pub use config::shellexpand;

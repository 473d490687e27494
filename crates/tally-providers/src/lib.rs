//! # tally-providers
//!
//! Translation sources for Tally.

pub mod directory;
pub mod http;

pub use directory::DirectorySource;
pub use http::HttpTranslationSource;

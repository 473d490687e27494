//! Translation engine for Tally.
//!
//! Resolves dotted keys and category names against a merged dictionary
//! (built-in fallback overlaid with server translations), formats dates per
//! language, and tracks the session language separately from the saved
//! preference. [`service::I18nService`] ties it together.

pub mod category;
pub mod fallback;
pub mod locale;
pub mod resolver;
pub mod service;
pub mod session;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;

pub use service::{I18nContext, I18nService};
pub use session::{LanguageSessionController, SessionState};
pub use storage::{FileSessionStorage, MemorySessionStorage, SESSION_LANGUAGE_KEY};
pub use store::{CacheWindows, StoreSnapshot, TranslationStore};

//! Compiled-in dictionaries, available before (and without) any fetch.
//!
//! English is complete; the other languages carry every namespace but only
//! the most visible keys.

mod en;
mod es;
mod pt;

use std::sync::{Arc, OnceLock};
use tally_core::dictionary::TranslationDictionary;
use tally_core::language::LanguageCode;
use tally_core::payload::LanguageCatalog;

/// Raw `(dotted.key, value)` table for a language.
pub fn entries(lang: LanguageCode) -> &'static [(&'static str, &'static str)] {
    match lang {
        LanguageCode::En => en::ENTRIES,
        LanguageCode::Es => es::ENTRIES,
        LanguageCode::Pt => pt::ENTRIES,
    }
}

/// Built-in dictionary for `lang`, built once per process.
pub fn dictionary(lang: LanguageCode) -> &'static TranslationDictionary {
    shared_cell(lang)
}

/// Shared handle to the built-in dictionary for `lang`.
pub fn shared(lang: LanguageCode) -> Arc<TranslationDictionary> {
    Arc::clone(shared_cell(lang))
}

/// Languages that ship with built-in dictionaries, code to display name.
pub fn catalog() -> LanguageCatalog {
    LanguageCode::ALL
        .iter()
        .map(|lang| (lang.as_str().to_string(), lang.display_name().to_string()))
        .collect()
}

fn shared_cell(lang: LanguageCode) -> &'static Arc<TranslationDictionary> {
    static EN: OnceLock<Arc<TranslationDictionary>> = OnceLock::new();
    static ES: OnceLock<Arc<TranslationDictionary>> = OnceLock::new();
    static PT: OnceLock<Arc<TranslationDictionary>> = OnceLock::new();
    let cell = match lang {
        LanguageCode::En => &EN,
        LanguageCode::Es => &ES,
        LanguageCode::Pt => &PT,
    };
    cell.get_or_init(|| {
        Arc::new(TranslationDictionary::from_pairs(
            entries(lang).iter().copied(),
        ))
    })
}

//! Wire shapes returned by the translations API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dictionary::TranslationDictionary;

/// Body of `GET translations/{language}/`.
///
/// `stats` and `last_updated` are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationsPayload {
    pub language: String,
    pub translations: TranslationDictionary,
    #[serde(default)]
    pub stats: serde_json::Value,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Body of `GET translations/`: language code → display name.
pub type LanguageCatalog = BTreeMap<String, String>;

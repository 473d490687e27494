//! Translations read from `{dir}/{lang}.json` for offline use.
//!
//! A file holds either the full API payload or just the dictionary.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tally_core::{
    dictionary::TranslationDictionary,
    error::TallyError,
    language::LanguageCode,
    payload::{LanguageCatalog, TranslationsPayload},
    traits::TranslationSource,
};
use tracing::debug;

/// Source backed by a directory of JSON files.
pub struct DirectorySource {
    dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FileBody {
    Payload(TranslationsPayload),
    Bare(TranslationDictionary),
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, language: LanguageCode) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }
}

#[async_trait]
impl TranslationSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    /// Supported languages that have a file in the directory.
    async fn available_languages(&self) -> Result<LanguageCatalog, TallyError> {
        let mut catalog = LanguageCatalog::new();
        for lang in LanguageCode::ALL {
            if tokio::fs::try_exists(self.path_for(lang)).await? {
                catalog.insert(lang.as_str().to_string(), lang.display_name().to_string());
            }
        }
        Ok(catalog)
    }

    async fn fetch(&self, language: LanguageCode) -> Result<TranslationsPayload, TallyError> {
        let path = self.path_for(language);
        debug!("translations dir: reading {}", path.display());
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| TallyError::Fetch(format!("failed to read {}: {e}", path.display())))?;
        let body: FileBody = serde_json::from_str(&content)?;
        let payload = match body {
            FileBody::Payload(payload) => payload,
            FileBody::Bare(translations) => TranslationsPayload {
                language: language.as_str().to_string(),
                translations,
                ..Default::default()
            },
        };
        Ok(payload)
    }
}

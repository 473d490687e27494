//! Test doubles for the store and service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tally_core::dictionary::TranslationDictionary;
use tally_core::error::TallyError;
use tally_core::language::LanguageCode;
use tally_core::payload::{LanguageCatalog, TranslationsPayload};
use tally_core::traits::{ErrorReporter, SessionStorage, TranslationSource};
use tokio::sync::Notify;

/// A source with canned per-language answers. Languages with a gate block
/// until [`ScriptedSource::release`] is called.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    responses: Mutex<HashMap<LanguageCode, Result<TranslationDictionary, String>>>,
    gates: Mutex<HashMap<LanguageCode, Arc<Notify>>>,
    calls: Mutex<Vec<LanguageCode>>,
    catalog: Mutex<Option<LanguageCatalog>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, lang: LanguageCode, pairs: &[(&str, &str)]) {
        self.responses.lock().unwrap().insert(
            lang,
            Ok(TranslationDictionary::from_pairs(pairs.iter().copied())),
        );
    }

    pub(crate) fn fail(&self, lang: LanguageCode, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(lang, Err(message.to_string()));
    }

    pub(crate) fn gate(&self, lang: LanguageCode) {
        self.gates
            .lock()
            .unwrap()
            .insert(lang, Arc::new(Notify::new()));
    }

    /// Let the pending fetch for `lang` through and stop gating later ones.
    pub(crate) fn release(&self, lang: LanguageCode) {
        if let Some(gate) = self.gates.lock().unwrap().remove(&lang) {
            gate.notify_one();
        }
    }

    pub(crate) fn set_catalog(&self, catalog: LanguageCatalog) {
        *self.catalog.lock().unwrap() = Some(catalog);
    }

    pub(crate) fn calls(&self) -> Vec<LanguageCode> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, lang: LanguageCode) -> usize {
        self.calls().iter().filter(|l| **l == lang).count()
    }
}

#[async_trait]
impl TranslationSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn available_languages(&self) -> Result<LanguageCatalog, TallyError> {
        self.catalog
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TallyError::Fetch("catalog unavailable".to_string()))
    }

    async fn fetch(&self, language: LanguageCode) -> Result<TranslationsPayload, TallyError> {
        self.calls.lock().unwrap().push(language);
        let gate = self.gates.lock().unwrap().get(&language).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let response = self.responses.lock().unwrap().get(&language).cloned();
        match response {
            Some(Ok(translations)) => Ok(TranslationsPayload {
                language: language.as_str().to_string(),
                translations,
                stats: serde_json::json!({ "total_keys": 1 }),
                last_updated: Some("2026-10-01T00:00:00Z".to_string()),
            }),
            Some(Err(message)) => Err(TallyError::Fetch(message)),
            None => Err(TallyError::Fetch(format!("no script for '{language}'"))),
        }
    }
}

/// Collects reported failures.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &TallyError) {
        self.reports
            .lock()
            .unwrap()
            .push(format!("{context}: {error}"));
    }
}

/// Session storage that refuses every write.
#[derive(Default)]
pub(crate) struct ReadOnlyStorage {
    pub(crate) value: Option<String>,
}

impl SessionStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Option<String> {
        self.value.clone()
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), TallyError> {
        Err(TallyError::Storage(format!("read-only, cannot write '{key}'")))
    }

    fn remove(&self, key: &str) -> Result<(), TallyError> {
        Err(TallyError::Storage(format!("read-only, cannot remove '{key}'")))
    }
}

/// Yield to spawned tasks until `done` holds, or give up after a bounded number of turns.
pub(crate) async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..1_000 {
        if done() {
            return true;
        }
        tokio::task::yield_now().await;
    }
    done()
}

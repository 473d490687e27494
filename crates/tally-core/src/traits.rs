use crate::{
    error::TallyError,
    language::LanguageCode,
    payload::{LanguageCatalog, TranslationsPayload},
};
use async_trait::async_trait;

/// Translation source trait: where server dictionaries come from.
///
/// The HTTP API and the on-disk directory source both implement this so the
/// store can fetch without knowing the transport. Retries, timeouts, and
/// auth refresh belong to the implementation.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Languages the source can serve, code → display name.
    async fn available_languages(&self) -> Result<LanguageCatalog, TallyError>;

    /// Fetch the dictionary for one language.
    async fn fetch(&self, language: LanguageCode) -> Result<TranslationsPayload, TallyError>;
}

/// Short-lived key/value storage that survives for one session.
pub trait SessionStorage: Send + Sync {
    /// Read the value under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), TallyError>;

    /// Forget `key`.
    fn remove(&self, key: &str) -> Result<(), TallyError>;
}

/// Sink for non-fatal failures that should reach operators, not users.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &TallyError);
}

/// Reports through `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &TallyError) {
        tracing::warn!("{context}: {error}");
    }
}

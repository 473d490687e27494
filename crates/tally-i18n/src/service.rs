//! The engine as one constructed object.
//!
//! [`I18nService`] wires the session controller to the translation store and
//! binds the resolvers and formatters to the session language. Whoever owns
//! the UI tree creates one, hands out references, and disposes it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tally_core::category::CategoryEntity;
use tally_core::error::TallyError;
use tally_core::language::LanguageCode;
use tally_core::payload::LanguageCatalog;
use tally_core::traits::{ErrorReporter, SessionStorage, TranslationSource};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::category;
use crate::fallback;
use crate::locale::{self, DateInput, DateOptions};
use crate::resolver;
use crate::session::{LanguageSessionController, SessionState};
use crate::store::{CacheWindows, StoreSnapshot, TranslationStore};

/// Translation engine for one session.
pub struct I18nService {
    session: LanguageSessionController,
    store: TranslationStore,
}

impl I18nService {
    /// Build the engine. The session language comes from `storage` when it
    /// holds one, else `initial_language`. Fetching starts immediately when
    /// authenticated.
    pub fn create(
        initial_language: LanguageCode,
        is_authenticated: bool,
        source: Arc<dyn TranslationSource>,
        storage: Arc<dyn SessionStorage>,
        reporter: Arc<dyn ErrorReporter>,
        windows: CacheWindows,
    ) -> Self {
        let session = LanguageSessionController::new(initial_language, is_authenticated, storage);
        let language = session.session_language();
        info!(
            "i18n: starting in '{language}' via {} (authenticated: {is_authenticated})",
            source.name()
        );
        let store = TranslationStore::new(language, is_authenticated, source, reporter, windows);
        Self { session, store }
    }

    /// Tear the engine down. Fetches still in flight finish into nothing.
    pub fn dispose(self) {
        self.store.set_authenticated(false);
        info!("i18n: disposed");
    }

    pub fn language(&self) -> LanguageCode {
        self.session.session_language()
    }

    pub fn persisted_language(&self) -> LanguageCode {
        self.session.persisted_language()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Watch session transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    /// Switch the display language. Returns at once; the fetch runs in the background.
    pub fn set_session_language(&self, language: LanguageCode) {
        self.session.set_session_language(language);
        self.store.select_language(language);
    }

    /// Drop the session override and return to the persisted language.
    pub fn reset_session_language(&self) {
        self.session.reset_session_language();
        self.store.select_language(self.session.session_language());
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        if self.session.set_authenticated(authenticated) {
            info!("i18n: authenticated = {authenticated}");
        }
        self.store.set_authenticated(authenticated);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.store.snapshot().is_loading
    }

    pub fn is_fetching(&self) -> bool {
        self.store.snapshot().is_fetching
    }

    /// Refetch the session language regardless of freshness.
    pub fn refetch(&self) {
        self.store.refetch();
    }

    /// Wait for in-flight fetches to land.
    pub async fn settle(&self) {
        self.store.settle().await;
    }

    /// Translate `key`. Misses return `fallback`, else the key.
    pub fn t(&self, key: &str, fallback: Option<&str>) -> String {
        resolver::t(&self.store.dictionary(), key, fallback)
    }

    /// Translate `key` and fill `{name}` placeholders.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        resolver::interpolate(&self.t(key, None), vars)
    }

    pub fn t_category(&self, name: &str, categories: Option<&[CategoryEntity]>) -> String {
        category::t_category(&self.store.dictionary(), self.language(), name, categories)
    }

    pub fn t_category_description(
        &self,
        description: &str,
        category_name: &str,
        categories: Option<&[CategoryEntity]>,
    ) -> String {
        category::t_category_description(
            &self.store.dictionary(),
            self.language(),
            description,
            category_name,
            categories,
        )
    }

    pub fn format_date(&self, value: impl Into<DateInput>, options: &DateOptions) -> String {
        locale::format_date(value, self.language(), options)
    }

    pub fn format_short_date(&self, value: impl Into<DateInput>) -> String {
        locale::format_short_date(value, self.language())
    }

    pub fn format_long_date(&self, value: impl Into<DateInput>) -> String {
        locale::format_long_date(value, self.language())
    }

    pub fn format_date_time(&self, value: impl Into<DateInput>) -> String {
        locale::format_date_time(value, self.language())
    }

    pub fn format_relative_date(&self, value: impl Into<DateInput>) -> String {
        locale::format_relative_date(value, self.language())
    }

    pub fn format_relative_date_at(&self, value: impl Into<DateInput>, now: DateTime<Utc>) -> String {
        locale::format_relative_date_at(value, self.language(), now)
    }

    /// Languages the user can pick from.
    ///
    /// Asks the source when authenticated; otherwise, or when the source
    /// fails or returns nothing, the built-in catalog.
    pub async fn available_languages(&self) -> LanguageCatalog {
        if !self.is_authenticated() {
            return fallback::catalog();
        }
        let source = self.store.source();
        match source.available_languages().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => fallback::catalog(),
            Err(e) => {
                warn!("i18n: language catalog from {} failed: {e}", source.name());
                fallback::catalog()
            }
        }
    }
}

/// Slot the service is installed into by whoever owns the UI tree.
#[derive(Default)]
pub struct I18nContext {
    service: Option<I18nService>,
}

impl I18nContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `service`, returning the one it replaces.
    pub fn install(&mut self, service: I18nService) -> Option<I18nService> {
        self.service.replace(service)
    }

    /// The installed service. Using the engine without one is a setup bug.
    pub fn require(&self) -> Result<&I18nService, TallyError> {
        self.service.as_ref().ok_or_else(|| {
            TallyError::Context("translation service used before it was installed".to_string())
        })
    }

    /// Remove and dispose the installed service.
    pub fn shutdown(&mut self) {
        if let Some(service) = self.service.take() {
            service.dispose();
        }
    }
}

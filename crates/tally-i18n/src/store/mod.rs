//! Per-language translation cache and the merged dictionary readers consult.
//!
//! All state lives in one `watch` channel: readers borrow it synchronously,
//! writers replace it under `send_modify`, so nobody observes a half-applied
//! update. Fetches run as spawned tasks and commit through [`Inner::finish`],
//! which drops any response whose language is no longer selected.


use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tally_core::dictionary::TranslationDictionary;
use tally_core::error::TallyError;
use tally_core::language::LanguageCode;
use tally_core::payload::TranslationsPayload;
use tally_core::traits::{ErrorReporter, TranslationSource};
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::fallback;

/// How long fetched dictionaries stay fresh and how long they are kept at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheWindows {
    pub fresh: Duration,
    pub retain: Duration,
}

impl Default for CacheWindows {
    fn default() -> Self {
        Self {
            fresh: Duration::from_secs(300),
            retain: Duration::from_secs(600),
        }
    }
}

/// Opaque metadata from the last committed payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadMeta {
    pub stats: serde_json::Value,
    pub last_updated: Option<String>,
}

/// What readers see.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// The selected session language.
    pub language: LanguageCode,
    /// The merged dictionary currently served.
    pub dictionary: Arc<TranslationDictionary>,
    /// Language `dictionary` belongs to. Lags `language` while a placeholder is shown.
    pub dictionary_language: LanguageCode,
    /// Whether `dictionary` includes server translations.
    pub server_backed: bool,
    /// No server dictionary for the selected language has loaded yet and only
    /// fallbacks are shown.
    pub is_loading: bool,
    /// A fetch for the selected language is in flight.
    pub is_fetching: bool,
    pub meta: Option<Arc<PayloadMeta>>,
}

struct CacheEntry {
    dictionary: Arc<TranslationDictionary>,
    meta: Arc<PayloadMeta>,
    fetched_at: Instant,
}

struct StoreState {
    view: StoreSnapshot,
    cache: HashMap<LanguageCode, CacheEntry>,
    /// Language → auth epoch the fetch was started in.
    in_flight: HashMap<LanguageCode, u64>,
    authenticated: bool,
    epoch: u64,
}

impl StoreState {
    fn show_fallback(&mut self, language: LanguageCode) {
        self.view.dictionary = fallback::shared(language);
        self.view.dictionary_language = language;
        self.view.server_backed = false;
        self.view.meta = None;
    }

    fn show_cached(&mut self, language: LanguageCode) {
        if let Some(entry) = self.cache.get(&language) {
            self.view.dictionary = Arc::clone(&entry.dictionary);
            self.view.dictionary_language = language;
            self.view.server_backed = true;
            self.view.meta = Some(Arc::clone(&entry.meta));
        }
    }

    fn evict_expired(&mut self, retain: Duration) {
        let now = Instant::now();
        self.cache
            .retain(|_, entry| now.duration_since(entry.fetched_at) < retain);
    }

    fn refresh_flags(&mut self) {
        let language = self.view.language;
        self.view.is_fetching = self.in_flight.contains_key(&language);
        self.view.is_loading = self.view.is_fetching && !self.view.server_backed;
    }
}

struct Inner {
    state: watch::Sender<StoreState>,
    source: Arc<dyn TranslationSource>,
    reporter: Arc<dyn ErrorReporter>,
    windows: CacheWindows,
}

/// Holds the merged dictionary for the session language.
#[derive(Clone)]
pub struct TranslationStore {
    inner: Arc<Inner>,
}

impl TranslationStore {
    /// Create a store serving `language`. Starts a fetch right away when authenticated.
    pub fn new(
        language: LanguageCode,
        authenticated: bool,
        source: Arc<dyn TranslationSource>,
        reporter: Arc<dyn ErrorReporter>,
        windows: CacheWindows,
    ) -> Self {
        let view = StoreSnapshot {
            language,
            dictionary: fallback::shared(language),
            dictionary_language: language,
            server_backed: false,
            is_loading: false,
            is_fetching: false,
            meta: None,
        };
        let (state, _) = watch::channel(StoreState {
            view,
            cache: HashMap::new(),
            in_flight: HashMap::new(),
            authenticated,
            epoch: 0,
        });
        let store = Self {
            inner: Arc::new(Inner {
                state,
                source,
                reporter,
                windows,
            }),
        };
        store.select_language(language);
        store
    }

    /// Switch the served language. Never waits on the network.
    pub fn select_language(&self, language: LanguageCode) {
        let windows = self.inner.windows;
        let mut start: Option<u64> = None;
        self.inner.state.send_modify(|state| {
            state.view.language = language;
            if !state.authenticated {
                state.show_fallback(language);
                state.refresh_flags();
                return;
            }

            state.evict_expired(windows.retain);
            let cached_age = state
                .cache
                .get(&language)
                .map(|entry| entry.fetched_at.elapsed());
            let needs_fetch = match cached_age {
                Some(age) => {
                    state.show_cached(language);
                    age >= windows.fresh
                }
                None => {
                    // Keep a previous server dictionary on screen until this
                    // language arrives; with nothing server-backed, show fallbacks.
                    if !state.view.server_backed {
                        state.show_fallback(language);
                    }
                    true
                }
            };

            if needs_fetch && !state.in_flight.contains_key(&language) {
                state.in_flight.insert(language, state.epoch);
                start = Some(state.epoch);
            }
            state.refresh_flags();
        });

        if let Some(epoch) = start {
            debug!("translations: fetching '{language}'");
            self.inner.spawn_fetch(language, epoch);
        }
    }

    /// Turn network-backed fetching on or off.
    ///
    /// Going unauthenticated drops every cached server dictionary.
    pub fn set_authenticated(&self, authenticated: bool) {
        let mut changed = false;
        let mut language = LanguageCode::DEFAULT;
        self.inner.state.send_modify(|state| {
            changed = state.authenticated != authenticated;
            language = state.view.language;
            if !changed {
                return;
            }
            state.authenticated = authenticated;
            if !authenticated {
                state.epoch += 1;
                state.cache.clear();
                state.in_flight.clear();
                state.show_fallback(language);
                state.refresh_flags();
            }
        });
        if changed && authenticated {
            self.select_language(language);
        }
    }

    /// Refetch the selected language regardless of freshness.
    pub fn refetch(&self) {
        let mut start: Option<(LanguageCode, u64)> = None;
        self.inner.state.send_modify(|state| {
            let language = state.view.language;
            if !state.authenticated || state.in_flight.contains_key(&language) {
                return;
            }
            state.in_flight.insert(language, state.epoch);
            start = Some((language, state.epoch));
            state.refresh_flags();
        });
        if let Some((language, epoch)) = start {
            self.inner.spawn_fetch(language, epoch);
        }
    }

    /// Current reader view.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.state.borrow().view.clone()
    }

    /// Current merged dictionary.
    pub fn dictionary(&self) -> Arc<TranslationDictionary> {
        Arc::clone(&self.inner.state.borrow().view.dictionary)
    }

    /// Selected language.
    pub fn language(&self) -> LanguageCode {
        self.inner.state.borrow().view.language
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().authenticated
    }

    /// Languages with a server dictionary in cache.
    pub fn cached_languages(&self) -> Vec<LanguageCode> {
        let mut langs: Vec<_> = self.inner.state.borrow().cache.keys().copied().collect();
        langs.sort();
        langs
    }

    /// The translation source behind this store.
    pub fn source(&self) -> Arc<dyn TranslationSource> {
        Arc::clone(&self.inner.source)
    }

    /// Wait until no fetch is in flight.
    pub async fn settle(&self) {
        let mut rx = self.inner.state.subscribe();
        let _ = rx.wait_for(|state| state.in_flight.is_empty()).await;
    }
}

impl Inner {
    fn spawn_fetch(self: &Arc<Self>, language: LanguageCode, epoch: u64) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                let err = TallyError::Fetch("no async runtime to fetch translations".to_string());
                self.finish(language, epoch, Err(err));
                return;
            }
        };
        let inner = Arc::clone(self);
        handle.spawn(async move {
            let result = inner.source.fetch(language).await;
            inner.finish(language, epoch, result);
        });
    }

    /// Commit a fetch result if it still belongs to the selected language.
    fn finish(
        &self,
        language: LanguageCode,
        epoch: u64,
        result: Result<TranslationsPayload, TallyError>,
    ) {
        let mut failure: Option<TallyError> = None;
        self.state.send_modify(|state| {
            if state.epoch != epoch {
                debug!("translations: dropping '{language}' response from a previous session");
                return;
            }
            if state.in_flight.get(&language) == Some(&epoch) {
                state.in_flight.remove(&language);
            }

            match result {
                Ok(payload) => {
                    if payload.language != language.as_str() {
                        debug!(
                            "translations: payload labelled '{}' stored as '{language}'",
                            payload.language
                        );
                    }
                    let merged = fallback::dictionary(language).overlay(&payload.translations);
                    state.cache.insert(
                        language,
                        CacheEntry {
                            dictionary: Arc::new(merged),
                            meta: Arc::new(PayloadMeta {
                                stats: payload.stats,
                                last_updated: payload.last_updated,
                            }),
                            fetched_at: Instant::now(),
                        },
                    );
                    if state.view.language == language {
                        state.show_cached(language);
                        info!("translations: '{language}' loaded");
                    } else {
                        debug!(
                            "translations: '{language}' arrived after switching to '{}', cached only",
                            state.view.language
                        );
                    }
                }
                Err(e) => {
                    // The placeholder only covers the fetch. A failed first load
                    // for the selected language drops to its own fallback; a
                    // failed refresh keeps the dictionary it already had.
                    if state.view.language == language && state.view.dictionary_language != language
                    {
                        state.show_fallback(language);
                    }
                    failure = Some(e);
                }
            }
            state.refresh_flags();
        });

        if let Some(e) = failure {
            self.reporter
                .report(&format!("failed to fetch '{language}' translations"), &e);
        }
    }
}

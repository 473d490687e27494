//! Saved language preference vs. the language the session is viewed in.

use std::sync::Arc;

use tally_core::language::LanguageCode;
use tally_core::traits::SessionStorage;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::storage::SESSION_LANGUAGE_KEY;

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// The user's saved preference. Only changed by an explicit save elsewhere.
    pub persisted_language: LanguageCode,
    /// The language currently used for display.
    pub session_language: LanguageCode,
    /// Network-backed translations are allowed.
    pub is_authenticated: bool,
}

/// Owns the persisted/session language split.
///
/// Every transition is synchronous. Storage failures are logged and never
/// undo the in-memory change.
pub struct LanguageSessionController {
    state: watch::Sender<SessionState>,
    storage: Arc<dyn SessionStorage>,
}

impl LanguageSessionController {
    /// Start from the stored session language, else from `persisted`.
    pub fn new(
        persisted: LanguageCode,
        is_authenticated: bool,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        let session_language = match storage.read(SESSION_LANGUAGE_KEY) {
            Some(raw) => match LanguageCode::parse(&raw) {
                Some(code) => code,
                None => {
                    debug!("session: ignoring stored language '{raw}'");
                    persisted
                }
            },
            None => persisted,
        };
        let (state, _) = watch::channel(SessionState {
            persisted_language: persisted,
            session_language,
            is_authenticated,
        });
        Self { state, storage }
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn persisted_language(&self) -> LanguageCode {
        self.state.borrow().persisted_language
    }

    pub fn session_language(&self) -> LanguageCode {
        self.state.borrow().session_language
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    /// Switch the session language and remember it for the session.
    ///
    /// Returns whether the language actually changed.
    pub fn set_session_language(&self, language: LanguageCode) -> bool {
        let changed = self.state.send_if_modified(|state| {
            if state.session_language == language {
                return false;
            }
            state.session_language = language;
            true
        });
        if changed {
            info!("session: language set to '{language}'");
        }
        if let Err(e) = self.storage.write(SESSION_LANGUAGE_KEY, language.as_str()) {
            warn!("session: could not store language '{language}': {e}");
        }
        changed
    }

    /// Forget the session override and go back to the persisted language.
    pub fn reset_session_language(&self) -> bool {
        if let Err(e) = self.storage.remove(SESSION_LANGUAGE_KEY) {
            warn!("session: could not clear stored language: {e}");
        }
        let persisted = self.persisted_language();
        self.state.send_if_modified(|state| {
            if state.session_language == persisted {
                return false;
            }
            state.session_language = persisted;
            true
        })
    }

    pub fn set_authenticated(&self, authenticated: bool) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_authenticated == authenticated {
                return false;
            }
            state.is_authenticated = authenticated;
            true
        })
    }

    /// Watch for transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

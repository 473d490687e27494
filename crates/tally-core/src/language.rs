//! Supported display languages.
//!
//! The set is closed: every code maps to exactly one locale identifier and
//! one compiled-in fallback dictionary. Anything outside the set resolves to
//! [`LanguageCode::DEFAULT`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Pt,
}

impl LanguageCode {
    /// The effective default when nothing else is known.
    pub const DEFAULT: LanguageCode = LanguageCode::En;

    /// Every supported language, default first.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Es, LanguageCode::Pt];

    /// Parse a code, tolerating case and region suffixes (`pt-BR`, `es_MX`).
    /// Returns `None` for unsupported languages.
    pub fn parse(code: &str) -> Option<Self> {
        let base = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match base.as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    /// Parse a code, falling back to [`LanguageCode::DEFAULT`].
    pub fn parse_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or(Self::DEFAULT)
    }

    /// Short wire code (`en`, `es`, `pt`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Pt => "pt",
        }
    }

    /// BCP 47 locale identifier used for formatting.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Es => "es-ES",
            Self::Pt => "pt-BR",
        }
    }

    /// Name of the language in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Pt => "Português",
        }
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use thiserror::Error;

/// Top-level error type for Tally.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Error retrieving translations or the language catalog.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Session storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// The engine was used without an installed service.
    #[error("context error: {0}")]
    Context(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

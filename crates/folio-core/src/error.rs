//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Interaction handlers never fail; a missing element is skipped silently.
/// Errors only surface while loading configuration or binding to the host page.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration JSON could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The host page rejected a binding call (listener, observer, timer)
    #[error("Binding error: {0}")]
    Binding(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

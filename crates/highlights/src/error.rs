use thiserror::Error;

/// Result type for highlight operations
pub type Result<T> = std::result::Result<T, HighlightsError>;

/// Errors raised at the fallible edges of the crate.
///
/// Digest parsing itself never fails; malformed entries are dropped and
/// reported through [`crate::ParseReport`] instead.
#[derive(Error, Debug)]
pub enum HighlightsError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sparkline payload was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file was not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HighlightsError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

use thiserror::Error;

/// Error types that can occur while driving the explorer core.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Negative collection size handed to the narrative stepper
    #[error("Invalid selection size: {0}")]
    InvalidSize(i64),
    /// Malformed builder, session, or configuration input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Failure reported by a dataset source
    #[error("Dataset error: {0}")]
    DataError(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// TOML configuration parse errors
    #[error("TOML parse error: {0}")]
    TomlError(String),
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<toml::de::Error> for ExplorerError {
    fn from(err: toml::de::Error) -> Self {
        ExplorerError::TomlError(err.to_string())
    }
}

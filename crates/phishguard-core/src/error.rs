//! Error types for PhishGuard

/// Result type alias using PhishGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for PhishGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model training errors (fatal at startup)
    #[error("training error: {0}")]
    Training(String),

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new training error
    pub fn training(msg: impl Into<String>) -> Self {
        Self::Training(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

use thiserror::Error;

/// Unified error type for docs-publish operations
#[derive(Error, Debug)]
pub enum DocsPublishError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Malformed version file: {0}")]
    MalformedVersionFile(String),

    #[error("Site generator error: {0}")]
    Generator(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in docs-publish
pub type Result<T> = std::result::Result<T, DocsPublishError>;

impl DocsPublishError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsPublishError::Config(msg.into())
    }

    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        DocsPublishError::InvalidVersionFormat(msg.into())
    }

    /// Create a malformed-version-file error with context
    pub fn malformed_version_file(msg: impl Into<String>) -> Self {
        DocsPublishError::MalformedVersionFile(msg.into())
    }

    /// Create a site generator error with context
    pub fn generator(msg: impl Into<String>) -> Self {
        DocsPublishError::Generator(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        DocsPublishError::Publish(msg.into())
    }
}

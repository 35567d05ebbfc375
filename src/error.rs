//! Error types for the LLM gateway.

/// Top-level error type for the gateway.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors produced while extracting case data from an email body.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// Caller-supplied body is blank after trimming. Recoverable by
    /// resubmitting valid input.
    #[error("Email body cannot be empty")]
    EmptyBody,

    /// Unexpected fault inside the extraction backend. The cause is logged
    /// server-side; clients only ever see a generic message.
    #[error("LLM processing failed: {0}")]
    Internal(String),
}

/// Result type alias for the gateway.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the chunker.
//!
//! The segmentation engine itself never fails; these errors come from the
//! layers around it (reading input, loading configuration, writing output).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Failed to read the extracted text file.
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or is inconsistent.
    #[error("Invalid configuration in {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    /// Noise token is empty or carries surrounding whitespace.
    #[error("Invalid noise token: '{0}'. Tokens must be non-empty and trimmed")]
    InvalidNoiseToken(String),

    /// Requested article does not exist in the segmented output.
    #[error("Article {0} not found")]
    ArticleNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;

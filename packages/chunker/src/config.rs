//! Configuration constants and validation functions for the chunker.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};

/// Navigation labels left in the text by the Legifrance PDF layout.
///
/// They appear alone on a line next to each article and carry no legal content.
pub const DEFAULT_NOISE_TOKENS: &[&str] = &[
    "Legif.",
    "Legif",
    "Plan",
    "Jp.Judi.",
    "Jp.Judi",
    "Jp.Admin.",
    "Jp.Admin",
    "Juricaf",
];

/// Source label attached to every indexed article.
pub const DEFAULT_SOURCE: &str = "Code pénal français";

/// Document type attached to every indexed article.
pub const DEFAULT_DOCUMENT_TYPE: &str = "article";

/// Page separator emitted by `pdftotext` between pages.
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Text wrap width for terminal previews.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Runtime configuration for segmentation and index hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkerConfig {
    /// Lines equal to one of these tokens are removed from article bodies.
    pub noise_tokens: Vec<String>,

    /// Value of the `source` metadata key.
    pub source: String,

    /// Value of the `type` metadata key.
    pub document_type: String,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            noise_tokens: DEFAULT_NOISE_TOKENS.iter().map(|t| (*t).to_string()).collect(),
            source: DEFAULT_SOURCE.to_string(),
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
        }
    }
}

impl ChunkerConfig {
    /// Load configuration from a YAML file.
    ///
    /// Missing keys fall back to their defaults, so a file containing only
    /// `noise_tokens:` is enough to replace the token list.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChunkerError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self =
            serde_yaml_ng::from_str(&content).map_err(|e| ChunkerError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            noise_tokens = config.noise_tokens.len(),
            "Loaded chunker configuration"
        );
        Ok(config)
    }

    /// Check every noise token.
    pub fn validate(&self) -> Result<()> {
        self.noise_tokens
            .iter()
            .try_for_each(|token| validate_noise_token(token))
    }
}

/// Validate a noise token.
///
/// Tokens are compared against trimmed lines, so a token with surrounding
/// whitespace could never match.
///
/// # Examples
/// ```
/// use codepenal_chunker::config::validate_noise_token;
///
/// assert!(validate_noise_token("Legif.").is_ok());
/// assert!(validate_noise_token(" Plan").is_err());
/// assert!(validate_noise_token("").is_err());
/// ```
pub fn validate_noise_token(token: &str) -> Result<()> {
    if token.is_empty() || token.trim() != token {
        Err(ChunkerError::InvalidNoiseToken(token.to_string()))
    } else {
        Ok(())
    }
}

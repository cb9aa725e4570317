//! YAML and JSON writers for segmented article files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::types::ArticleChunk;

/// Serialization format of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Top-level document written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkDocument<'a> {
    pub source: String,
    pub generated_at: String,
    pub article_count: usize,
    pub articles: &'a [ArticleChunk],
}

impl<'a> ChunkDocument<'a> {
    /// Create a document stamped with the current time.
    #[must_use]
    pub fn new(source: impl Into<String>, articles: &'a [ArticleChunk]) -> Self {
        Self::with_timestamp(source, articles, Utc::now())
    }

    /// Create a document with an explicit generation time.
    #[must_use]
    pub fn with_timestamp(
        source: impl Into<String>,
        articles: &'a [ArticleChunk],
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source: source.into(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            article_count: articles.len(),
            articles,
        }
    }
}

/// Generate YAML string from a document.
pub fn generate_yaml(document: &ChunkDocument<'_>) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(document)?;

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Generate pretty-printed JSON string from a document.
pub fn generate_json(document: &ChunkDocument<'_>) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Render a document in the requested format.
pub fn render(document: &ChunkDocument<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => generate_yaml(document),
        OutputFormat::Json => generate_json(document),
    }
}

/// Save a document to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
///
/// # Returns
/// Path to the saved file
pub fn save_output(
    document: &ChunkDocument<'_>,
    output_file: &Path,
    format: OutputFormat,
) -> Result<PathBuf> {
    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = output_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("articles.{}", format.extension()));
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    let content = render(document, format)?;

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    tracing::debug!(path = %output_file.display(), "Saved article file");
    Ok(output_file.to_path_buf())
}

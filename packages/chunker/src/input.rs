//! Reading the text produced by the page extraction collaborator.
//!
//! The extractor writes one UTF-8 file per document, pages separated by form
//! feeds (the `pdftotext` convention).

use std::fs;
use std::path::Path;

use crate::error::{ChunkerError, Result};
use crate::normalize::lines_from_text;

/// Read an extracted text file and return its normalized lines.
///
/// # Arguments
/// * `path` - Path to the UTF-8 text dump
///
/// # Returns
/// Trimmed, non-blank lines in reading order
pub fn read_extracted_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| ChunkerError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = lines_from_text(&text);
    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        lines = lines.len(),
        "Read extracted text"
    );
    Ok(lines)
}

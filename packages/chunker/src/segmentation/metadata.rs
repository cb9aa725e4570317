//! Metadata extraction for article chunks.

use std::sync::LazyLock;

use regex::Regex;

use super::boundary::ArticleHeading;
use crate::normalize::compose;
use crate::types::{ArticleChunk, HierarchyContext, LegalReference, ReferenceKind};

/// Law citation: "LOI n°2019-222 du 23 mars 2019".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"LOI\s+n°([0-9]{4}-[0-9]+)\s+du\s+([^-]+)").expect("valid regex")
});

/// Ordinance citation: "Ordonnance n°2000-916 du 19 septembre 2000".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ORDINANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Ordonnance\s+n°([0-9]{4}-[0-9]+)\s+du\s+([^-]+)").expect("valid regex")
});

/// Everything known about an article once its heading line is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadata {
    pub article_number: String,
    pub hierarchy: HierarchyContext,
    pub legal_references: Vec<LegalReference>,
}

impl ArticleMetadata {
    /// Attach the cleaned body.
    #[must_use]
    pub fn into_chunk(self, body: String) -> ArticleChunk {
        ArticleChunk {
            article_number: self.article_number,
            hierarchy: self.hierarchy,
            legal_references: self.legal_references,
            body,
        }
    }
}

/// Build the metadata of an article from its heading line.
///
/// Only the heading line is searched for citations; amendments mentioned
/// further down the body are not captured.
#[must_use]
pub fn extract_metadata(
    heading: &ArticleHeading<'_>,
    heading_line: &str,
    hierarchy: HierarchyContext,
) -> ArticleMetadata {
    ArticleMetadata {
        article_number: heading.number.to_string(),
        hierarchy,
        legal_references: extract_legal_references(heading_line),
    }
}

/// Find the law and ordinance citations in a line.
///
/// At most one citation of each kind is returned, the law first.
#[must_use]
pub fn extract_legal_references(line: &str) -> Vec<LegalReference> {
    [
        (ReferenceKind::Law, &*LAW_PATTERN),
        (ReferenceKind::Ordinance, &*ORDINANCE_PATTERN),
    ]
    .into_iter()
    .filter_map(|(kind, pattern)| {
        let caps = pattern.captures(line)?;
        let (Some(number), Some(date)) = (caps.get(1), caps.get(2)) else {
            return None;
        };
        Some(LegalReference::new(kind, number.as_str(), compose(date.as_str().trim())))
    })
    .collect()
}

//! Hand-off to the indexing collaborator.
//!
//! The embedding and vector store side expects plain `(text, metadata)`
//! pairs where metadata is a flat string map. Keys are only present when the
//! corresponding heading or citation was found.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::config::ChunkerConfig;
use crate::types::{ArticleChunk, HierarchyLevel, ReferenceKind};

/// One document ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexRecord {
    pub body: String,
    pub metadata: BTreeMap<String, String>,
}

/// Flatten a chunk into an index record.
#[must_use]
pub fn to_index_record(chunk: &ArticleChunk, config: &ChunkerConfig) -> IndexRecord {
    let mut metadata = BTreeMap::new();
    metadata.insert("article_numero".to_string(), chunk.article_number.clone());
    metadata.insert("type".to_string(), config.document_type.clone());
    metadata.insert("source".to_string(), config.source.clone());

    for level in HierarchyLevel::ALL {
        if let Some(marker) = chunk.hierarchy.get(level) {
            let prefix = level.metadata_prefix();
            metadata.insert(format!("{prefix}_numero"), marker.number.clone());
            metadata.insert(format!("{prefix}_titre"), marker.label.clone());
        }
    }

    for kind in [ReferenceKind::Law, ReferenceKind::Ordinance] {
        if let Some(reference) = chunk.reference(kind) {
            let prefix = kind.metadata_prefix();
            metadata.insert(format!("{prefix}_numero"), reference.number.clone());
            metadata.insert(format!("{prefix}_date"), reference.date.clone());
        }
    }

    IndexRecord {
        body: chunk.body.clone(),
        metadata,
    }
}

/// Flatten a chunk sequence, preserving order.
#[must_use]
pub fn to_index_records(chunks: &[ArticleChunk], config: &ChunkerConfig) -> Vec<IndexRecord> {
    chunks
        .iter()
        .map(|chunk| to_index_record(chunk, config))
        .collect()
}

/// Keep the first chunk for each article number.
///
/// The extracted text repeats some article numbers (tables of contents,
/// cross-reference pages); the first occurrence is the one in reading order.
#[must_use]
pub fn dedup_by_article_number(chunks: Vec<ArticleChunk>) -> Vec<ArticleChunk> {
    let before = chunks.len();
    let mut seen = HashSet::new();
    let kept: Vec<ArticleChunk> = chunks
        .into_iter()
        .filter(|chunk| seen.insert(chunk.article_number.clone()))
        .collect();

    if kept.len() < before {
        tracing::debug!(
            removed = before - kept.len(),
            kept = kept.len(),
            "Removed duplicate article numbers"
        );
    }
    kept
}

//! Code pénal chunker - Split the French penal code into indexed articles.
//!
//! This crate turns the flat text extracted from the penal code PDF into one
//! chunk per article, each annotated with the livre / titre / chapitre /
//! section headings in force and with the amending laws and ordinances cited
//! on its heading line. The chunks are meant to be embedded and stored by a
//! retrieval pipeline.
//!
//! # Example
//!
//! ```
//! use codepenal_chunker::segmentation::SegmentEngine;
//!
//! let chunks = SegmentEngine::default().segment([
//!     "Livre Ier : Dispositions générales",
//!     "131-7 LOI n°2019-222 du 23 mars 2019",
//!     "Legif.",
//! ]);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].article_number, "131-7");
//! assert_eq!(chunks[0].hierarchy.book.as_ref().unwrap().number, "Ier");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Defaults, configuration file and validation
//! - [`types`]: Core data types (ArticleChunk, HierarchyContext, LegalReference, ...)
//! - [`error`]: Error types and Result alias
//! - [`normalize`]: Line normalization of extracted page text
//! - [`input`]: Reading extracted text files
//! - [`segmentation`]: Marker and article recognition, chunk assembly
//! - [`index`]: Flat records for the indexing pipeline, deduplication
//! - [`output`]: YAML and JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod normalize;
pub mod output;
pub mod segmentation;
pub mod types;

// Re-export commonly used items
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use index::{dedup_by_article_number, to_index_record, to_index_records, IndexRecord};
pub use segmentation::{SegmentEngine, Segmentation};
pub use types::{
    ArticleChunk, HierarchyContext, HierarchyLevel, LegalReference, ReferenceKind,
    StructuralMarker,
};

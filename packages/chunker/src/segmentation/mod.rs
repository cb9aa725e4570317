//! Article segmentation for the penal code text.
//!
//! This module splits the extracted text into articles numbered in the
//! penal code convention (e.g., "131-7"), each annotated with the
//! livre / titre / chapitre / section headings in force and with the
//! amending laws cited on its heading line.

mod boundary;
mod engine;
mod markers;
mod metadata;
mod noise;

pub use boundary::{recognize_article, ArticleHeading};
pub use engine::{SegmentEngine, SegmentStats, Segmentation};
pub use markers::{create_code_penal_markers, MarkerRegistry, MarkerSpec};
pub use metadata::{extract_legal_references, extract_metadata, ArticleMetadata};
pub use noise::NoiseFilter;

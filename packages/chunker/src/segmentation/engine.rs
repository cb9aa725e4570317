//! Segment engine that walks the extracted lines and assembles article chunks.

use super::boundary::recognize_article;
use super::markers::{create_code_penal_markers, MarkerRegistry};
use super::metadata::{extract_metadata, ArticleMetadata};
use super::noise::NoiseFilter;
use crate::config::ChunkerConfig;
use crate::normalize::normalize_line;
use crate::types::{ArticleChunk, HierarchyContext};

/// Counters collected during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    /// Non-blank lines seen.
    pub lines: usize,

    /// Structural marker lines applied to the hierarchy.
    pub markers: usize,

    /// Article boundaries recognized.
    pub boundaries: usize,

    /// Lines before the first article, discarded.
    pub preamble_lines: usize,

    /// Articles whose body was empty after noise removal.
    pub dropped: usize,
}

/// Result of a scan: the chunks in input order and the scan counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub chunks: Vec<ArticleChunk>,
    pub stats: SegmentStats,
}

/// Article being collected.
struct OpenChunk {
    metadata: ArticleMetadata,
    lines: Vec<String>,
}

/// Assembler state between two lines.
enum AssemblerState {
    /// Before the first article.
    Idle,
    Collecting(OpenChunk),
}

/// Ordered output of finalized, non-empty chunks.
struct ChunkSequence<'f> {
    noise: &'f NoiseFilter,
    chunks: Vec<ArticleChunk>,
    dropped: usize,
}

impl<'f> ChunkSequence<'f> {
    fn new(noise: &'f NoiseFilter) -> Self {
        Self {
            noise,
            chunks: Vec::new(),
            dropped: 0,
        }
    }

    /// Clean an open chunk and append it, unless nothing is left of its body.
    fn finalize(&mut self, open: OpenChunk) {
        let body = self.noise.clean(&open.lines);
        if body.is_empty() {
            tracing::debug!(
                article = %open.metadata.article_number,
                "Dropping article with empty body"
            );
            self.dropped += 1;
            return;
        }
        self.chunks.push(open.metadata.into_chunk(body));
    }
}

/// Engine splitting the penal code text into article chunks.
///
/// The engine holds no state between calls: each scan owns its own
/// hierarchy context, so the same input always yields the same chunks.
#[derive(Debug, Clone)]
pub struct SegmentEngine {
    markers: MarkerRegistry,
    noise: NoiseFilter,
}

impl SegmentEngine {
    /// Create a new segment engine.
    #[must_use]
    pub fn new(markers: MarkerRegistry, noise: NoiseFilter) -> Self {
        Self { markers, noise }
    }

    /// Create an engine using the configured noise tokens.
    #[must_use]
    pub fn from_config(config: &ChunkerConfig) -> Self {
        Self::new(
            create_code_penal_markers(),
            NoiseFilter::new(config.noise_tokens.iter().cloned()),
        )
    }

    /// Split lines into article chunks.
    pub fn segment<I, S>(&self, lines: I) -> Vec<ArticleChunk>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(lines).chunks
    }

    /// Split lines into article chunks and report scan counters.
    ///
    /// Per line, in order: blank lines are skipped; a structural marker
    /// updates the hierarchy and is never part of a body; an article
    /// boundary closes the open chunk and opens a new one seeded with the
    /// rest of the heading line; anything else extends the open chunk, or
    /// is discarded as preamble when no article has started yet.
    pub fn run<I, S>(&self, lines: I) -> Segmentation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = SegmentStats::default();
        let mut hierarchy = HierarchyContext::new();
        let mut sequence = ChunkSequence::new(&self.noise);
        let mut state = AssemblerState::Idle;

        for raw in lines {
            let Some(line) = normalize_line(raw.as_ref()) else {
                continue;
            };
            stats.lines += 1;

            if let Some(marker) = self.markers.recognize(&line) {
                tracing::debug!(
                    level = ?marker.level,
                    number = %marker.number,
                    label = %marker.label,
                    "Structural marker"
                );
                stats.markers += 1;
                hierarchy.update(marker);
                continue;
            }

            if let Some(heading) = recognize_article(&line) {
                stats.boundaries += 1;
                let metadata = extract_metadata(&heading, &line, hierarchy.snapshot());
                let open = OpenChunk {
                    metadata,
                    lines: vec![heading.remainder.to_string()],
                };
                if let AssemblerState::Collecting(previous) =
                    std::mem::replace(&mut state, AssemblerState::Collecting(open))
                {
                    sequence.finalize(previous);
                }
                continue;
            }

            match &mut state {
                AssemblerState::Collecting(open) => open.lines.push(line),
                AssemblerState::Idle => stats.preamble_lines += 1,
            }
        }

        if let AssemblerState::Collecting(last) = state {
            sequence.finalize(last);
        }

        stats.dropped = sequence.dropped;
        tracing::info!(
            lines = stats.lines,
            markers = stats.markers,
            boundaries = stats.boundaries,
            chunks = sequence.chunks.len(),
            dropped = stats.dropped,
            "Segmentation complete"
        );

        Segmentation {
            chunks: sequence.chunks,
            stats,
        }
    }
}

impl Default for SegmentEngine {
    fn default() -> Self {
        Self::new(create_code_penal_markers(), NoiseFilter::default())
    }
}

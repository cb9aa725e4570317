//! Structural marker recognition (Livre / Titre / Chapitre / Section headings).

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::compose;
use crate::types::{HierarchyLevel, StructuralMarker};

// Heading grammar: "<Keyword> <roman id>[suffix] : <label>", label ends at a
// line break or a dash. Keyword and numerals are case-insensitive.
fn heading_pattern(level: HierarchyLevel) -> String {
    format!(r"(?i){}\s+([IVX]+\w*)\s*:\s*([^-\n]+)", level.keyword())
}

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOOK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&heading_pattern(HierarchyLevel::Book)).expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&heading_pattern(HierarchyLevel::Title)).expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&heading_pattern(HierarchyLevel::Chapter)).expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&heading_pattern(HierarchyLevel::Section)).expect("valid regex")
});

/// Recognizer for the heading of one hierarchy level.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSpec {
    pub level: HierarchyLevel,
    pattern: &'static Regex,
}

impl MarkerSpec {
    /// Create the recognizer for a level.
    #[must_use]
    pub fn new(level: HierarchyLevel) -> Self {
        let pattern: &'static Regex = match level {
            HierarchyLevel::Book => &*BOOK_PATTERN,
            HierarchyLevel::Title => &*TITLE_PATTERN,
            HierarchyLevel::Chapter => &*CHAPTER_PATTERN,
            HierarchyLevel::Section => &*SECTION_PATTERN,
        };
        Self { level, pattern }
    }

    /// Match a line against this level's heading grammar.
    #[must_use]
    pub fn recognize(&self, line: &str) -> Option<StructuralMarker> {
        let caps = self.pattern.captures(line)?;
        let (Some(number), Some(label)) = (caps.get(1), caps.get(2)) else {
            return None;
        };
        Some(StructuralMarker::new(
            self.level,
            number.as_str(),
            compose(label.as_str().trim()),
        ))
    }
}

/// Ordered set of heading recognizers.
///
/// A line is assumed to declare at most one level; when several patterns
/// match, the first registered recognizer wins.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    specs: Vec<MarkerSpec>,
}

impl MarkerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Register a recognizer at the lowest priority.
    pub fn register(&mut self, spec: MarkerSpec) {
        self.specs.push(spec);
    }

    /// Classify a line as a structural marker.
    #[must_use]
    pub fn recognize(&self, line: &str) -> Option<StructuralMarker> {
        self.specs.iter().find_map(|spec| spec.recognize(line))
    }

}

/// Create the marker registry for the penal code.
///
/// Priority follows the nesting of the code:
///
/// ```text
/// Livre
/// └── Titre
///     └── Chapitre
///         └── Section
///             └── articles (111-1, 131-7, ...)
/// ```
#[must_use]
pub fn create_code_penal_markers() -> MarkerRegistry {
    let mut registry = MarkerRegistry::new();
    for level in HierarchyLevel::ALL {
        registry.register(MarkerSpec::new(level));
    }
    registry
}

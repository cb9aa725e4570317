//! Core data types for the chunker.
//!
//! These types describe a segmented penal code: the four hierarchy levels,
//! the headings that open them, the amendment citations found on article
//! headings, and the article chunks themselves.

use serde::{Deserialize, Serialize};

/// Levels of the penal code hierarchy, from outermost to innermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    /// Livre.
    Book,

    /// Titre.
    Title,

    /// Chapitre.
    Chapter,

    /// Section.
    Section,
}

impl HierarchyLevel {
    /// All levels in recognition priority order.
    pub const ALL: [Self; 4] = [Self::Book, Self::Title, Self::Chapter, Self::Section];

    /// French heading word introducing this level.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Book => "Livre",
            Self::Title => "Titre",
            Self::Chapter => "Chapitre",
            Self::Section => "Section",
        }
    }

    /// Prefix used for the flat metadata keys (`livre_numero`, `livre_titre`, ...).
    #[must_use]
    pub fn metadata_prefix(&self) -> &'static str {
        match self {
            Self::Book => "livre",
            Self::Title => "titre",
            Self::Chapter => "chapitre",
            Self::Section => "section",
        }
    }
}

/// A heading line declaring a new book, title, chapter or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralMarker {
    pub level: HierarchyLevel,

    /// Roman or alphanumeric identifier (e.g., "Ier", "II", "IIbis").
    pub number: String,

    /// Free-text label following the colon.
    pub label: String,
}

impl StructuralMarker {
    #[must_use]
    pub fn new(level: HierarchyLevel, number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            level,
            number: number.into(),
            label: label.into(),
        }
    }
}

/// Most recent marker seen for each hierarchy level.
///
/// Levels are independent: recognizing a new book leaves the current title,
/// chapter and section untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<StructuralMarker>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<StructuralMarker>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<StructuralMarker>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<StructuralMarker>,
}

impl HierarchyContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a marker, overwriting only the slot for its level.
    pub fn update(&mut self, marker: StructuralMarker) {
        let slot = match marker.level {
            HierarchyLevel::Book => &mut self.book,
            HierarchyLevel::Title => &mut self.title,
            HierarchyLevel::Chapter => &mut self.chapter,
            HierarchyLevel::Section => &mut self.section,
        };
        *slot = Some(marker);
    }

    /// Owned copy of all four slots.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Marker currently held for a level.
    #[must_use]
    pub fn get(&self, level: HierarchyLevel) -> Option<&StructuralMarker> {
        match level {
            HierarchyLevel::Book => self.book.as_ref(),
            HierarchyLevel::Title => self.title.as_ref(),
            HierarchyLevel::Chapter => self.chapter.as_ref(),
            HierarchyLevel::Section => self.section.as_ref(),
        }
    }

    /// Iterate over the present markers, outermost first.
    pub fn markers(&self) -> impl Iterator<Item = &StructuralMarker> {
        HierarchyLevel::ALL
            .into_iter()
            .filter_map(move |level| self.get(level))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers().next().is_none()
    }
}

/// Kind of amending text cited on an article heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// LOI n°...
    Law,

    /// Ordonnance n°...
    Ordinance,
}

impl ReferenceKind {
    /// Prefix used for the flat metadata keys (`loi_numero`, `ordonnance_date`, ...).
    #[must_use]
    pub fn metadata_prefix(&self) -> &'static str {
        match self {
            Self::Law => "loi",
            Self::Ordinance => "ordonnance",
        }
    }
}

/// Citation of an amending law or ordinance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    pub kind: ReferenceKind,

    /// Year and sequence number (e.g., "2019-222").
    pub number: String,

    /// Date phrase as written (e.g., "23 mars 2019").
    pub date: String,
}

impl LegalReference {
    #[must_use]
    pub fn new(kind: ReferenceKind, number: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            kind,
            number: number.into(),
            date: date.into(),
        }
    }
}

/// A single numbered article with its place in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleChunk {
    /// Article number (e.g., "131-7", "711-1-1").
    pub article_number: String,

    /// Hierarchy as it stood when the article heading was recognized.
    #[serde(default, skip_serializing_if = "HierarchyContext::is_empty")]
    pub hierarchy: HierarchyContext,

    /// Citations found on the heading line, laws before ordinances.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_references: Vec<LegalReference>,

    /// Cleaned article text, one source line per line.
    pub body: String,
}

impl ArticleChunk {
    /// First citation of the given kind.
    #[must_use]
    pub fn reference(&self, kind: ReferenceKind) -> Option<&LegalReference> {
        self.legal_references.iter().find(|r| r.kind == kind)
    }
}

//! Article boundary recognition.
//!
//! Only the penal code numbering convention is accepted: three digits, a
//! dash, one or more digits, an optional second dash-separated number and an
//! optional single uppercase letter, followed by whitespace. Headings in any
//! other shape stay in the preceding article's body.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3}-[0-9]+(?:-[0-9]+)?(?:\s*[A-Z])?)\s+").expect("valid regex")
});

/// First line of an article, split into its number and the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleHeading<'a> {
    /// Article number (e.g., "226-28").
    pub number: &'a str,

    /// Text after the number and its separating whitespace.
    pub remainder: &'a str,
}

/// Classify a line as the start of a new article.
///
/// # Examples
/// ```
/// use codepenal_chunker::segmentation::recognize_article;
///
/// let heading = recognize_article("131-7 LOI n°2019-222 du 23 mars 2019").unwrap();
/// assert_eq!(heading.number, "131-7");
/// assert_eq!(heading.remainder, "LOI n°2019-222 du 23 mars 2019");
/// assert!(recognize_article("Article 131-7").is_none());
/// ```
#[must_use]
pub fn recognize_article(line: &str) -> Option<ArticleHeading<'_>> {
    let caps = ARTICLE_PATTERN.captures(line)?;
    let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
        return None;
    };
    Some(ArticleHeading {
        number: number.as_str(),
        remainder: &line[whole.end()..],
    })
}

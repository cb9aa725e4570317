//! Line normalization for extracted page text.
//!
//! The extraction collaborator hands over page text; pages are joined with a
//! line break (page breaks need not coincide with line breaks), every line is
//! trimmed, and blank lines are dropped. Line content is otherwise kept as
//! extracted, so article bodies stay verbatim.

use unicode_normalization::UnicodeNormalization;

use crate::config::PAGE_SEPARATOR;

/// Normalize a single line.
///
/// Returns `None` for lines that are blank once trimmed.
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// NFC-compose a metadata value.
///
/// PDF extraction may emit decomposed accents ("e" + U+0301); composing
/// heading labels and citation dates keeps them comparable with hand-typed
/// strings. Article bodies are never passed through here.
#[must_use]
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize an ordered sequence of raw lines.
pub fn normalize_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines.into_iter().filter_map(normalize_line).collect()
}

/// Join extracted pages into one stream and normalize its lines.
pub fn lines_from_pages<S: AsRef<str>>(pages: &[S]) -> Vec<String> {
    let joined = pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    normalize_lines(joined.lines())
}

/// Split a text dump into pages on form feeds, then normalize.
pub fn lines_from_text(text: &str) -> Vec<String> {
    let pages: Vec<&str> = text.split(PAGE_SEPARATOR).collect();
    lines_from_pages(&pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_line_trims() {
        assert_eq!(normalize_line("  131-7 texte \t"), Some("131-7 texte".to_string()));
        assert_eq!(normalize_line("   "), None);
        assert_eq!(normalize_line(""), None);
    }

    #[test]
    fn test_normalize_line_keeps_decomposed_accents() {
        let decomposed = "ge\u{301}ne\u{301}rales";
        assert_eq!(normalize_line(decomposed), Some(decomposed.to_string()));
    }

    #[test]
    fn test_compose_accents() {
        assert_eq!(compose("ge\u{301}ne\u{301}rales"), "générales");
        assert_eq!(compose("déjà composé"), "déjà composé");
    }

    #[test]
    fn test_normalize_lines_drops_blanks() {
        let lines = normalize_lines(["a", "", "  ", " b "]);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_lines_from_pages_joins_with_break() {
        let pages = ["111-1 Les infractions\nsont classées", "suivant leur gravité"];
        assert_eq!(
            lines_from_pages(&pages),
            vec!["111-1 Les infractions", "sont classées", "suivant leur gravité"]
        );
    }

    #[test]
    fn test_lines_from_text_splits_form_feeds() {
        let text = "Livre Ier : Dispositions générales\n\u{000C}111-1 texte\n";
        assert_eq!(
            lines_from_text(text),
            vec!["Livre Ier : Dispositions générales", "111-1 texte"]
        );
    }
}

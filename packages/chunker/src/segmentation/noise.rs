//! Removal of navigation labels from article bodies.

use std::collections::HashSet;

use crate::config::DEFAULT_NOISE_TOKENS;

/// Filter dropping lines that consist solely of a navigation token.
///
/// Matching is on the whole trimmed line; a token embedded in a sentence is
/// kept.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    tokens: HashSet<String>,
}

impl NoiseFilter {
    /// Create a filter for the given tokens.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a line is navigation noise.
    #[must_use]
    pub fn is_noise(&self, line: &str) -> bool {
        self.tokens.contains(line.trim())
    }

    /// Join the accumulated lines of a chunk, dropping blank and noise lines.
    #[must_use]
    pub fn clean<S: AsRef<str>>(&self, lines: &[S]) -> String {
        lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty() && !self.is_noise(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_TOKENS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_token_removed() {
        let filter = NoiseFilter::default();
        let body = filter.clean(&["Première phrase.", "Legif.", "Seconde phrase."]);
        assert_eq!(body, "Première phrase.\nSeconde phrase.");
    }

    #[test]
    fn test_embedded_token_preserved() {
        let filter = NoiseFilter::default();
        let body = filter.clean(&["Voir Legif. pour plus d'infos"]);
        assert_eq!(body, "Voir Legif. pour plus d'infos");
    }

    #[test]
    fn test_all_default_tokens() {
        let filter = NoiseFilter::default();
        for token in DEFAULT_NOISE_TOKENS {
            assert!(filter.is_noise(token), "{token} should be noise");
        }
        assert!(filter.is_noise("  Plan  "));
        assert!(!filter.is_noise("plan"));
        assert!(!filter.is_noise("Legif.."));
    }

    #[test]
    fn test_only_noise_gives_empty_body() {
        let filter = NoiseFilter::default();
        assert_eq!(filter.clean(&["Legif.", "Plan", "", "Juricaf"]), "");
    }

    #[test]
    fn test_custom_tokens() {
        let filter = NoiseFilter::new(["Sommaire"]);
        assert_eq!(filter.clean(&["Sommaire", "Plan"]), "Plan");
    }
}

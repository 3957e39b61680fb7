//! Substring matching primitives
//!
//! Phrases are expected to be lowercase already; only the text is folded.

use std::collections::HashSet;

/// Returns true if any phrase occurs in `text`, ignoring case
pub fn has_any<S: AsRef<str>>(text: &str, phrases: &[S]) -> bool {
    TextMatcher::new(text).has_any(phrases)
}

/// Number of distinct phrases from `phrases` that occur in `text`
pub fn count_any<S: AsRef<str>>(text: &str, phrases: &[S]) -> usize {
    TextMatcher::new(text).count_any(phrases)
}

/// Lowercases a text once and answers repeated phrase queries against it
#[derive(Debug, Clone)]
pub struct TextMatcher {
    lowered: String,
}

impl TextMatcher {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    /// The case-folded text
    pub fn text(&self) -> &str {
        &self.lowered
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.lowered.contains(phrase)
    }

    pub fn has_any<S: AsRef<str>>(&self, phrases: &[S]) -> bool {
        phrases.iter().any(|p| self.contains(p.as_ref()))
    }

    pub fn count_any<S: AsRef<str>>(&self, phrases: &[S]) -> usize {
        self.count_distinct(&[phrases])
    }

    /// Distinct-phrase count across several lists; a phrase listed twice counts once
    pub fn count_distinct<S: AsRef<str>>(&self, lists: &[&[S]]) -> usize {
        lists
            .iter()
            .flat_map(|list| list.iter())
            .map(|p| p.as_ref())
            .filter(|p| self.contains(p))
            .collect::<HashSet<&str>>()
            .len()
    }
}

//! Quote extraction
//!
//! Picks the most sentiment-dense sentence of a segment as the supporting
//! quote for its flags.

use super::types::MAX_QUOTE_CHARS;
use crate::lexicon::{Lexicon, LexiconCategory, TextMatcher};

const SENTIMENT_CATEGORIES: [LexiconCategory; 4] = [
    LexiconCategory::StrongBullish,
    LexiconCategory::Bullish,
    LexiconCategory::StrongBearish,
    LexiconCategory::Bearish,
];

const PHRASE_POINTS: usize = 10;
const LENGTH_BONUS: usize = 5;
const LENGTH_BONUS_MIN_CHARS: usize = 20;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split into sentence-like chunks
///
/// A chunk is a run of non-terminators followed by any run of terminators,
/// which stay attached. Terminators before the first chunk are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_terminators = false;

    for (i, c) in text.char_indices() {
        let terminator = is_terminator(c);
        match start {
            None if terminator => {}
            None => {
                start = Some(i);
                in_terminators = false;
            }
            Some(s) if !terminator && in_terminators => {
                chunks.push(&text[s..i]);
                start = Some(i);
                in_terminators = false;
            }
            Some(_) if terminator => in_terminators = true,
            Some(_) => {}
        }
    }

    if let Some(s) = start {
        chunks.push(&text[s..]);
    }

    chunks
}

fn chunk_score(lexicon: &Lexicon, chunk: &str) -> usize {
    let matcher = TextMatcher::new(chunk);
    let phrases = lexicon.count_across(&matcher, &SENTIMENT_CATEGORIES);
    let bonus = if chunk.chars().count() > LENGTH_BONUS_MIN_CHARS {
        LENGTH_BONUS
    } else {
        0
    };
    phrases * PHRASE_POINTS + bonus
}

/// Most sentiment-dense sentence, trimmed and cut to 110 characters
///
/// Ties go to the earliest chunk. Whitespace-only chunks are skipped; if
/// nothing is left the whole text is used.
pub fn extract_quote(lexicon: &Lexicon, text: &str) -> String {
    let mut best: Option<(&str, usize)> = None;

    for chunk in split_sentences(text) {
        if chunk.trim().is_empty() {
            continue;
        }
        let score = chunk_score(lexicon, chunk);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((chunk, score));
        }
    }

    let chosen = best.map_or(text, |(chunk, _)| chunk);
    chosen.trim().chars().take(MAX_QUOTE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str) -> String {
        extract_quote(&Lexicon::standard(), text)
    }

    #[test]
    fn test_split_keeps_terminators() {
        assert_eq!(
            split_sentences("One. Two! Three?"),
            vec!["One.", " Two!", " Three?"]
        );
    }

    #[test]
    fn test_split_repeated_terminators_stay_together() {
        assert_eq!(split_sentences("Wait... what?!"), vec!["Wait...", " what?!"]);
    }

    #[test]
    fn test_split_drops_leading_terminators() {
        assert_eq!(split_sentences("..Hello"), vec!["Hello"]);
        assert!(split_sentences("?!.").is_empty());
    }

    #[test]
    fn test_split_without_terminator() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_picks_densest_sentence() {
        let text = "Thanks for joining us today. We delivered record growth and robust demand. Next question.";
        assert_eq!(quote(text), "We delivered record growth and robust demand.");
    }

    #[test]
    fn test_earliest_wins_ties() {
        let text = "Growth was solid overall. Progress was healthy overall.";
        assert_eq!(quote(text), "Growth was solid overall.");
    }

    #[test]
    fn test_length_bonus_breaks_zero_phrase_ties() {
        // neither chunk has phrases; only the second is longer than 20 chars
        assert_eq!(quote("Okay. Let us move to the next slide."), "Let us move to the next slide.");
    }

    #[test]
    fn test_truncates_to_limit() {
        let text = "x".repeat(300);
        assert_eq!(quote(&text).chars().count(), MAX_QUOTE_CHARS);
    }

    #[test]
    fn test_truncation_is_char_safe() {
        let text = "é".repeat(200);
        let q = quote(&text);
        assert_eq!(q.chars().count(), MAX_QUOTE_CHARS);
    }

    #[test]
    fn test_whitespace_and_terminator_only_text() {
        assert_eq!(quote("   "), "");
        assert_eq!(quote("!!!"), "!!!");
    }
}

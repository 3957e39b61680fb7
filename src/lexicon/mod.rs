//! Lexicon store
//!
//! Fixed category to phrase-list tables used by every scoring stage. The
//! standard table is built once per process and shared read-only; alternative
//! tables can be loaded from TOML and injected into the analyzer.

mod matcher;
mod table;
mod types;

pub use matcher::{count_any, has_any, TextMatcher};
pub use table::HEDGING_TERMS;
pub use types::{LexiconCategory, LexiconError};

use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, LazyLock};

static STANDARD: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::builtin()));

/// Category to phrase-list table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    strong_bullish: Vec<String>,
    bullish: Vec<String>,
    bearish: Vec<String>,
    strong_bearish: Vec<String>,
    guidance: Vec<String>,
    beat: Vec<String>,
    miss: Vec<String>,
    eps: Vec<String>,
    revenue: Vec<String>,
    margin: Vec<String>,
    churn: Vec<String>,
    ai: Vec<String>,
    macro_: Vec<String>,
    capex: Vec<String>,
    fcf: Vec<String>,
}

/// On-disk shape; categories left out keep their standard phrases
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    strong_bullish: Option<Vec<String>>,
    bullish: Option<Vec<String>>,
    bearish: Option<Vec<String>>,
    strong_bearish: Option<Vec<String>>,
    guidance: Option<Vec<String>>,
    beat: Option<Vec<String>>,
    miss: Option<Vec<String>>,
    eps: Option<Vec<String>>,
    revenue: Option<Vec<String>>,
    margin: Option<Vec<String>>,
    churn: Option<Vec<String>>,
    ai: Option<Vec<String>>,
    #[serde(rename = "macro")]
    macro_: Option<Vec<String>>,
    capex: Option<Vec<String>>,
    fcf: Option<Vec<String>>,
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

impl Lexicon {
    /// Shared handle to the standard table
    pub fn standard() -> Arc<Lexicon> {
        Arc::clone(&STANDARD)
    }

    fn builtin() -> Self {
        Self {
            strong_bullish: owned(table::STRONG_BULLISH),
            bullish: owned(table::BULLISH),
            bearish: owned(table::BEARISH),
            strong_bearish: owned(table::STRONG_BEARISH),
            guidance: owned(table::GUIDANCE),
            beat: owned(table::BEAT),
            miss: owned(table::MISS),
            eps: owned(table::EPS),
            revenue: owned(table::REVENUE),
            margin: owned(table::MARGIN),
            churn: owned(table::CHURN),
            ai: owned(table::AI),
            macro_: owned(table::MACRO),
            capex: owned(table::CAPEX),
            fcf: owned(table::FCF),
        }
    }

    /// Parse a lexicon from TOML
    ///
    /// Phrases are trimmed and lowercased. Missing categories fall back to the
    /// standard lists.
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(content)?;
        let mut lexicon = Self::builtin();

        let overrides = [
            (LexiconCategory::StrongBullish, file.strong_bullish),
            (LexiconCategory::Bullish, file.bullish),
            (LexiconCategory::Bearish, file.bearish),
            (LexiconCategory::StrongBearish, file.strong_bearish),
            (LexiconCategory::Guidance, file.guidance),
            (LexiconCategory::Beat, file.beat),
            (LexiconCategory::Miss, file.miss),
            (LexiconCategory::Eps, file.eps),
            (LexiconCategory::Revenue, file.revenue),
            (LexiconCategory::Margin, file.margin),
            (LexiconCategory::Churn, file.churn),
            (LexiconCategory::Ai, file.ai),
            (LexiconCategory::Macro, file.macro_),
            (LexiconCategory::Capex, file.capex),
            (LexiconCategory::Fcf, file.fcf),
        ];

        for (category, phrases) in overrides {
            let Some(phrases) = phrases else { continue };
            let normalized = phrases
                .iter()
                .map(|p| p.trim().to_lowercase())
                .collect::<Vec<_>>();
            if normalized.iter().any(String::is_empty) {
                return Err(LexiconError::EmptyPhrase(category.key()));
            }
            *lexicon.slot_mut(category) = normalized;
        }

        Ok(lexicon)
    }

    /// Load a lexicon from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Phrases of one category
    pub fn phrases(&self, category: LexiconCategory) -> &[String] {
        match category {
            LexiconCategory::StrongBullish => &self.strong_bullish,
            LexiconCategory::Bullish => &self.bullish,
            LexiconCategory::Bearish => &self.bearish,
            LexiconCategory::StrongBearish => &self.strong_bearish,
            LexiconCategory::Guidance => &self.guidance,
            LexiconCategory::Beat => &self.beat,
            LexiconCategory::Miss => &self.miss,
            LexiconCategory::Eps => &self.eps,
            LexiconCategory::Revenue => &self.revenue,
            LexiconCategory::Margin => &self.margin,
            LexiconCategory::Churn => &self.churn,
            LexiconCategory::Ai => &self.ai,
            LexiconCategory::Macro => &self.macro_,
            LexiconCategory::Capex => &self.capex,
            LexiconCategory::Fcf => &self.fcf,
        }
    }

    fn slot_mut(&mut self, category: LexiconCategory) -> &mut Vec<String> {
        match category {
            LexiconCategory::StrongBullish => &mut self.strong_bullish,
            LexiconCategory::Bullish => &mut self.bullish,
            LexiconCategory::Bearish => &mut self.bearish,
            LexiconCategory::StrongBearish => &mut self.strong_bearish,
            LexiconCategory::Guidance => &mut self.guidance,
            LexiconCategory::Beat => &mut self.beat,
            LexiconCategory::Miss => &mut self.miss,
            LexiconCategory::Eps => &mut self.eps,
            LexiconCategory::Revenue => &mut self.revenue,
            LexiconCategory::Margin => &mut self.margin,
            LexiconCategory::Churn => &mut self.churn,
            LexiconCategory::Ai => &mut self.ai,
            LexiconCategory::Macro => &mut self.macro_,
            LexiconCategory::Capex => &mut self.capex,
            LexiconCategory::Fcf => &mut self.fcf,
        }
    }

    /// True if any phrase of `category` occurs in the matcher's text
    pub fn hits(&self, matcher: &TextMatcher, category: LexiconCategory) -> bool {
        matcher.has_any(self.phrases(category))
    }

    /// Distinct phrases of `category` found in the matcher's text
    pub fn count(&self, matcher: &TextMatcher, category: LexiconCategory) -> usize {
        matcher.count_any(self.phrases(category))
    }

    /// Distinct phrases across several categories, each phrase counted once
    pub fn count_across(&self, matcher: &TextMatcher, categories: &[LexiconCategory]) -> usize {
        let lists: Vec<&[String]> = categories.iter().map(|c| self.phrases(*c)).collect();
        matcher.count_distinct(&lists)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

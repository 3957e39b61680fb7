//! Lexicon types

use thiserror::Error;

/// Errors raised while loading an alternative lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Lexicon file could not be read
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    /// Lexicon file is not valid TOML for the expected shape
    #[error("Invalid lexicon file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A category contains a blank phrase, which would match every text
    #[error("Empty phrase in category {0}")]
    EmptyPhrase(&'static str),
}

/// Semantic bucket of the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconCategory {
    StrongBullish,
    Bullish,
    Bearish,
    StrongBearish,
    Guidance,
    Beat,
    Miss,
    Eps,
    Revenue,
    Margin,
    Churn,
    Ai,
    Macro,
    Capex,
    Fcf,
}

impl LexiconCategory {
    /// Every category, in table order
    pub const ALL: [LexiconCategory; 15] = [
        Self::StrongBullish,
        Self::Bullish,
        Self::Bearish,
        Self::StrongBearish,
        Self::Guidance,
        Self::Beat,
        Self::Miss,
        Self::Eps,
        Self::Revenue,
        Self::Margin,
        Self::Churn,
        Self::Ai,
        Self::Macro,
        Self::Capex,
        Self::Fcf,
    ];

    /// Key used in lexicon files
    pub fn key(self) -> &'static str {
        match self {
            Self::StrongBullish => "strong_bullish",
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::StrongBearish => "strong_bearish",
            Self::Guidance => "guidance",
            Self::Beat => "beat",
            Self::Miss => "miss",
            Self::Eps => "eps",
            Self::Revenue => "revenue",
            Self::Margin => "margin",
            Self::Churn => "churn",
            Self::Ai => "ai",
            Self::Macro => "macro",
            Self::Capex => "capex",
            Self::Fcf => "fcf",
        }
    }
}

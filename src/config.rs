//! Configuration types for earnings-signal

use crate::lexicon::Lexicon;
use crate::session::DEFAULT_CONTEXT_CHARS;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Rule engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Alternative lexicon file; the standard table is used when unset
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Characters of transcript history passed to the live analysis source
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,
}

fn default_context_chars() -> usize {
    DEFAULT_CONTEXT_CHARS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }
}

impl EngineConfig {
    /// Lexicon selected by this configuration
    pub fn lexicon(&self) -> anyhow::Result<Arc<Lexicon>> {
        match &self.lexicon_path {
            Some(path) => {
                let lexicon = Lexicon::load(path)?;
                tracing::info!(path = %path.display(), "Loaded custom lexicon");
                Ok(Arc::new(lexicon))
            }
            None => Ok(Lexicon::standard()),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

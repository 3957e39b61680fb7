//! Provider types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of a live provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider could not be reached or refused the request
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
    /// Provider answered with something that is not the expected JSON record
    #[error("Malformed provider payload: {0}")]
    Malformed(String),
    /// Provider record parsed but a field is outside its contract
    #[error("Provider field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Where a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Returned by the live provider
    Live,
    /// Substituted locally
    Fallback,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

/// A value tagged with its origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            source: DataSource::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

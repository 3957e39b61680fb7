//! Lenient parsing of provider payloads
//!
//! Chat-model providers tend to wrap JSON in Markdown fences or surround it
//! with prose. The payload is accepted if either the fence-stripped text or
//! its outermost `{...}` span deserializes.

use super::ProviderError;
use serde::de::DeserializeOwned;

fn strip_fences(raw: &str) -> String {
    let mut text = raw.to_string();
    for fence in ["```json", "```JSON", "```Json", "```"] {
        text = text.replace(fence, "");
    }
    text.trim().to_string()
}

fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse a provider payload into `T`
pub fn parse_json_payload<T: DeserializeOwned>(raw: &str) -> Result<T, ProviderError> {
    let cleaned = strip_fences(raw);

    match serde_json::from_str(&cleaned) {
        Ok(value) => Ok(value),
        Err(direct) => {
            let Some(object) = outer_object(&cleaned) else {
                return Err(ProviderError::Malformed(direct.to_string()));
            };
            serde_json::from_str(object).map_err(|e| ProviderError::Malformed(e.to_string()))
        }
    }
}

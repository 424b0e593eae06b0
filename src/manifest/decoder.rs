//! Manifest decoding
//!
//! The contents API returns file bodies as base64 with embedded line breaks.
//! Decoding goes base64 -> UTF-8 text -> YAML document; any failure along the
//! way is a `Decode` error the form layer recovers from.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_yaml::Value;
use tracing::debug;

use crate::error::DispatchError;

/// Decode a base64-encoded manifest into a parsed YAML document.
///
/// Empty content is not an error: it decodes to an empty document (`Null`),
/// which downstream extraction treats as "no inputs".
pub fn decode(raw_content: &str) -> Result<Value, DispatchError> {
    if raw_content.trim().is_empty() {
        return Ok(Value::Null);
    }

    // The API wraps base64 at 60 columns; the engine rejects raw whitespace.
    let compact: String = raw_content.split_whitespace().collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| DispatchError::Decode(format!("invalid base64 content: {}", e)))?;

    let text =
        String::from_utf8(bytes).map_err(|e| DispatchError::Decode(format!("manifest is not valid UTF-8: {}", e)))?;

    debug!(bytes = text.len(), "decoded workflow manifest");

    serde_yaml::from_str(&text).map_err(|e| DispatchError::Decode(format!("invalid YAML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> String {
        STANDARD.encode(text)
    }

    #[test]
    fn empty_content_is_an_empty_document() {
        assert_eq!(decode("").unwrap(), Value::Null);
        assert_eq!(decode("  \n ").unwrap(), Value::Null);
    }

    #[test]
    fn decodes_base64_yaml() {
        let doc = decode(&encode("name: CI\non:\n  workflow_dispatch: {}\n")).unwrap();
        assert_eq!(doc.get("name").and_then(Value::as_str), Some("CI"));
    }

    #[test]
    fn tolerates_line_breaks_in_the_payload() {
        let encoded = encode("name: CI\n");
        let wrapped = format!("{}\n{}", &encoded[..4], &encoded[4..]);
        let doc = decode(&wrapped).unwrap();
        assert_eq!(doc.get("name").and_then(Value::as_str), Some("CI"));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode("!!! not base64 !!!").unwrap_err();
        assert!(matches!(err, DispatchError::Decode(_)));
    }

    #[test]
    fn rejects_non_utf8_bytes() {
        let err = decode(&STANDARD.encode([0xff, 0xfe, 0x00, 0x01])).unwrap_err();
        assert!(matches!(err, DispatchError::Decode(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = decode(&encode("on: [unclosed")).unwrap_err();
        assert!(matches!(err, DispatchError::Decode(_)));
    }
}

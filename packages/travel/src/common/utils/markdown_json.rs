use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::kernel::{BaseDiagnostics, DiagnosticEvent};

lazy_static! {
    // First ```json fenced block; content is trimmed by the surrounding \s+
    static ref JSON_FENCE_REGEX: Regex = Regex::new(r"```json\s+([\s\S]+?)\s+```").unwrap();
}

/// Return the raw content of the first ```json fenced block, if any.
pub fn extract_json_block(markdown_text: &str) -> Option<&str> {
    JSON_FENCE_REGEX
        .captures(markdown_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract and parse the first ```json fenced block in `markdown_text`.
///
/// Returns `None` when there is no such block or its content is not valid
/// JSON; both cases are reported to `diagnostics`. Later blocks are never
/// consulted, even if the first one is malformed.
pub fn parse_markdown_to_json(
    markdown_text: &str,
    diagnostics: &dyn BaseDiagnostics,
) -> Option<Value> {
    let Some(content) = extract_json_block(markdown_text) else {
        diagnostics.emit(DiagnosticEvent::NoJsonBlock);
        return None;
    };

    match serde_json::from_str(content) {
        Ok(value) => Some(value),
        Err(e) => {
            diagnostics.emit(DiagnosticEvent::MalformedJson {
                error: e.to_string(),
            });
            None
        }
    }
}

/// Like [`parse_markdown_to_json`], then decode into `T`.
///
/// A shape mismatch is reported as `MalformedJson`.
pub fn parse_markdown_to<T: DeserializeOwned>(
    markdown_text: &str,
    diagnostics: &dyn BaseDiagnostics,
) -> Option<T> {
    let value = parse_markdown_to_json(markdown_text, diagnostics)?;

    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            diagnostics.emit(DiagnosticEvent::MalformedJson {
                error: e.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::RecordingDiagnostics;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_extracts_block_surrounded_by_prose() {
        let diagnostics = RecordingDiagnostics::new();
        let text = "Here is your trip:\n\n```json\n{\"name\": \"Kyoto\", \"duration\": 5}\n```\n\nEnjoy!";

        let value = parse_markdown_to_json(text, &diagnostics);

        assert_eq!(value, Some(json!({"name": "Kyoto", "duration": 5})));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_only_first_block_is_used() {
        let diagnostics = RecordingDiagnostics::new();
        let text = "```json\n[1, 2]\n```\n\n```json\n{\"ignored\": true}\n```";

        assert_eq!(parse_markdown_to_json(text, &diagnostics), Some(json!([1, 2])));
    }

    #[test]
    fn test_malformed_first_block_does_not_fall_through() {
        let diagnostics = RecordingDiagnostics::new();
        let text = "```json\n{not json}\n```\n```json\n{\"ok\": 1}\n```";

        assert_eq!(parse_markdown_to_json(text, &diagnostics), None);
        assert!(matches!(
            diagnostics.events().as_slice(),
            [DiagnosticEvent::MalformedJson { .. }]
        ));
    }

    #[test]
    fn test_no_block_reports_miss() {
        let diagnostics = RecordingDiagnostics::new();

        assert_eq!(parse_markdown_to_json("{\"bare\": true}", &diagnostics), None);
        assert_eq!(diagnostics.events(), vec![DiagnosticEvent::NoJsonBlock]);
    }

    #[test]
    fn test_untagged_fence_is_not_a_match() {
        let diagnostics = RecordingDiagnostics::new();
        let text = "```\n{\"a\": 1}\n```";

        assert_eq!(parse_markdown_to_json(text, &diagnostics), None);
        assert_eq!(diagnostics.events(), vec![DiagnosticEvent::NoJsonBlock]);
    }

    #[test]
    fn test_tolerates_extra_whitespace_around_content() {
        let diagnostics = RecordingDiagnostics::new();
        let text = "```json   \n\n  {\"a\": 1}  \n\n   ```";

        assert_eq!(parse_markdown_to_json(text, &diagnostics), Some(json!({"a": 1})));
    }

    #[test]
    fn test_extract_json_block_raw() {
        assert_eq!(extract_json_block("x ```json\n42\n``` y"), Some("42"));
        assert_eq!(extract_json_block("no fences"), None);
    }

    #[test]
    fn test_typed_decode_mismatch_is_reported() {
        #[derive(Debug, Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        let diagnostics = RecordingDiagnostics::new();
        let text = "```json\n{\"title\": \"wrong key\"}\n```";

        let parsed: Option<Named> = parse_markdown_to(text, &diagnostics);

        assert!(parsed.is_none());
        assert!(matches!(
            diagnostics.events().as_slice(),
            [DiagnosticEvent::MalformedJson { .. }]
        ));
    }
}

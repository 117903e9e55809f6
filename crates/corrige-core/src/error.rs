// Proofreading error records: the two output encodings.
//
// The engine produces one internal record per flagged match; at the output
// boundary it is rendered either as a plain structured record (headless and
// JSON consumers) or as a host-integration record shaped after the native
// proofreading-error type of a hosting application. The encoding is chosen
// once at engine construction, never per call.

use serde::{Deserialize, Serialize};

/// Category assigned to errors whose rule carries no option tag.
pub const CATEGORY_UNTYPED: &str = "notype";

/// Marker value for the host record's `error_type` field.
pub const HOST_ERROR_TYPE_PROOFREADING: u32 = 2;

/// A detected grammar error, plain structured encoding.
///
/// `start` and `end` are character offsets into the paragraph handed to the
/// engine, with `0 <= start <= end <= paragraph length`. Records are
/// produced per call and owned by the caller afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckError {
    /// Character offset of the first erroneous character.
    pub start: usize,
    /// Character offset one past the last erroneous character.
    pub end: usize,
    /// Identifier of the rule that flagged the span.
    pub rule_id: String,
    /// Option tag of the owning rule, or [`CATEGORY_UNTYPED`].
    pub category: String,
    /// Ordered replacement candidates. May be empty.
    pub suggestions: Vec<String>,
    /// Human-readable description of the problem.
    pub message: String,
    /// Reference URL for the rule, empty when none exists.
    pub url: String,
}

/// A detected grammar error, host-integration encoding.
///
/// Field names and shapes follow the proofreading-error struct of a hosting
/// office application; the fields are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    /// Character offset of the error within the checked paragraph.
    pub error_start: usize,
    /// Length of the erroneous span in characters.
    pub error_length: usize,
    /// Markup type constant, always [`HOST_ERROR_TYPE_PROOFREADING`].
    pub error_type: u32,
    /// Identifier of the rule that flagged the span.
    pub rule_identifier: String,
    /// Ordered replacement candidates.
    pub suggestions: Vec<String>,
    /// Message shown in the context menu.
    pub short_comment: String,
    /// Message shown in the checking dialog.
    pub full_comment: String,
    /// Extra name/value properties (e.g. `FullCommentURL`).
    pub properties: Vec<(String, String)>,
}

impl CheckError {
    /// Length of the erroneous span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckError {
        CheckError {
            start: 4,
            end: 8,
            rule_id: "agr_det_noun".to_string(),
            category: "conf".to_string(),
            suggestions: vec!["chats".to_string()],
            message: "Accord avec le déterminant.".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn span_length() {
        let e = sample();
        assert_eq!(e.len(), 4);
        assert!(!e.is_empty());
    }

    #[test]
    fn serializes_to_json() {
        let e = sample();
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"rule_id\":\"agr_det_noun\""));
        let back: CheckError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn host_record_holds_url_property() {
        let h = HostError {
            error_start: 0,
            error_length: 3,
            error_type: HOST_ERROR_TYPE_PROOFREADING,
            rule_identifier: "typo_quotes".to_string(),
            suggestions: vec![],
            short_comment: "msg".to_string(),
            full_comment: "msg".to_string(),
            properties: vec![("FullCommentURL".to_string(), "https://example.org".to_string())],
        };
        assert_eq!(h.properties[0].0, "FullCommentURL");
    }
}

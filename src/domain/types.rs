//! Request and response contracts for the classification and spell-check
//! operations.
//!
//! These are the logical, transport-agnostic shapes a route layer exchanges
//! with this core. Field names match the wire contract exactly.

use crate::domain::labels::ClassLabel;
use serde::{Deserialize, Serialize};

/// Inbound classification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Base64 image payload, optionally carrying a data-URI `"...base64,"`
    /// prefix (e.g. from a canvas element).
    pub image_data: String,
    /// ROI rectangle as `[x, y, w, h]`. Full-frame approximation
    /// `[0, 0, 224, 224]` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<[i32; 4]>,
}

/// Outbound prediction on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning class label.
    pub letter: ClassLabel,
    /// Raw winning score, in `[0, 1]`. Not renormalized.
    pub confidence: f32,
    /// RFC 3339 timestamp taken when the prediction was produced.
    pub timestamp: String,
}

/// Outbound error payload for request-scoped failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

impl ErrorResponse {
    /// Builds an error payload from any displayable error.
    pub fn from_error(err: &impl std::fmt::Display) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Result of a word-correction lookup.
///
/// `original` is always present, even when no correction exists; `corrected`
/// serializes as `null` when the corrector has no concept of the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The input token, echoed verbatim.
    pub original: String,
    /// Best dictionary-approximate correction, or `None` when nothing is
    /// within the corrector's reach.
    pub corrected: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_roi_defaults_to_none() {
        let req: PredictRequest = serde_json::from_str(r#"{"image_data": "aGk="}"#).unwrap();
        assert!(req.roi.is_none());

        let req: PredictRequest =
            serde_json::from_str(r#"{"image_data": "aGk=", "roi": [10, 20, 100, 100]}"#).unwrap();
        assert_eq!(req.roi, Some([10, 20, 100, 100]));
    }

    #[test]
    fn prediction_serializes_wire_labels() {
        let pred = Prediction {
            letter: ClassLabel::Del,
            confidence: 0.75,
            timestamp: "2026-08-29T12:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&pred).unwrap();
        assert_eq!(json["letter"], "del");
        assert_eq!(json["confidence"], 0.75);

        let letter: ClassLabel = serde_json::from_value(json["letter"].clone()).unwrap();
        assert_eq!(letter, ClassLabel::Del);
    }

    #[test]
    fn correction_null_keeps_original() {
        let corr = Correction {
            original: "xyzzy".to_string(),
            corrected: None,
        };
        let json = serde_json::to_string(&corr).unwrap();
        assert!(json.contains(r#""original":"xyzzy""#));
        assert!(json.contains(r#""corrected":null"#));
    }
}

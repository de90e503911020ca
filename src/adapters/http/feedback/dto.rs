//! HTTP DTOs (Data Transfer Objects) for feedback endpoints.
//!
//! These types define the JSON request/response structure for the analysis API.
//! They serve as the boundary between HTTP and the application layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::AnalyzedFeedback;
use crate::domain::feedback::AnalysisResult;
use crate::domain::foundation::ValidationError;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to analyze one piece of feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Raw customer text. May contain markup, which is stripped.
    #[serde(default)]
    pub text: Option<String>,
    /// Opaque caller identifier echoed in the response.
    #[serde(default)]
    pub request_id: Option<String>,
}

impl AnalyzeRequest {
    /// Sanitizes and bounds-checks the request.
    ///
    /// Returns the cleaned text and the request id. Lengths are counted in
    /// characters, after tag stripping and trimming.
    pub fn validate(
        self,
        min_len: usize,
        max_len: usize,
    ) -> Result<(String, String), ValidationError> {
        let request_id = self
            .request_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ValidationError::empty_field("requestId"))?;

        let text = sanitize_text(self.text.as_deref().unwrap_or_default());
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let len = text.chars().count();
        if len < min_len || len > max_len {
            return Err(ValidationError::out_of_range("text", min_len, max_len, len));
        }

        Ok((text, request_id))
    }
}

/// Removes `<...>` tags and trims surrounding whitespace.
///
/// An unterminated `<` is kept as literal text.
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful analysis response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub request_id: String,
    pub model_version: String,
    pub api_version: String,
    pub latency_ms: f64,
}

impl AnalyzeResponse {
    pub fn new(analyzed: AnalyzedFeedback, api_version: &str) -> Self {
        Self {
            result: analyzed.result,
            request_id: analyzed.request_id,
            model_version: analyzed.model_version,
            api_version: api_version.to_string(),
            latency_ms: analyzed.latency_ms,
        }
    }
}

/// Service liveness and identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_version: String,
    pub model_version: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Underlying failure description, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::Sentiment;
    use crate::domain::foundation::Severity;

    fn request(text: &str, request_id: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            text: Some(text.to_string()),
            request_id: Some(request_id.to_string()),
        }
    }

    #[test]
    fn sanitize_strips_tags_and_trims() {
        assert_eq!(
            sanitize_text("  <p>Chambre <b>sale</b></p>  "),
            "Chambre sale"
        );
        assert_eq!(sanitize_text("<script>alert(1)</script>ok"), "alert(1)ok");
    }

    #[test]
    fn sanitize_keeps_unterminated_angle_bracket() {
        assert_eq!(sanitize_text("prix < 100 euros"), "prix < 100 euros");
    }

    #[test]
    fn validate_accepts_text_within_bounds() {
        let (text, id) = request("<i>Très bon séjour</i>", "r-1").validate(10, 2000).unwrap();
        assert_eq!(text, "Très bon séjour");
        assert_eq!(id, "r-1");
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // 10 characters, 13 bytes
        let result = request("éééaaaaaaa", "r-1").validate(10, 10);
        assert!(result.is_ok());
    }

    #[test]
    fn validate_rejects_markup_only_text() {
        let err = request("<br/> <hr>", "r-1").validate(10, 2000).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("text"));
    }

    #[test]
    fn validate_rejects_short_and_long_text() {
        let err = request("trop court", "r-1").validate(11, 2000).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("text", 11, 2000, 10));

        let long = "a".repeat(2001);
        assert!(request(&long, "r-1").validate(10, 2000).is_err());
    }

    #[test]
    fn validate_requires_request_id() {
        let req = AnalyzeRequest {
            text: Some("Un texte suffisamment long".to_string()),
            request_id: None,
        };
        assert_eq!(
            req.validate(10, 2000).unwrap_err(),
            ValidationError::empty_field("requestId")
        );
    }

    #[test]
    fn request_deserializes_camel_case() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"text":"bonjour","requestId":"abc"}"#).unwrap();
        assert_eq!(req.request_id.as_deref(), Some("abc"));
    }

    #[test]
    fn response_flattens_result_fields() {
        let response = AnalyzeResponse {
            result: AnalysisResult {
                sentiment: Sentiment::Negative,
                score: -0.58,
                confidence: 0.38,
                themes: vec!["cleanliness".to_string()],
                keywords: vec!["chambre".to_string()],
                reason_tags: vec!["cleanliness_issue".to_string()],
                positive_tags: vec![],
                severity: Severity::new(5),
            },
            request_id: "r-9".to_string(),
            model_version: "lexicon-polarity-v1".to_string(),
            api_version: "v2.0.1".to_string(),
            latency_ms: 0.42,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sentiment"], "NEGATIVE");
        assert_eq!(json["reasonTags"][0], "cleanliness_issue");
        assert_eq!(json["severity"], 5);
        assert_eq!(json["requestId"], "r-9");
        assert_eq!(json["modelVersion"], "lexicon-polarity-v1");
        assert_eq!(json["apiVersion"], "v2.0.1");
        assert_eq!(json["latencyMs"], 0.42);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn error_response_omits_missing_details() {
        let json = serde_json::to_value(ErrorResponse::new("VALIDATION_FAILED", "bad")).unwrap();
        assert_eq!(json["errorCode"], "VALIDATION_FAILED");
        assert!(json.get("details").is_none());
    }
}

//! SummarizeFeedbackHandler - Compact one-shot analysis.
//!
//! Produces the three-field summary printed by the `insight-analyze` command.
//! Every failure is folded into the summary so callers always get one JSON
//! object back.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;

use crate::domain::feedback::{FeedbackAnalyzer, Sentiment};

use super::panic_message;

/// Output of a one-shot analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedbackSummary {
    #[serde(rename_all = "camelCase")]
    Analyzed {
        sentiment: Sentiment,
        confidence: f64,
        /// Theme labels joined with ", ".
        key_phrases: String,
    },
    Failed { error: String },
}

impl FeedbackSummary {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Renders the summary as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e.to_string().replace('"', "'")))
    }
}

/// Handler for one-shot summaries.
#[derive(Debug, Clone)]
pub struct SummarizeFeedbackHandler {
    analyzer: Arc<FeedbackAnalyzer>,
}

impl SummarizeFeedbackHandler {
    pub fn new(analyzer: Arc<FeedbackAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Summarizes `text`, or reports why it could not.
    pub fn handle(&self, text: Option<&str>) -> FeedbackSummary {
        let Some(text) = text else {
            return FeedbackSummary::failed("missing feedback text argument");
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.analyzer.analyze(text)));
        match outcome {
            Ok(Ok(result)) => FeedbackSummary::Analyzed {
                sentiment: result.sentiment,
                confidence: result.confidence,
                key_phrases: result.key_phrases(),
            },
            Ok(Err(e)) => FeedbackSummary::failed(e.to_string()),
            Err(payload) => FeedbackSummary::failed(panic_message(payload.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::polarity::LexiconPolarityEstimator;
    use crate::domain::feedback::{
        NormalizedText, ScoringStrategy, SentimentScore, SentimentScorer, ThemePolicy,
        UnconditionalThemes,
    };
    use crate::domain::foundation::EngineError;

    struct PanickingScorer;

    impl SentimentScorer for PanickingScorer {
        fn score(&self, _text: &NormalizedText) -> Result<SentimentScore, EngineError> {
            panic!("lexicon table corrupted");
        }

        fn model_version(&self) -> &str {
            "panicking"
        }
    }

    fn handler() -> SummarizeFeedbackHandler {
        let analyzer = FeedbackAnalyzer::from_strategies(
            ScoringStrategy::Discrete,
            ThemePolicy::Unconditional,
            Arc::new(LexiconPolarityEstimator::new()),
        );
        SummarizeFeedbackHandler::new(Arc::new(analyzer))
    }

    #[test]
    fn summarizes_positive_feedback() {
        let summary = handler().handle(Some("Le service était excellent et le personnel très poli."));
        assert_eq!(
            summary,
            FeedbackSummary::Analyzed {
                sentiment: Sentiment::Positive,
                confidence: 0.75,
                key_phrases: "Service Client".to_string(),
            }
        );
        assert_eq!(
            summary.to_json(),
            r#"{"sentiment":"POSITIVE","confidence":0.75,"keyPhrases":"Service Client"}"#
        );
    }

    #[test]
    fn joins_multiple_themes() {
        let summary = handler().handle(Some("La chambre était propre mais le prix trop cher"));
        match summary {
            FeedbackSummary::Analyzed { key_phrases, .. } => {
                assert_eq!(key_phrases, "Hébergement, Tarification");
            }
            FeedbackSummary::Failed { error } => panic!("unexpected failure: {}", error),
        }
    }

    #[test]
    fn missing_argument_is_reported_as_error_object() {
        let summary = handler().handle(None);
        assert_eq!(summary.to_json(), r#"{"error":"missing feedback text argument"}"#);
    }

    #[test]
    fn panic_is_reported_with_its_message() {
        let analyzer = FeedbackAnalyzer::new(
            Box::new(PanickingScorer),
            Box::new(UnconditionalThemes::new()),
        );
        let summary = SummarizeFeedbackHandler::new(Arc::new(analyzer))
            .handle(Some("Le service était excellent."));

        assert_eq!(summary.to_json(), r#"{"error":"lexicon table corrupted"}"#);
    }

    #[test]
    fn blank_text_is_reported_as_error_object() {
        let summary = handler().handle(Some("   "));
        assert!(matches!(summary, FeedbackSummary::Failed { .. }));
    }
}

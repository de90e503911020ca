//! AnalyzeFeedbackHandler - Runs the analysis pipeline for one request.
//!
//! The analyzer is CPU-bound, so it runs on the blocking pool. A panic inside
//! the pipeline is caught as a `JoinError` and reported as an internal error.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::task::JoinError;

use crate::domain::feedback::{round2, AnalysisResult, FeedbackAnalyzer};
use crate::domain::foundation::{EngineError, ErrorCode, ValidationError};

use super::panic_message;

/// Command to analyze one piece of feedback.
#[derive(Debug, Clone)]
pub struct AnalyzeFeedbackCommand {
    pub text: String,
    /// Opaque caller identifier, echoed back untouched.
    pub request_id: String,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzedFeedback {
    pub request_id: String,
    pub result: AnalysisResult,
    pub model_version: String,
    /// Wall-clock time spent in the pipeline, in milliseconds.
    pub latency_ms: f64,
}

/// Errors returned by [`AnalyzeFeedbackHandler`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyzeFeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error during analysis")]
    Internal { details: String },
}

impl AnalyzeFeedbackError {
    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal {
            details: details.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<EngineError> for AnalyzeFeedbackError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(e) => Self::Validation(e),
            EngineError::Analysis(message) => Self::internal(message),
        }
    }
}

impl From<JoinError> for AnalyzeFeedbackError {
    fn from(err: JoinError) -> Self {
        if err.is_panic() {
            Self::internal(panic_message(err.into_panic().as_ref()))
        } else {
            Self::internal(err.to_string())
        }
    }
}

/// Handler for feedback analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeFeedbackHandler {
    analyzer: Arc<FeedbackAnalyzer>,
}

impl AnalyzeFeedbackHandler {
    pub fn new(analyzer: Arc<FeedbackAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn model_version(&self) -> &str {
        self.analyzer.model_version()
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeFeedbackCommand,
    ) -> Result<AnalyzedFeedback, AnalyzeFeedbackError> {
        let started = Instant::now();
        let analyzer = Arc::clone(&self.analyzer);
        let text = cmd.text;

        let result = tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await??;

        let latency_ms = round2(started.elapsed().as_secs_f64() * 1000.0);
        tracing::debug!(
            request_id = %cmd.request_id,
            sentiment = %result.sentiment,
            severity = result.severity.value(),
            latency_ms,
            "feedback analyzed"
        );

        Ok(AnalyzedFeedback {
            request_id: cmd.request_id,
            result,
            model_version: self.analyzer.model_version().to_string(),
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{
        NormalizedText, Sentiment, SentimentScore, SentimentScorer, UnconditionalThemes,
    };
    use crate::adapters::polarity::LexiconPolarityEstimator;
    use crate::domain::feedback::{ScoringStrategy, ThemePolicy};

    struct PanickingScorer;

    impl SentimentScorer for PanickingScorer {
        fn score(&self, _text: &NormalizedText) -> Result<SentimentScore, EngineError> {
            panic!("lexicon table corrupted");
        }

        fn model_version(&self) -> &str {
            "panicking"
        }
    }

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn score(&self, _text: &NormalizedText) -> Result<SentimentScore, EngineError> {
            Err(EngineError::analysis("estimator returned NaN"))
        }

        fn model_version(&self) -> &str {
            "failing"
        }
    }

    fn handler_with(scorer: Box<dyn SentimentScorer>) -> AnalyzeFeedbackHandler {
        let analyzer = FeedbackAnalyzer::new(scorer, Box::new(UnconditionalThemes::new()));
        AnalyzeFeedbackHandler::new(Arc::new(analyzer))
    }

    fn classic_handler() -> AnalyzeFeedbackHandler {
        let analyzer = FeedbackAnalyzer::from_strategies(
            ScoringStrategy::Discrete,
            ThemePolicy::Unconditional,
            Arc::new(LexiconPolarityEstimator::new()),
        );
        AnalyzeFeedbackHandler::new(Arc::new(analyzer))
    }

    fn command(text: &str) -> AnalyzeFeedbackCommand {
        AnalyzeFeedbackCommand {
            text: text.to_string(),
            request_id: "req-42".to_string(),
        }
    }

    #[tokio::test]
    async fn analyzes_and_echoes_request_id() {
        let handler = classic_handler();
        let analyzed = handler
            .handle(command("Le service était excellent et le personnel très poli."))
            .await
            .unwrap();

        assert_eq!(analyzed.request_id, "req-42");
        assert_eq!(analyzed.result.sentiment, Sentiment::Positive);
        assert_eq!(analyzed.model_version, "lexicon-count-v1");
        assert!(analyzed.latency_ms >= 0.0);
    }

    #[tokio::test]
    async fn blank_text_is_a_validation_error() {
        let err = classic_handler().handle(command("  \n ")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn scorer_failure_becomes_internal_error() {
        let err = handler_with(Box::new(FailingScorer))
            .handle(command("Some feedback text"))
            .await
            .unwrap_err();

        assert_eq!(err, AnalyzeFeedbackError::internal("estimator returned NaN"));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn panic_is_caught_with_its_message() {
        let err = handler_with(Box::new(PanickingScorer))
            .handle(command("Some feedback text"))
            .await
            .unwrap_err();

        assert_eq!(err, AnalyzeFeedbackError::internal("lexicon table corrupted"));
    }
}

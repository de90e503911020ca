//! FeedbackAnalyzer - the Normalize → Score → Classify → Severity → Assemble
//! pipeline.
//!
//! The analyzer holds no mutable state. One instance can be shared across
//! threads and called concurrently; identical input always yields an
//! identical [`AnalysisResult`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EngineError, Severity, ValidationError};
use crate::ports::PolarityEstimator;

use super::keywords::extract_keywords;
use super::lexicon::{Lexicon, LEXICON};
use super::result::AnalysisResult;
use super::sentiment::{
    round2, ContinuousPolarityScorer, DiscreteCountingScorer, SentimentScore, SentimentScorer,
};
use super::severity::SeverityEstimator;
use super::text::NormalizedText;
use super::themes::{SentimentConditionedTags, ThemeClassifier, ThemeTags, UnconditionalThemes};

/// Which [`SentimentScorer`] the analyzer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    Discrete,
    #[default]
    Continuous,
}

/// Which [`ThemeClassifier`] the analyzer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePolicy {
    Unconditional,
    #[default]
    Conditioned,
}

/// Stateless feedback analysis engine.
pub struct FeedbackAnalyzer {
    scorer: Box<dyn SentimentScorer>,
    classifier: Box<dyn ThemeClassifier>,
    severity: SeverityEstimator,
    lexicon: &'static Lexicon,
}

impl FeedbackAnalyzer {
    pub fn new(scorer: Box<dyn SentimentScorer>, classifier: Box<dyn ThemeClassifier>) -> Self {
        Self {
            scorer,
            classifier,
            severity: SeverityEstimator::new(),
            lexicon: &LEXICON,
        }
    }

    /// Builds an analyzer from strategy selections.
    ///
    /// `estimator` is only used by [`ScoringStrategy::Continuous`].
    pub fn from_strategies(
        scoring: ScoringStrategy,
        themes: ThemePolicy,
        estimator: Arc<dyn PolarityEstimator>,
    ) -> Self {
        let scorer: Box<dyn SentimentScorer> = match scoring {
            ScoringStrategy::Discrete => Box::new(DiscreteCountingScorer::new()),
            ScoringStrategy::Continuous => Box::new(ContinuousPolarityScorer::new(estimator)),
        };
        let classifier: Box<dyn ThemeClassifier> = match themes {
            ThemePolicy::Unconditional => Box::new(UnconditionalThemes::new()),
            ThemePolicy::Conditioned => Box::new(SentimentConditionedTags::new()),
        };
        Self::new(scorer, classifier)
    }

    /// Model identifier of the active scoring strategy.
    pub fn model_version(&self) -> &str {
        self.scorer.model_version()
    }

    /// Analyzes one feedback text.
    ///
    /// # Errors
    ///
    /// - `EngineError::Validation` if the text is blank after trimming
    /// - `EngineError::Analysis` if the scoring strategy fails
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, EngineError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("text").into());
        }

        let normalized = NormalizedText::new(trimmed);
        let score = self.scorer.score(&normalized)?;
        let tags = self.classifier.classify(&normalized, score.sentiment);
        let severity = self.severity.estimate(&score, &normalized);
        let keywords = extract_keywords(&normalized, self.lexicon);

        Ok(self.assemble(score, tags, keywords, severity))
    }

    fn assemble(
        &self,
        score: SentimentScore,
        tags: ThemeTags,
        keywords: Vec<String>,
        severity: Severity,
    ) -> AnalysisResult {
        let confidence = score.confidence.clamp(0.0, self.scorer.confidence_cap());

        AnalysisResult {
            sentiment: score.sentiment,
            score: round2(score.score),
            confidence: round2(confidence),
            themes: tags.themes,
            keywords,
            reason_tags: tags.reason_tags,
            positive_tags: tags.positive_tags,
            severity,
        }
    }
}

impl std::fmt::Debug for FeedbackAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackAnalyzer")
            .field("model_version", &self.model_version())
            .finish_non_exhaustive()
    }
}

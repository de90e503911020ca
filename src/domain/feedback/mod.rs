//! Feedback Module - heuristic analysis of customer feedback text.
//!
//! # Components
//!
//! - `Lexicon` - process-wide word tables (polarity, categories, critical terms)
//! - `NormalizedText` - lower-cased text and its word tokens
//! - `SentimentScorer` - discrete counting or continuous polarity strategies
//! - `ThemeClassifier` - unconditional themes or sentiment-conditioned tags
//! - `SeverityEstimator` - 1-5 escalation tier for negative feedback
//! - `FeedbackAnalyzer` - runs the pipeline and assembles the result
//!
//! # Design Philosophy
//!
//! Everything here is pure and deterministic. The only shared data is the
//! read-only lexicon, so analyses can run in parallel without coordination.

mod analyzer;
mod keywords;
mod lexicon;
mod result;
mod sentiment;
mod severity;
mod text;
mod themes;

pub use analyzer::{FeedbackAnalyzer, ScoringStrategy, ThemePolicy};
pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use lexicon::{Category, Lexicon, FALLBACK_THEME, LEXICON};
pub use result::AnalysisResult;
pub use sentiment::{
    round2, ContinuousPolarityScorer, DiscreteCountingScorer, Sentiment, SentimentScore,
    SentimentScorer, DISCRETE_CONFIDENCE_CAP, NEUTRAL_CONFIDENCE, POLARITY_DEAD_ZONE,
};
pub use severity::SeverityEstimator;
pub use text::NormalizedText;
pub use themes::{SentimentConditionedTags, ThemeClassifier, ThemeTags, UnconditionalThemes};

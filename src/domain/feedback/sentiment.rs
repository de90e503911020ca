//! Sentiment scoring strategies.
//!
//! Two interchangeable scorers sit behind [`SentimentScorer`]:
//!
//! - [`DiscreteCountingScorer`] counts positive and negative lexicon words.
//! - [`ContinuousPolarityScorer`] delegates to a [`PolarityEstimator`] and
//!   derives confidence from subjectivity.
//!
//! Both produce the same [`SentimentScore`] shape so later stages never need
//! to know which one ran.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EngineError;
use crate::ports::{PolarityEstimator, PolarityReading};

use super::lexicon::{Lexicon, LEXICON};
use super::text::NormalizedText;

/// Polarity band that still counts as neutral for the continuous strategy.
pub const POLARITY_DEAD_ZONE: f64 = 0.1;

/// Confidence reported by the discrete strategy for neutral text.
pub const NEUTRAL_CONFIDENCE: f64 = 0.50;

/// Confidence ceiling for the discrete strategy.
pub const DISCRETE_CONFIDENCE_CAP: f64 = 0.99;

const DISCRETE_BASE_CONFIDENCE: f64 = 0.70;
const DISCRETE_CONFIDENCE_STEP: f64 = 0.05;
const DISCRETE_EVIDENCE_SATURATION: u32 = 5;

/// Overall polarity class of a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies a signed value; anything within `dead_zone` of zero is neutral.
    pub fn classify(value: f64, dead_zone: f64) -> Self {
        if value > dead_zone {
            Sentiment::Positive
        } else if value < -dead_zone {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Sentiment::Negative)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scorer output shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    /// Strategy-specific magnitude: net word count or continuous polarity.
    pub score: f64,
    /// The score normalised into [-1.0, 1.0].
    pub polarity: f64,
    pub confidence: f64,
}

/// Strategy that turns normalized text into a [`SentimentScore`].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &NormalizedText) -> Result<SentimentScore, EngineError>;

    /// Highest confidence this strategy may report.
    fn confidence_cap(&self) -> f64 {
        1.0
    }

    /// Identifier reported as the model version.
    fn model_version(&self) -> &str;
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ════════════════════════════════════════════════════════════════════════════════
// Discrete counting
// ════════════════════════════════════════════════════════════════════════════════

/// +1 per positive word, -1 per negative word.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteCountingScorer {
    lexicon: &'static Lexicon,
}

impl DiscreteCountingScorer {
    pub const MODEL_VERSION: &'static str = "lexicon-count-v1";

    pub fn new() -> Self {
        Self::with_lexicon(&LEXICON)
    }

    pub fn with_lexicon(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// 0.70 plus 0.05 per matching word, saturating after five matches.
    fn confidence_for(matches: u32) -> f64 {
        let evidence = matches.min(DISCRETE_EVIDENCE_SATURATION) as f64;
        let confidence = DISCRETE_BASE_CONFIDENCE + DISCRETE_CONFIDENCE_STEP * evidence;
        round2(confidence.min(DISCRETE_CONFIDENCE_CAP))
    }
}

impl Default for DiscreteCountingScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for DiscreteCountingScorer {
    fn score(&self, text: &NormalizedText) -> Result<SentimentScore, EngineError> {
        let mut positives = 0u32;
        let mut negatives = 0u32;
        for token in text.tokens() {
            if self.lexicon.is_positive(token) {
                positives += 1;
            } else if self.lexicon.is_negative(token) {
                negatives += 1;
            }
        }

        let net = f64::from(positives) - f64::from(negatives);
        let matched = positives + negatives;
        let polarity = if matched == 0 {
            0.0
        } else {
            net / f64::from(matched)
        };

        let sentiment = Sentiment::classify(net, 0.0);
        let confidence = match sentiment {
            Sentiment::Positive => Self::confidence_for(positives),
            Sentiment::Negative => Self::confidence_for(negatives),
            Sentiment::Neutral => NEUTRAL_CONFIDENCE,
        };

        Ok(SentimentScore {
            sentiment,
            score: net,
            polarity,
            confidence,
        })
    }

    fn confidence_cap(&self) -> f64 {
        DISCRETE_CONFIDENCE_CAP
    }

    fn model_version(&self) -> &str {
        Self::MODEL_VERSION
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Continuous polarity
// ════════════════════════════════════════════════════════════════════════════════

/// Classifies the estimator's polarity with a ±0.1 dead zone; confidence is
/// `1 - subjectivity`.
#[derive(Clone)]
pub struct ContinuousPolarityScorer {
    estimator: Arc<dyn PolarityEstimator>,
}

impl ContinuousPolarityScorer {
    pub fn new(estimator: Arc<dyn PolarityEstimator>) -> Self {
        Self { estimator }
    }

    fn check_reading(reading: PolarityReading) -> Result<PolarityReading, EngineError> {
        if !reading.polarity.is_finite() || !(-1.0..=1.0).contains(&reading.polarity) {
            return Err(EngineError::analysis(format!(
                "polarity {} outside [-1, 1]",
                reading.polarity
            )));
        }
        if !reading.subjectivity.is_finite() || !(0.0..=1.0).contains(&reading.subjectivity) {
            return Err(EngineError::analysis(format!(
                "subjectivity {} outside [0, 1]",
                reading.subjectivity
            )));
        }
        Ok(reading)
    }
}

impl SentimentScorer for ContinuousPolarityScorer {
    fn score(&self, text: &NormalizedText) -> Result<SentimentScore, EngineError> {
        let reading = Self::check_reading(
            self.estimator.polarity_and_subjectivity(text.lowered()),
        )?;

        Ok(SentimentScore {
            sentiment: Sentiment::classify(reading.polarity, POLARITY_DEAD_ZONE),
            score: reading.polarity,
            polarity: reading.polarity,
            confidence: round2(1.0 - reading.subjectivity),
        })
    }

    fn model_version(&self) -> &str {
        self.estimator.model_version()
    }
}

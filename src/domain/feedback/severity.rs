//! Severity Estimator - escalation tier for negative feedback.

use crate::domain::foundation::Severity;

use super::lexicon::{Lexicon, LEXICON};
use super::sentiment::{Sentiment, SentimentScore};
use super::text::NormalizedText;

const STRONG_POLARITY: f64 = 0.7;
const MODERATE_POLARITY: f64 = 0.4;

/// Derives a 1-5 tier from polarity magnitude plus critical keywords.
#[derive(Debug, Clone, Copy)]
pub struct SeverityEstimator {
    lexicon: &'static Lexicon,
}

impl SeverityEstimator {
    pub fn new() -> Self {
        Self { lexicon: &LEXICON }
    }

    /// Returns [`Severity::BASELINE`] unless the sentiment is negative.
    ///
    /// Negative feedback starts at tier 4 (|polarity| > 0.7), 3 (> 0.4) or 2,
    /// and gains one tier when a critical keyword is present.
    pub fn estimate(&self, score: &SentimentScore, text: &NormalizedText) -> Severity {
        if score.sentiment != Sentiment::Negative {
            return Severity::BASELINE;
        }

        let magnitude = score.polarity.abs();
        let base = if magnitude > STRONG_POLARITY {
            Severity::new(4)
        } else if magnitude > MODERATE_POLARITY {
            Severity::new(3)
        } else {
            Severity::new(2)
        };

        if self.lexicon.has_critical_keyword(text) {
            base.escalate()
        } else {
            base
        }
    }
}

impl Default for SeverityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

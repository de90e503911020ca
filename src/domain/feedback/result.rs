//! AnalysisResult - the engine's only output type.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Severity;

use super::sentiment::Sentiment;

/// Structured judgment for one piece of feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Net word count (discrete) or polarity (continuous), 2 decimals.
    pub score: f64,
    pub confidence: f64,
    /// Theme or category labels in evaluation order.
    pub themes: Vec<String>,
    pub keywords: Vec<String>,
    pub reason_tags: Vec<String>,
    pub positive_tags: Vec<String>,
    /// Always [`Severity::BASELINE`] unless `sentiment` is negative.
    pub severity: Severity,
}

impl AnalysisResult {
    /// Themes joined for the one-shot `keyPhrases` field.
    pub fn key_phrases(&self) -> String {
        self.themes.join(", ")
    }
}

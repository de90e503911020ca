//! PolarityEstimator port - pluggable polarity/subjectivity computation.
//!
//! The continuous sentiment strategy only needs two numbers per text. Any
//! deterministic implementation may sit behind this trait as long as it keeps
//! both values inside their documented ranges.

use serde::{Deserialize, Serialize};

/// Polarity and subjectivity of one text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityReading {
    /// Signed opinion strength in [-1.0, 1.0].
    pub polarity: f64,
    /// How opinion-laden the text is, in [0.0, 1.0].
    pub subjectivity: f64,
}

impl PolarityReading {
    /// Reading for text with no opinion signal at all.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Computes polarity and subjectivity for raw text.
pub trait PolarityEstimator: Send + Sync {
    fn polarity_and_subjectivity(&self, text: &str) -> PolarityReading;

    /// Identifier of the underlying model, echoed in responses.
    fn model_version(&self) -> &str;
}

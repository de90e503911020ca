//! Severity value object (1-5 escalation tier).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Escalation tier for negative feedback, between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    /// Tier carried by feedback that is not negative.
    pub const BASELINE: Self = Self(1);

    /// Highest tier.
    pub const MAX: Self = Self(5);

    /// Creates a new Severity, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::BASELINE.0, Self::MAX.0))
    }

    /// Returns the tier one step higher, saturating at [`Severity::MAX`].
    pub fn escalate(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

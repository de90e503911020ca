//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when feedback input fails a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max} characters, got {actual}")]
    OutOfRange {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Closed set of failures the analysis engine can signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input rejected before the pipeline ran.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Unexpected fault while scoring or classifying.
    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl EngineError {
    /// Creates an analysis error from any message.
    pub fn analysis(message: impl Into<String>) -> Self {
        EngineError::Analysis(message.into())
    }

    /// Returns the wire error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::Analysis(_) => ErrorCode::InternalError,
        }
    }
}

/// Error codes exposed at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    RateLimited,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the feedback analysis domain.

mod errors;
mod severity;

pub use errors::{EngineError, ErrorCode, ValidationError};
pub use severity::Severity;

//! Feedback analysis handlers.

mod analyze_feedback;
mod summarize_feedback;

pub use analyze_feedback::{
    AnalyzeFeedbackCommand, AnalyzeFeedbackError, AnalyzeFeedbackHandler, AnalyzedFeedback,
};
pub use summarize_feedback::{FeedbackSummary, SummarizeFeedbackHandler};

use std::any::Any;

/// Recovers the message carried by a panic payload.
///
/// `panic!` with a literal yields `&str`, with formatting a `String`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "analysis panicked".to_string())
}

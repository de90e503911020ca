//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for the delivery adapters
//! (HTTP service and one-shot command).

pub mod handlers;

pub use handlers::feedback::{
    AnalyzeFeedbackCommand, AnalyzeFeedbackError, AnalyzeFeedbackHandler, AnalyzedFeedback,
    FeedbackSummary, SummarizeFeedbackHandler,
};

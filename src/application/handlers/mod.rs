//! Application handlers.
//!
//! Command handlers that orchestrate the feedback analysis engine.

pub mod feedback;

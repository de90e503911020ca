//! Domain layer containing the analysis engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (severity value object, errors)
//! - `feedback` - Pure feedback analysis pipeline (scoring, themes, severity)

pub mod feedback;
pub mod foundation;

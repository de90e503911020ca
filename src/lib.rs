//! InsightAI Engine - Customer Feedback Analysis
//!
//! This crate turns free-form customer feedback into a structured judgment:
//! sentiment, confidence, themes, keywords and severity. The engine is
//! exposed as an HTTP service (`insight-engine`) and a one-shot command
//! (`insight-analyze`).

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;

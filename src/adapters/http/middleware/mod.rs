//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `rate_limit` - Global and per-IP request admission

pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimiterState};

//! Rate limiter adapters.
//!
//! ## Usage
//!
//! ```ignore
//! use insight_engine::adapters::rate_limiter::InMemoryRateLimiter;
//! use insight_engine::config::RateLimitConfig;
//!
//! let limiter = InMemoryRateLimiter::new(RateLimitConfig::default());
//! ```

mod in_memory;

pub use in_memory::InMemoryRateLimiter;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - Axum routes, DTOs and middleware
//! - `polarity` - Lexicon-backed polarity estimator
//! - `rate_limiter` - In-memory fixed-window rate limiter

pub mod http;
pub mod polarity;
pub mod rate_limiter;

pub use polarity::LexiconPolarityEstimator;
pub use rate_limiter::InMemoryRateLimiter;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PolarityEstimator` - Pluggable polarity/subjectivity computation
//! - `RateLimiter` - Request admission control for the serving layer

mod polarity_estimator;
mod rate_limiter;

pub use polarity_estimator::{PolarityEstimator, PolarityReading};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};

//! Rate limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Admission limits for the analysis endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Whether the rate limit middleware is mounted at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum analyze requests per minute per client IP
    #[serde(default = "default_per_ip")]
    pub requests_per_minute: u32,

    /// Maximum analyze requests per minute across all clients
    #[serde(default = "default_global")]
    pub global_requests_per_minute: u32,

    /// Key clients by `X-Forwarded-For`/`X-Real-IP` instead of the peer address.
    /// Only safe behind a reverse proxy that overwrites these headers.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl RateLimitConfig {
    /// Window length used for every limit
    pub const WINDOW_SECS: u32 = 60;

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.requests_per_minute == 0 || self.global_requests_per_minute == 0 {
            return Err(ValidationError::InvalidRateLimit);
        }
        if self.requests_per_minute > self.global_requests_per_minute {
            return Err(ValidationError::InvalidRateLimit);
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            requests_per_minute: default_per_ip(),
            global_requests_per_minute: default_global(),
            trust_forwarded_headers: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_per_ip() -> u32 {
    10
}

fn default_global() -> u32 {
    600
}

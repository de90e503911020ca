//! In-memory rate limiter implementation.
//!
//! Uses a fixed-window counter algorithm with an in-memory HashMap.
//! Counters live in one process, so each server instance limits on its own.
//! Expired windows are evicted whenever a new key arrives, so the map only
//! holds keys seen within the last window.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::RateLimitConfig;
use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};

/// In-memory rate limiter for single-server deployments.
///
/// Each window tracks the count of requests and resets when it expires.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    /// Per-key window state.
    windows: Arc<RwLock<HashMap<String, WindowState>>>,
}

/// State for a single rate limit window.
#[derive(Debug, Clone)]
struct WindowState {
    /// Number of requests in the current window.
    count: u32,
    /// Unix seconds when the current window started.
    window_start: i64,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn limit_for(&self, key: &RateLimitKey) -> u32 {
        match key.scope {
            RateLimitScope::Global => self.config.global_requests_per_minute,
            RateLimitScope::Ip => self.config.requests_per_minute,
        }
    }

    fn window_secs() -> i64 {
        i64::from(RateLimitConfig::WINDOW_SECS)
    }

    fn window_end(window_start: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(window_start + Self::window_secs(), 0)
            .unwrap_or_else(Utc::now)
    }

    async fn check_at(&self, key: RateLimitKey, now: i64) -> RateLimitResult {
        let storage_key = key.storage_key();
        let limit = self.limit_for(&key);
        let window_secs = Self::window_secs();

        let mut windows = self.windows.write().await;

        if !windows.contains_key(&storage_key) {
            windows.retain(|_, state| now < state.window_start + window_secs);
        }

        let state = windows.entry(storage_key).or_insert_with(|| WindowState {
            count: 0,
            window_start: now,
        });

        if now >= state.window_start + window_secs {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= limit {
            let retry_after = (state.window_start + window_secs - now).max(1) as u32;

            return RateLimitResult::Denied(RateLimitDenied {
                limit,
                retry_after_secs: retry_after,
                scope: key.scope,
                message: format!(
                    "Rate limit exceeded for {}. Retry after {} seconds.",
                    key.scope, retry_after
                ),
            });
        }

        state.count += 1;

        RateLimitResult::Allowed(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(state.count),
            reset_at: Self::window_end(state.window_start),
        })
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        Ok(self.check_at(key, Utc::now().timestamp()).await)
    }
}

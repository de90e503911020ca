//! Rate limiting middleware for axum.
//!
//! This module provides middleware that enforces rate limits using the `RateLimiter` port.
//!
//! # Architecture
//!
//! The middleware checks two scopes in order:
//! 1. Per-IP rate limit (abuse protection)
//! 2. Global rate limit (service protection)
//!
//! A request rejected per IP never reaches the global counter, so one noisy
//! client cannot spend the quota shared by everyone else.
//!
//! Rate limit status is returned in standard HTTP headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post, middleware};
//! use std::sync::Arc;
//!
//! let config = RateLimitConfig::default();
//! let state = RateLimiterState::new(
//!     Arc::new(InMemoryRateLimiter::new(config.clone())),
//!     config.trust_forwarded_headers,
//! );
//!
//! let app = Router::new()
//!     .route("/analyze", post(handler))
//!     .route_layer(middleware::from_fn_with_state(state, rate_limit_middleware));
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::feedback::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::{RateLimitDenied, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter};

/// Rate limiter middleware state.
#[derive(Clone)]
pub struct RateLimiterState {
    limiter: Arc<dyn RateLimiter>,
    /// Whether client-supplied forwarding headers identify the caller.
    trust_forwarded_headers: bool,
}

impl RateLimiterState {
    pub fn new(limiter: Arc<dyn RateLimiter>, trust_forwarded_headers: bool) -> Self {
        Self {
            limiter,
            trust_forwarded_headers,
        }
    }
}

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    /// Maximum requests allowed in the window.
    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    /// Requests remaining in the current window.
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    /// Unix timestamp when the window resets.
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Rate limiting middleware that checks IP and global limits.
///
/// This middleware:
/// 1. Identifies the client (forwarded headers only when trusted, else `ConnectInfo`)
/// 2. Checks the per-IP rate limit
/// 3. Checks the global rate limit
/// 4. Returns 429 Too Many Requests if either limit is exceeded
/// 5. Adds the per-IP rate limit headers to allowed responses
///
/// If the limiter itself fails, the request is let through.
pub async fn rate_limit_middleware(
    State(state): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = extract_client_ip(
        &request,
        connect_info.as_ref(),
        state.trust_forwarded_headers,
    );

    let ip_status = match &client_ip {
        Some(ip) => match state.limiter.check(RateLimitKey::ip(ip)).await {
            Ok(RateLimitResult::Denied(denied)) => {
                tracing::info!(client_ip = %ip, retry_after = denied.retry_after_secs, "ip rate limit exceeded");
                return rate_limit_response(&denied);
            }
            Ok(RateLimitResult::Allowed(status)) => Some(status),
            Err(e) => {
                tracing::warn!("Rate limiter unavailable for IP check: {}", e);
                None
            }
        },
        None => None,
    };

    match state.limiter.check(RateLimitKey::global()).await {
        Ok(RateLimitResult::Denied(denied)) => {
            tracing::warn!(scope = %denied.scope, "global rate limit exceeded");
            return rate_limit_response(&denied);
        }
        Err(e) => {
            // Fail open for availability
            tracing::warn!("Rate limiter unavailable: {}", e);
        }
        Ok(RateLimitResult::Allowed(_)) => {}
    }

    let mut response = next.run(request).await;

    if let Some(status) = ip_status {
        add_rate_limit_headers(response.headers_mut(), &status);
    }

    response
}

/// Extract client IP from request.
///
/// With `trust_forwarded` set, the order of precedence is:
/// 1. X-Forwarded-For header (first IP in list)
/// 2. X-Real-IP header
/// 3. ConnectInfo socket address
///
/// Otherwise only the socket address counts.
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
    trust_forwarded: bool,
) -> Option<String> {
    if trust_forwarded {
        if let Some(ip) = forwarded_ip(request.headers()) {
            return Some(ip);
        }
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        // Take the first IP (client IP, before any proxies)
        if let Some(first_ip) = forwarded.split(',').next().map(str::trim) {
            if !first_ip.is_empty() {
                return Some(first_ip.to_string());
            }
        }
    }

    headers
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

/// Create a 429 Too Many Requests response.
fn rate_limit_response(denied: &RateLimitDenied) -> Response {
    let body = ErrorResponse::new(ErrorCode::RateLimited.as_str(), denied.message.clone());
    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    let headers = response.headers_mut();
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(denied.limit));
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(0u32));
    headers.insert(
        axum::http::header::RETRY_AFTER,
        HeaderValue::from(denied.retry_after_secs),
    );

    response
}

/// Add rate limit headers to a response.
fn add_rate_limit_headers(headers: &mut HeaderMap, status: &RateLimitStatus) {
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(status.limit));
    headers.insert(
        headers::X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from(status.remaining),
    );
    headers.insert(
        headers::X_RATELIMIT_RESET.clone(),
        HeaderValue::from(status.reset_at.timestamp()),
    );
}

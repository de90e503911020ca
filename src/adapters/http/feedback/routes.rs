//! Axum router configuration for feedback endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{rate_limit_middleware, RateLimiterState};

use super::handlers::{analyze_feedback, health, FeedbackAppState};

/// Create the feedback API router.
///
/// # Routes
/// - `POST /analyze` - Analyze one piece of feedback (rate limited when a limiter is given)
/// - `GET /health` - Liveness and engine identity
pub fn feedback_router(limiter: Option<RateLimiterState>) -> Router<FeedbackAppState> {
    let mut analyze = Router::new().route("/analyze", post(analyze_feedback));
    if let Some(limiter) = limiter {
        analyze = analyze.route_layer(middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    Router::new()
        .route("/health", get(health))
        .merge(analyze)
}

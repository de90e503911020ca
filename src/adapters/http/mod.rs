//! HTTP adapters - REST API implementations.
//!
//! [`build_router`] assembles the feedback routes with the cross-cutting
//! layers (tracing, request timeout, CORS).

pub mod feedback;
pub mod middleware;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use feedback::{feedback_router, FeedbackAppState};
pub use middleware::RateLimiterState;

/// Build the complete service router.
///
/// `limiter` guards `/analyze` when present.
pub fn build_router(
    state: FeedbackAppState,
    server: &ServerConfig,
    limiter: Option<RateLimiterState>,
) -> Router {
    feedback_router(limiter)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::polarity::LexiconPolarityEstimator;
    use crate::config::EngineConfig;
    use crate::domain::feedback::FeedbackAnalyzer;

    fn state() -> FeedbackAppState {
        let analyzer = FeedbackAnalyzer::from_strategies(
            Default::default(),
            Default::default(),
            Arc::new(LexiconPolarityEstimator::new()),
        );
        FeedbackAppState::new(Arc::new(analyzer), &EngineConfig::default(), "v1")
    }

    #[tokio::test]
    async fn cors_headers_reflect_configured_origin() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = build_router(state(), &server, None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("Origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_router(state(), &ServerConfig::default(), None);
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

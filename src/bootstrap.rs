//! Process wiring shared by the service and one-shot binaries.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::adapters::http::{build_router, FeedbackAppState, RateLimiterState};
use crate::adapters::{InMemoryRateLimiter, LexiconPolarityEstimator};
use crate::config::{AppConfig, EngineConfig, LogFormat, ServerConfig};
use crate::domain::feedback::FeedbackAnalyzer;

/// API version tag reported by the service, e.g. `v2.0.1`.
pub const API_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Build an analyzer for the strategies selected in `engine`.
pub fn build_analyzer(engine: &EngineConfig) -> FeedbackAnalyzer {
    FeedbackAnalyzer::from_strategies(
        engine.scoring,
        engine.themes,
        Arc::new(LexiconPolarityEstimator::new()),
    )
}

/// Build the full HTTP application from configuration.
pub fn build_app(config: &AppConfig) -> axum::Router {
    let analyzer = Arc::new(build_analyzer(&config.engine));
    let state = FeedbackAppState::new(analyzer, &config.engine, API_VERSION);

    let limiter = config.rate_limit.enabled.then(|| {
        RateLimiterState::new(
            Arc::new(InMemoryRateLimiter::new(config.rate_limit.clone())),
            config.rate_limit.trust_forwarded_headers,
        )
    });

    build_router(state, &config.server, limiter)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `server.log_level`. Production emits JSON lines.
pub fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match server.log_format() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}

//! HTTP handlers for feedback endpoints.
//!
//! These handlers connect Axum routes to the application layer analysis handler.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};

use crate::application::{AnalyzeFeedbackCommand, AnalyzeFeedbackError, AnalyzeFeedbackHandler};
use crate::config::EngineConfig;
use crate::domain::feedback::FeedbackAnalyzer;
use crate::domain::foundation::ErrorCode;

use super::dto::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the feedback endpoints.
///
/// Cloned for each request; the analyzer itself is behind an `Arc`.
#[derive(Clone)]
pub struct FeedbackAppState {
    pub analyzer: Arc<FeedbackAnalyzer>,
    pub api_version: String,
    pub min_text_length: usize,
    pub max_text_length: usize,
    started: Instant,
    started_at: DateTime<Utc>,
}

impl FeedbackAppState {
    pub fn new(analyzer: Arc<FeedbackAnalyzer>, engine: &EngineConfig, api_version: &str) -> Self {
        Self {
            analyzer,
            api_version: api_version.to_string(),
            min_text_length: engine.min_text_length,
            max_text_length: engine.max_text_length,
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn analyze_handler(&self) -> AnalyzeFeedbackHandler {
        AnalyzeFeedbackHandler::new(self.analyzer.clone())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /analyze - Analyze one piece of feedback
pub async fn analyze_feedback(
    State(state): State<FeedbackAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, FeedbackApiError> {
    let Json(request) = payload.map_err(|e| FeedbackApiError::MalformedBody(e.body_text()))?;
    let (text, request_id) = request
        .validate(state.min_text_length, state.max_text_length)
        .map_err(AnalyzeFeedbackError::from)?;

    let handler = state.analyze_handler();
    let analyzed = handler
        .handle(AnalyzeFeedbackCommand { text, request_id })
        .await?;

    Ok(Json(AnalyzeResponse::new(analyzed, &state.api_version)))
}

/// GET /health - Liveness and engine identity
pub async fn health(State(state): State<FeedbackAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        api_version: state.api_version.clone(),
        model_version: state.analyzer.model_version().to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error that maps analysis errors to HTTP responses.
#[derive(Debug)]
pub enum FeedbackApiError {
    /// Body was not a JSON object of the expected shape.
    MalformedBody(String),
    Analysis(AnalyzeFeedbackError),
}

impl From<AnalyzeFeedbackError> for FeedbackApiError {
    fn from(err: AnalyzeFeedbackError) -> Self {
        Self::Analysis(err)
    }
}

impl IntoResponse for FeedbackApiError {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            Self::MalformedBody(reason) => {
                let body = ErrorResponse::with_details(
                    ErrorCode::ValidationFailed.as_str(),
                    "Request body is not valid JSON for this endpoint",
                    reason,
                );
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
            }
            Self::Analysis(err) => err,
        };

        let code = err.code();
        let (status, body) = match err {
            AnalyzeFeedbackError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(code.as_str(), e.to_string()),
            ),
            AnalyzeFeedbackError::Internal { details } => {
                tracing::error!(error_code = %ErrorCode::InternalError, %details, "analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(
                        code.as_str(),
                        "Internal error during analysis",
                        details,
                    ),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

//! HTTP adapter for feedback analysis endpoints.
//!
//! - `POST /analyze` - Analyze customer feedback text
//! - `GET /health` - Service health and engine identity

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};
pub use handlers::{FeedbackApiError, FeedbackAppState};
pub use routes::feedback_router;

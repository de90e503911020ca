//! Integration tests for the feedback HTTP service.
//!
//! These tests drive the fully assembled router (tracing, timeout, CORS and
//! rate limiting included) through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use insight_engine::bootstrap::{build_app, API_VERSION};
use insight_engine::config::{AppConfig, EngineConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(engine: EngineConfig) -> Router {
    let mut config = AppConfig {
        engine,
        ..AppConfig::default()
    };
    // Requests carry the client address in X-Forwarded-For, as behind a proxy.
    config.rate_limit.trust_forwarded_headers = true;
    build_app(&config)
}

fn default_app() -> Router {
    app_with(EngineConfig::default())
}

fn post_analyze(body: Value, ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// =============================================================================
// Analyze
// =============================================================================

#[tokio::test]
async fn positive_service_feedback() {
    let (status, body) = send(
        default_app(),
        post_analyze(
            json!({"text": "Le service était excellent et le personnel très poli.", "requestId": "ex-1"}),
            "10.0.0.1",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "POSITIVE");
    assert_eq!(body["severity"], 1);
    assert!(body["positiveTags"]
        .as_array()
        .unwrap()
        .contains(&json!("good_staff")));
    assert_eq!(body["requestId"], "ex-1");
    assert_eq!(body["apiVersion"], API_VERSION);
    assert_eq!(body["modelVersion"], "lexicon-polarity-v1");
    assert!(body["latencyMs"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn negative_cleanliness_feedback_is_escalated() {
    let (status, body) = send(
        default_app(),
        post_analyze(
            json!({"text": "Chambre sale, mauvaise odeur, jamais revenir.", "requestId": "ex-2"}),
            "10.0.0.2",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "NEGATIVE");
    assert!(body["reasonTags"]
        .as_array()
        .unwrap()
        .contains(&json!("cleanliness_issue")));
    assert!(body["severity"].as_u64().unwrap() >= 3);
    assert!(body["score"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn unmatched_feedback_is_neutral_without_tags() {
    let (status, body) = send(
        default_app(),
        post_analyze(
            json!({"text": "Le petit-déjeuner était servi à 9h.", "requestId": "ex-4"}),
            "10.0.0.4",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "NEUTRAL");
    assert_eq!(body["themes"], json!([]));
    assert_eq!(body["reasonTags"], json!([]));
    assert_eq!(body["positiveTags"], json!([]));
    assert_eq!(body["confidence"], 1.0);
}

#[tokio::test]
async fn classic_engine_reports_coarse_themes() {
    let (status, body) = send(
        app_with(EngineConfig::classic()),
        post_analyze(
            json!({"text": "Le petit-déjeuner était servi à 9h.", "requestId": "ex-4b"}),
            "10.0.0.5",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["themes"], json!(["Général"]));
    assert_eq!(body["confidence"], 0.5);
    assert_eq!(body["modelVersion"], "lexicon-count-v1");
}

#[tokio::test]
async fn html_is_stripped_before_analysis() {
    let (status, body) = send(
        default_app(),
        post_analyze(
            json!({"text": "<p>Chambre <b>sale</b> et odeur</p>", "requestId": "html"}),
            "10.0.0.6",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let keywords = body["keywords"].as_array().unwrap();
    assert!(!keywords.iter().any(|k| k.as_str().unwrap().contains('<')));
    assert!(!keywords.contains(&json!("p")));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn blank_text_is_rejected() {
    let (status, body) = send(
        default_app(),
        post_analyze(json!({"text": "   ", "requestId": "ex-3"}), "10.0.0.7"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn text_outside_length_bounds_is_rejected() {
    let (status, _) = send(
        default_app(),
        post_analyze(json!({"text": "court", "requestId": "short"}), "10.0.0.8"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let long = "a".repeat(2001);
    let (status, body) = send(
        default_app(),
        post_analyze(json!({"text": long, "requestId": "long"}), "10.0.0.8"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_request_id_is_rejected() {
    let (status, body) = send(
        default_app(),
        post_analyze(json!({"text": "Un séjour tout à fait correct."}), "10.0.0.9"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn malformed_json_uses_error_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(default_app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorCode"], "VALIDATION_FAILED");
    assert!(body["details"].is_string());
}

// =============================================================================
// Health and rate limiting
// =============================================================================

#[tokio::test]
async fn health_reports_engine_identity() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(default_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["apiVersion"], API_VERSION);
    assert_eq!(body["modelVersion"], "lexicon-polarity-v1");
    assert!(body["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn eleventh_request_from_one_ip_is_rate_limited() {
    let app = default_app();
    let body = json!({"text": "Très bon séjour, merci.", "requestId": "burst"});

    for _ in 0..10 {
        let (status, _) = send(app.clone(), post_analyze(body.clone(), "192.0.2.1")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(post_analyze(body.clone(), "192.0.2.1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));

    let (status, _) = send(app, post_analyze(body, "192.0.2.2")).await;
    assert_eq!(status, StatusCode::OK);
}

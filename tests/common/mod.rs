use adspace::config::cors::CorsConfig;
use adspace::config::rate_limit::RateLimitConfig;
use adspace::router::init_router;
use adspace::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router with rate limiting disabled.
#[allow(dead_code)]
pub fn setup_test_app() -> axum::Router {
    setup_test_app_with_rate_limit(RateLimitConfig {
        enabled: false,
        ..RateLimitConfig::default()
    })
}

#[allow(dead_code)]
pub fn setup_test_app_with_rate_limit(rate_limit_config: RateLimitConfig) -> axum::Router {
    init_router(test_state(rate_limit_config))
}

#[allow(dead_code)]
pub fn test_state(rate_limit_config: RateLimitConfig) -> AppState {
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };
    AppState::new(cors_config, rate_limit_config)
}

#[allow(dead_code)]
pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a JSON body and return the status and parsed JSON response.
#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app.oneshot(json_request(uri, &body)).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{read_json, setup_test_app};
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    setup_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_openapi_lists_every_endpoint() {
    let response = get("/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = read_json(response).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/schedules/validate",
        "/api/pricing/prorate",
        "/api/quotations/price",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(doc["components"]["schemas"].get("FitResult").is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = get("/api/contracts").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{post_json, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

const URI: &str = "/api/schedules/validate";

#[tokio::test]
async fn test_validate_perfect_fit() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "start_time": "06:00",
            "end_time": "22:00",
            "spot_duration_seconds": "10",
            "spots_per_loop": "18"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["loops_per_day"], 320);
    assert_eq!(body["duration_seconds"], 57_600);
    assert_eq!(body["loop_seconds"], 180);
    assert_eq!(body["spot_duration_suggestions"], json!([]));
    assert!(body["message"].as_str().unwrap().starts_with("Perfect fit"));
}

#[tokio::test]
async fn test_validate_accepts_json_numbers() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "start_time": "22:00",
            "end_time": "06:00",
            "spot_duration_seconds": 10,
            "spots_per_loop": 18
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["loops_per_day"], 160);
}

#[tokio::test]
async fn test_validate_mismatch_returns_suggestions() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "start_time": "06:00",
            "end_time": "22:00",
            "spot_duration_seconds": "10",
            "spots_per_loop": "19"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
    assert!(body.get("loops_per_day").is_none());
    assert_eq!(
        body["spots_per_loop_suggestions"],
        json!([
            { "parameter": "spots_per_loop", "value": 20, "loops_per_day": 288 },
            { "parameter": "spots_per_loop", "value": 18, "loops_per_day": 320 }
        ])
    );
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Calculation: 57600s ÷ 190s = 303.16 loops")
    );
}

#[tokio::test]
async fn test_validate_missing_fields_is_a_result_not_an_error() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({ "start_time": "06:00", "end_time": null }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["message"], "All dynamic content fields are required.");
    assert!(body.get("duration_seconds").is_none());
}

#[tokio::test]
async fn test_validate_bad_time_and_non_positive_counts() {
    let app = setup_test_app();

    let (_, body) = post_json(
        app.clone(),
        URI,
        json!({
            "start_time": "6 o'clock",
            "end_time": "22:00",
            "spot_duration_seconds": "10",
            "spots_per_loop": "18"
        }),
    )
    .await;
    assert_eq!(body["message"], "Invalid time format.");

    let (_, body) = post_json(
        app,
        URI,
        json!({
            "start_time": "06:00",
            "end_time": "22:00",
            "spot_duration_seconds": 0,
            "spots_per_loop": "18"
        }),
    )
    .await;
    assert_eq!(
        body["message"],
        "Spot duration and spots per loop must be positive numbers."
    );
}

#[tokio::test]
async fn test_validate_malformed_json_is_bad_request() {
    let response = setup_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(URI)
                .header("content-type", "application/json")
                .body(Body::from("{\"start_time\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_requires_json_content_type() {
    let response = setup_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(URI)
                .body(Body::from("start_time=06:00"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::read_json(response).await;
    assert_eq!(
        body["error"],
        "Missing 'Content-Type: application/json' header"
    );
}

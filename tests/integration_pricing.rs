mod common;

use axum::http::StatusCode;
use common::{post_json, setup_test_app};
use serde_json::json;

const URI: &str = "/api/pricing/prorate";

#[tokio::test]
async fn test_prorate_ninety_days() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "monthly_rate": 15000.0,
            "start_date": "2024-01-01",
            "end_date": "2024-03-30"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"]["duration_days"], 90);
    assert_eq!(body["duration"]["whole_months"], 3);
    assert_eq!(body["duration"]["remaining_days"], 0);
    assert_eq!(body["duration_label"], "3 months");
    assert_eq!(body["total_amount"].as_f64(), Some(45_000.0));
    assert_eq!(body["vat_amount"].as_f64(), Some(5_400.0));
    assert_eq!(body["grand_total"].as_f64(), Some(50_400.0));
    assert_eq!(body["start_date"], "2024-01-01");
}

#[tokio::test]
async fn test_prorate_rounds_only_in_response() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "monthly_rate": 1000,
            "start_date": "2024-05-20",
            "end_date": "2024-05-20"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration_label"], "1 day");
    assert_eq!(body["total_amount"].as_f64(), Some(33.33));
    assert_eq!(body["vat_amount"].as_f64(), Some(4.0));
    assert_eq!(body["grand_total"].as_f64(), Some(37.33));
}

#[tokio::test]
async fn test_prorate_reversed_range_is_zero() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "monthly_rate": 15000,
            "start_date": "2024-06-01",
            "end_date": "2024-05-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"]["duration_days"], 0);
    assert_eq!(body["grand_total"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_prorate_negative_rate_is_unprocessable() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "monthly_rate": -1,
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "monthly_rate must not be negative");
}

#[tokio::test]
async fn test_prorate_missing_field_is_bad_request() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({ "monthly_rate": 15000, "start_date": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "end_date is required");
}

#[tokio::test]
async fn test_prorate_invalid_date_is_bad_request() {
    let (status, body) = post_json(
        setup_test_app(),
        URI,
        json!({
            "monthly_rate": 15000,
            "start_date": "2024-02-30",
            "end_date": "2024-03-30"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

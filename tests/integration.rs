//! Integration tests for the Demurrage Engine HTTP API.
//!
//! This test suite covers:
//! - Tier boundaries for every container type
//! - Free-day handling
//! - Breakdown ordering and labels
//! - Request validation
//! - Health, index page and CORS

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use demurrage_engine::api::{AppState, create_router};
use demurrage_engine::config::ConfigLoader;
use demurrage_engine::models::DayPolicy;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/tariff.yaml").expect("Failed to load tariff");
    AppState::new(config.into_tariff())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(&value.to_string()).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate-demurrage")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(container_type: &str, container_size: &str, days: i64) -> Value {
    json!({
        "container_type": container_type,
        "container_size": container_size,
        "days": days
    })
}

fn assert_total(result: &Value, expected: &str) {
    let actual = decimal(&result["total_charge"]);
    let expected = Decimal::from_str(expected).unwrap();
    assert_eq!(
        actual, expected,
        "Expected total_charge {}, got {}",
        expected, actual
    );
}

fn assert_line(result: &Value, index: usize, period_name: &str, days: u64, rate: &str) {
    let line = &result["breakdown"][index];
    assert_eq!(line["period_name"], period_name, "line {}: {}", index, line);
    assert_eq!(line["days"], days, "line {}: {}", index, line);
    assert_eq!(
        decimal(&line["rate"]),
        Decimal::from_str(rate).unwrap(),
        "line {}: {}",
        index,
        line
    );
}

fn breakdown_len(result: &Value) -> usize {
    result["breakdown"].as_array().unwrap().len()
}

// =============================================================================
// SECTION 1: FULL containers
// =============================================================================

#[tokio::test]
async fn test_full_20_exactly_at_first_tier_end() {
    // Days 11-20 at 3 = 30
    let (status, result) = post_calculate(create_router_for_test(), create_request("FULL", "20", 20)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "30");
    assert_eq!(breakdown_len(&result), 1);
    assert_line(&result, 0, "Initial Storage Period", 10, "3");
}

#[tokio::test]
async fn test_full_20_one_day_into_second_tier() {
    // 30 + 1 day at 5 = 35
    let (status, result) = post_calculate(create_router_for_test(), create_request("FULL", "20", 21)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "35");
    assert_eq!(breakdown_len(&result), 2);
    assert_line(&result, 1, "Extended Storage Period", 1, "5");
}

#[tokio::test]
async fn test_full_40_long_stay() {
    // 10 at 5 + 10 at 8 + 10 at 11 = 240
    let (status, result) = post_calculate(create_router_for_test(), create_request("FULL", "40", 40)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "240");
    assert_line(&result, 0, "Initial Storage Period", 10, "5");
    assert_line(&result, 1, "Extended Storage Period", 10, "8");
    assert_line(&result, 2, "Long-term Storage Period", 10, "11");
}

#[tokio::test]
async fn test_full_within_free_days() {
    let (status, result) = post_calculate(create_router_for_test(), create_request("FULL", "40", 10)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "0");
    assert_eq!(breakdown_len(&result), 0);
    assert_eq!(result["free_days"], 10);
}

// =============================================================================
// SECTION 2: REEFER containers
// =============================================================================

#[tokio::test]
async fn test_reefer_40_five_days() {
    let (status, result) = post_calculate(create_router_for_test(), create_request("REEFER", "40", 5)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "45");
    assert_line(&result, 0, "Base Storage Period", 5, "9");
    assert_eq!(result["breakdown"][0]["from_day"], 1);
    assert_eq!(result["breakdown"][0]["to_day"], 5);
}

#[tokio::test]
async fn test_reefer_20_crosses_all_tiers() {
    // 10 at 6 + 10 at 8 + 5 at 10 = 190
    let (status, result) = post_calculate(create_router_for_test(), create_request("REEFER", "20", 25)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "190");
    assert_line(&result, 1, "Intermediate Storage Period", 10, "8");
    assert_line(&result, 2, "Extended Storage Period", 5, "10");
}

#[tokio::test]
async fn test_reefer_single_day_is_charged() {
    let (status, result) = post_calculate(create_router_for_test(), create_request("REEFER", "20", 1)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "6");
}

// =============================================================================
// SECTION 3: IMCO containers
// =============================================================================

#[tokio::test]
async fn test_imco_20_at_free_days() {
    let (status, result) = post_calculate(create_router_for_test(), create_request("IMCO", "20", 4)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "0");
    assert_eq!(breakdown_len(&result), 0);
}

#[tokio::test]
async fn test_imco_40_first_tier() {
    // Days 5-12 at 5 = 40
    let (status, result) = post_calculate(create_router_for_test(), create_request("IMCO", "40", 12)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "40");
    assert_line(&result, 0, "Initial Storage Period", 8, "5");
    assert_eq!(result["breakdown"][0]["from_day"], 5);
}

// =============================================================================
// SECTION 4: EMPTY containers
// =============================================================================

#[tokio::test]
async fn test_empty_20_fifteen_days() {
    let (status, result) = post_calculate(create_router_for_test(), create_request("EMPTY", "20", 15)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "7.5");
    assert_line(&result, 0, "Standard Storage Period", 5, "1.5");
    assert_eq!(result["total_charge"], json!(7.5));
}

#[tokio::test]
async fn test_empty_40_long_stay_single_line() {
    // 90 days at 2.5 = 225
    let (status, result) = post_calculate(create_router_for_test(), create_request("EMPTY", "40", 100)).await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "225");
    assert_eq!(breakdown_len(&result), 1);
}

// =============================================================================
// SECTION 5: Validation
// =============================================================================

#[tokio::test]
async fn test_negative_days_rejected_for_every_pair() {
    for container_type in ["FULL", "REEFER", "IMCO", "EMPTY"] {
        for container_size in ["20", "40"] {
            let (status, error) = post_calculate(
                create_router_for_test(),
                create_request(container_type, container_size, -1),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}/{}", container_type, container_size);
            assert_eq!(error["code"], "INVALID_DAYS");
            assert_eq!(error["message"], "Days cannot be negative");
        }
    }
}

#[tokio::test]
async fn test_zero_days_rejected_when_positive_required() {
    let router = create_router(create_test_state().with_day_policy(DayPolicy::RequirePositive));
    let (status, error) = post_calculate(router, create_request("FULL", "20", 0)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Days must be greater than zero");
}

#[tokio::test]
async fn test_unknown_container_type_rejected() {
    let (status, error) = post_calculate(create_router_for_test(), create_request("OPEN_TOP", "20", 12)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_numeric_container_size_rejected() {
    let body = json!({"container_type": "FULL", "container_size": 20, "days": 12});
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let body = json!({"container_type": "FULL", "days": 12});
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        error["message"].as_str().unwrap().contains("container_size"),
        "Expected message to mention container_size, got: {}",
        error["message"]
    );
}

#[tokio::test]
async fn test_fractional_days_rejected() {
    let body = json!({"container_type": "FULL", "container_size": "20", "days": 12.5});
    let (status, _) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate-demurrage")
                .body(Body::from(create_request("FULL", "20", 12).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// SECTION 6: Health, index page and CORS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_index_page_served() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("Demurrage Calculator"));
}

#[tokio::test]
async fn test_static_asset_served() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("Origin", "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

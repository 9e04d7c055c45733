//! Behavior-driven tests for the HTTP API
//!
//! Requests go through the full router with a fixture transport standing in
//! for Alpha Vantage.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use intraday_core::domain::format_day;
use intraday_core::{
    AlphaVantageClient, DailyAggregator, FixtureHttpClient, HttpError, HttpResponse,
    IntradayService, ProviderConfig,
};
use intraday_web::{router, AppState};
use serde_json::{json, Value};
use time::{Date, Duration, OffsetDateTime};
use tower::ServiceExt;

fn app_with(fixture: FixtureHttpClient) -> Router {
    let client =
        AlphaVantageClient::with_http_client(Arc::new(fixture), ProviderConfig::new("test-key"));
    let service = IntradayService::new(Arc::new(client), DailyAggregator::default());
    router(AppState::new(service), None)
}

fn app_returning(body: Value) -> Router {
    app_with(FixtureHttpClient::json(body.to_string()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

fn day(date: Date) -> String {
    format_day(date).expect("day formats")
}

fn entry(high: &str, low: &str, volume: &str) -> Value {
    json!({ "1. open": "0", "2. high": high, "3. low": low, "4. close": "0", "5. volume": volume })
}

// =============================================================================
// API: Success
// =============================================================================

#[tokio::test]
async fn when_symbol_has_recent_bars_api_returns_days_newest_first() {
    // Given: Bars for today and yesterday, relative to the wall clock
    let today = OffsetDateTime::now_utc().date();
    let yesterday = today - Duration::days(1);
    let app = app_returning(json!({
        "Time Series (15min)": {
            format!("{} 09:30:00", day(yesterday)): entry("10.0000", "8.0000", "100"),
            format!("{} 09:45:00", day(yesterday)): entry("12.0000", "9.0000", "200"),
            format!("{} 09:30:00", day(today)): entry("20.0000", "18.0000", "50")
        }
    }));

    // When: The chart client asks for the symbol
    let (status, body) = get(app, "/api/intraday/ibm").await;

    // Then: A JSON array in the client's shape is returned
    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        payload,
        json!([
            { "day": day(today), "lowAverage": 18.0, "highAverage": 20.0, "volume": 50 },
            { "day": day(yesterday), "lowAverage": 8.5, "highAverage": 11.0, "volume": 300 }
        ])
    );
}

#[tokio::test]
async fn when_all_bars_are_stale_api_returns_an_empty_array() {
    let app = app_returning(json!({
        "Time Series (15min)": {
            "2001-01-02 09:30:00": entry("1", "1", "1")
        }
    }));

    let (status, body) = get(app, "/api/intraday/IBM").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = app_returning(json!({}));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload, json!({ "status": "ok" }));
}

// =============================================================================
// API: Request Validation
// =============================================================================

#[tokio::test]
async fn when_symbol_is_blank_api_answers_symbol_required() {
    let app = app_returning(json!({}));

    let (status, body) = get(app, "/api/intraday/%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Symbol required.");
}

#[tokio::test]
async fn when_symbol_would_alter_the_query_string_provider_is_never_called() {
    // Given: A symbol carrying an '&'
    let fixture = Arc::new(FixtureHttpClient::json("{}"));
    let client = AlphaVantageClient::with_http_client(fixture.clone(), ProviderConfig::new("k"));
    let service = IntradayService::new(Arc::new(client), DailyAggregator::default());
    let app = router(AppState::new(service), None);

    // When
    let (status, body) = get(app, "/api/intraday/IBM%26X").await;

    // Then: Rejected locally, nothing sent upstream
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["error"]["code"], "request.invalid_symbol");
    assert!(fixture.recorded_requests().is_empty());
}

#[tokio::test]
async fn numeric_exchange_ticker_is_passed_to_the_provider() {
    // Given: A ticker that starts with a digit
    let fixture = Arc::new(FixtureHttpClient::json(
        json!({ "Time Series (15min)": {} }).to_string(),
    ));
    let client = AlphaVantageClient::with_http_client(fixture.clone(), ProviderConfig::new("k"));
    let service = IntradayService::new(Arc::new(client), DailyAggregator::default());
    let app = router(AppState::new(service), None);

    // When
    let (status, body) = get(app, "/api/intraday/600104.shh").await;

    // Then: The provider decides; an empty series is an empty array
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
    let requests = fixture.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.contains("symbol=600104.SHH"));
}

// =============================================================================
// API: Provider Failures
// =============================================================================

#[tokio::test]
async fn throttled_provider_maps_to_too_many_requests() {
    let app = app_returning(json!({ "Note": "Thank you for using Alpha Vantage!" }));

    let (status, body) = get(app, "/api/intraday/IBM").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["error"]["code"], "provider.throttled");
}

#[tokio::test]
async fn rejected_symbol_maps_to_not_found_with_provider_message() {
    let app = app_returning(json!({ "Error Message": "Invalid API call." }));

    let (status, body) = get(app, "/api/intraday/NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["error"]["code"], "provider.rejected");
    assert!(payload["error"]["message"]
        .as_str()
        .expect("message")
        .contains("Invalid API call."));
}

#[tokio::test]
async fn unexpected_payload_maps_to_bad_gateway() {
    let app = app_returning(json!({ "Meta Data": {} }));

    let (status, _) = get(app, "/api/intraday/IBM").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn upstream_error_status_maps_to_bad_gateway() {
    let app = app_with(FixtureHttpClient::responding(HttpResponse::with_status(
        500, "oops",
    )));

    let (status, body) = get(app, "/api/intraday/IBM").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["error"]["code"], "provider.transport");
}

#[tokio::test]
async fn upstream_timeout_maps_to_gateway_timeout() {
    let app = app_with(FixtureHttpClient::failing(HttpError::timeout(
        "request timeout",
    )));

    let (status, _) = get(app, "/api/intraday/IBM").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

//! Integration tests for the HTTP API.
//!
//! Drives the full router against the in-memory upstream:
//! 1. Token extraction (bearer header and cookie)
//! 2. Dashboard and list view models
//! 3. Create/read/update/delete round trips
//! 4. Profile, sign-in, sign-up and logout with the session cookie
//! 5. Error mapping to status codes and JSON bodies

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use subtrack::adapters::{app_router, AppState, InMemorySubscriptionApi};
use subtrack::config::ServerConfig;
use subtrack::ports::ApiError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "valid-token";

fn app(api: InMemorySubscriptionApi) -> Router {
    let api = Arc::new(api);
    app_router(AppState::new(api.clone(), api, "Rs"), &ServerConfig::default())
}

fn date_in(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn seeded_api() -> InMemorySubscriptionApi {
    InMemorySubscriptionApi::new()
        .with_account(TOKEN, "user-1")
        .with_record(json!({
            "_id": "netflix",
            "name": "Netflix",
            "price": 15,
            "currency": "USD",
            "frequency": "monthly",
            "status": "active",
            "category": "entertainment",
            "renewaltDate": date_in(3)
        }))
        .with_record(json!({
            "id": "gym",
            "name": "Gym",
            "price": "120",
            "frequency": "yearly",
            "status": "ACTIVE",
            "renewalDate": date_in(30)
        }))
        .with_record(json!({
            "_id": "paper",
            "name": "Paper",
            "price": 5,
            "frequency": "weekly",
            "status": "cancelled",
            "category": "news",
            "renewalDate": date_in(1)
        }))
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_with_cookie(app, req).await;
    (status, body)
}

/// Like `send`, also returning the `Set-Cookie` header if any.
async fn send_with_cookie(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, cookie, body)
}

fn anonymous(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form() -> Value {
    json!({
        "name": "Spotify",
        "price": "9.99",
        "currency": "USD",
        "frequency": "monthly",
        "category": "entertainment",
        "paymentMethod": "Visa",
        "startDate": "2024-03-01"
    })
}

// =============================================================================
// Health and authentication
// =============================================================================

#[tokio::test]
async fn health_needs_no_token() {
    let app = app(InMemorySubscriptionApi::new());
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn missing_token_is_401() {
    let app = app(seeded_api());
    let req = Request::builder()
        .uri("/api/dashboard")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn token_cookie_is_accepted() {
    let app = app(seeded_api());
    let req = Request::builder()
        .uri("/api/subscriptions")
        .header(header::COOKIE, format!("theme=dark; token={}", TOKEN))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn token_rejected_upstream_is_401() {
    let app = app(seeded_api());
    let req = Request::builder()
        .uri("/api/subscriptions")
        .header(header::AUTHORIZATION, "Bearer expired")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Read views
// =============================================================================

#[tokio::test]
async fn dashboard_aggregates_normalized_records() {
    let app = app(seeded_api());

    let (status, body) = send(&app, request(Method::GET, "/api/dashboard", None)).await;

    assert_eq!(status, StatusCode::OK);
    let stats = &body["stats"];
    assert_eq!(stats["totalCount"], 3);
    assert_eq!(stats["activeCount"], 2);
    assert_eq!(stats["totalMonthlyCost"], 25.0);
    assert_eq!(stats["currency"], "USD");

    let upcoming = stats["upcomingRenewals"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["subscription"]["id"], "netflix");
    assert_eq!(upcoming[0]["daysUntil"], 3);

    let labels: Vec<&str> = stats["byCategory"]
        .as_array()
        .unwrap()
        .iter()
        .map(|bucket| bucket["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["entertainment", "Uncategorized", "news"]);

    assert_eq!(body["subscriptions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_returns_views_in_upstream_order() {
    let app = app(seeded_api());

    let (status, body) = send(&app, request(Method::GET, "/api/subscriptions", None)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows[0]["id"], "netflix");
    assert_eq!(rows[0]["renewalDate"], date_in(3));
    assert_eq!(rows[1]["id"], "gym");
    assert_eq!(rows[1]["monthlyCost"], 10.0);
    assert_eq!(rows[1]["statusLabel"], "Active");
    assert_eq!(rows[2]["statusLabel"], "Cancelled");
}

#[tokio::test]
async fn detail_lists_pending_reminders() {
    let app = app(seeded_api());

    let (status, body) =
        send(&app, request(Method::GET, "/api/subscriptions/gym", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Gym");
    let offsets: Vec<i64> = body["reminders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["daysBefore"].as_i64().unwrap())
        .collect();
    assert_eq!(offsets, vec![7, 5, 2, 1]);
}

#[tokio::test]
async fn unknown_subscription_is_404() {
    let app = app(seeded_api());

    let (status, body) =
        send(&app, request(Method::GET, "/api/subscriptions/missing", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SUBSCRIPTION_NOT_FOUND");
}

// =============================================================================
// Writes
// =============================================================================

#[tokio::test]
async fn create_update_delete_round_trip() {
    let app = app(InMemorySubscriptionApi::new().with_account(TOKEN, "user-1"));

    let (status, created) =
        send(&app, request(Method::POST, "/api/subscriptions", Some(form()))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "active");
    assert_eq!(created["startDate"], "2024-03-01T00:00:00.000Z");

    let mut changed = form();
    changed["price"] = json!("12.50");
    let uri = format!("/api/subscriptions/{}", id);
    let (status, updated) = send(&app, request(Method::PUT, &uri, Some(changed))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 12.5);

    let (status, deleted) = send(&app, request(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "id": id, "deleted": true }));

    let (status, _) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_form_is_400_naming_the_field() {
    let app = app(InMemorySubscriptionApi::new().with_account(TOKEN, "user-1"));
    let mut bad = form();
    bad["currency"] = json!("EUR");

    let (status, body) =
        send(&app, request(Method::POST, "/api/subscriptions", Some(bad))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_VALUE");
    assert_eq!(body["details"]["field"], "currency");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app(InMemorySubscriptionApi::new().with_account(TOKEN, "user-1"));
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/subscriptions")
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn encoded_slashes_cannot_escape_the_subscription_path() {
    let app = app(seeded_api());

    for uri in [
        "/api/subscriptions/..%2Fuser%2Fuser-1",
        "/api/subscriptions/%2E%2E",
        "/api/subscriptions/gym%2F..",
    ] {
        let (status, body) = send(&app, request(Method::DELETE, uri, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["details"]["field"], "id");
    }

    let (_, rows) = send(&app, request(Method::GET, "/api/subscriptions", None)).await;
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn a_subscription_literally_named_unknown_is_addressable() {
    let api = seeded_api()
        .with_record(json!({ "_id": "unknown", "name": "Mystery" }))
        .with_record(json!({ "name": "No id" }));
    let app = app(api);

    let (status, body) =
        send(&app, request(Method::GET, "/api/subscriptions/unknown", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mystery");

    let (_, rows) = send(&app, request(Method::GET, "/api/subscriptions", None)).await;
    assert_eq!(rows[4]["id"], Value::Null);

    let (status, _) =
        send(&app, request(Method::DELETE, "/api/subscriptions/unknown", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, rows) = send(&app, request(Method::GET, "/api/subscriptions", None)).await;
    assert_eq!(rows.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn huge_prices_keep_the_dashboard_total_numeric() {
    let api = InMemorySubscriptionApi::new()
        .with_account(TOKEN, "user-1")
        .with_record(json!({ "_id": "a", "status": "active", "price": 1e308, "frequency": "daily" }))
        .with_record(json!({ "_id": "b", "status": "active", "price": 1e308 }));
    let app = app(api);

    let (status, body) = send(&app, request(Method::GET, "/api/dashboard", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["totalMonthlyCost"].as_f64(), Some(f64::MAX));
}

#[tokio::test]
async fn extreme_dates_do_not_break_any_view() {
    let api = InMemorySubscriptionApi::new()
        .with_account(TOKEN, "user-1")
        .with_record(json!({ "_id": "max", "status": "active", "startDate": "+262142-12-31" }))
        .with_record(json!({ "_id": "min", "status": "active", "renewalDate": "-262143-01-01" }));
    let app = app(api);

    let (status, _) = send(&app, request(Method::GET, "/api/dashboard", None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request(Method::GET, "/api/subscriptions/max", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nextRenewal"], Value::Null);
    assert!(body["reminders"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, request(Method::GET, "/api/subscriptions/min", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reminders"].as_array().unwrap().is_empty());
}

// =============================================================================
// Account and session
// =============================================================================

fn login_api() -> InMemorySubscriptionApi {
    seeded_api().with_login("asha@example.com", "secret1")
}

#[tokio::test]
async fn profile_returns_the_signed_in_account() {
    let app = app(seeded_api());

    let (status, body) = send(&app, request(Method::GET, "/api/profile", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "user-1");
    assert_eq!(body["email"], "user-1@test.example.com");
}

#[tokio::test]
async fn sign_in_sets_a_cookie_that_authenticates_later_calls() {
    let app = app(login_api());

    let (status, cookie, body) = send_with_cookie(
        &app,
        anonymous(
            Method::POST,
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com", "password": "secret1" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], TOKEN);
    assert_eq!(body["user"]["id"], "user-1");
    let cookie = cookie.unwrap();
    assert!(cookie.starts_with(&format!("token={};", TOKEN)));
    assert!(cookie.contains("Max-Age=86400"));

    let pair = cookie.split(';').next().unwrap().to_string();
    let req = Request::builder()
        .uri("/api/dashboard")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_is_401_without_cookie() {
    let app = app(login_api());

    let (status, cookie, body) = send_with_cookie(
        &app,
        anonymous(
            Method::POST,
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com", "password": "guess" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert!(cookie.is_none());
}

#[tokio::test]
async fn sign_up_creates_account_and_rejects_a_second_time() {
    let app = app(InMemorySubscriptionApi::new());
    let form = json!({
        "name": " New User ",
        "email": "new@example.com",
        "password": "secret1",
        "confirmPassword": "secret1"
    });

    let (status, cookie, body) =
        send_with_cookie(&app, anonymous(Method::POST, "/api/auth/sign-up", form.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "New User");
    assert!(cookie.unwrap().starts_with("token="));

    let token = body["token"].as_str().unwrap();
    let req = Request::builder()
        .uri("/api/profile")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, profile) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "new@example.com");

    let (status, body) = send(&app, anonymous(Method::POST, "/api/auth/sign-up", form)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "EMAIL_ALREADY_EXISTS");
    assert_eq!(body["details"]["field"], "email");
}

#[tokio::test]
async fn sign_up_validation_names_the_field() {
    let app = app(InMemorySubscriptionApi::new());
    let cases = [
        (json!({ "name": " ", "email": "a@b.co", "password": "secret1", "confirmPassword": "secret1" }), "name"),
        (json!({ "name": "A", "email": "a@b", "password": "secret1", "confirmPassword": "secret1" }), "email"),
        (json!({ "name": "A", "email": "a@b.co", "password": "12345", "confirmPassword": "12345" }), "password"),
        (json!({ "name": "A", "email": "a@b.co", "password": "secret1", "confirmPassword": "secret2" }), "confirmPassword"),
    ];

    for (form, field) in cases {
        let (status, body) = send(&app, anonymous(Method::POST, "/api/auth/sign-up", form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", field);
        assert_eq!(body["details"]["field"], field);
    }
}

#[tokio::test]
async fn logout_expires_the_cookie() {
    let app = app(seeded_api());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/logout")
        .body(Body::empty())
        .unwrap();

    let (status, cookie, _) = send_with_cookie(&app, req).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let cookie = cookie.unwrap();
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

// =============================================================================
// Upstream failures
// =============================================================================

#[tokio::test]
async fn unreachable_upstream_is_502() {
    let api = seeded_api().with_error(ApiError::Transport("connection refused".into()));
    let app = app(api);

    let (status, body) = send(&app, request(Method::GET, "/api/dashboard", None)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn upstream_server_error_is_502() {
    let api = seeded_api().with_error(ApiError::from_status(500, "Database down"));
    let app = app(api);

    let (status, body) = send(&app, request(Method::GET, "/api/subscriptions", None)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

//! Integration tests for the HTTP surface.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`. The
//! event log runs disabled throughout, which doubles as coverage for
//! the requirement that logging never alters a response.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    Router,
};
use chrono::{DateTime, Duration, Utc};
use directory_core::domains::directory::{AttendeeDirectory, ExpirationGate, RosterEntry};
use directory_core::domains::events::EventLog;
use directory_core::server::{build_app, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn entry(phone: &str, name: &str) -> RosterEntry {
    RosterEntry {
        phone: phone.to_string(),
        name: name.to_string(),
        interests: BTreeMap::new(),
    }
}

fn test_app(expires_at: DateTime<Utc>) -> Router {
    let directory = AttendeeDirectory::from_entries(vec![
        entry("555-000-0001", "Bob"),
        entry("555-000-0002", "alice"),
    ])
    .unwrap();
    build_app(AppState::new(
        directory,
        ExpirationGate::new(expires_at),
        EventLog::disabled(),
    ))
}

fn live_app() -> Router {
    test_app(Utc::now() + Duration::hours(1))
}

fn expired_app() -> Router {
    test_app(Utc::now() - Duration::hours(1))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in as alice and return the session cookie pair.
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, FORM)
                .body(Body::from("phone=555-000-0002"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");

    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn unauthenticated_home_redirects_to_login() {
    let response = live_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");
}

#[tokio::test]
async fn login_then_view_sorted_directory() {
    let app = live_app();
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    // Case-insensitive name sort: alice before Bob.
    let alice = body.find("alice").expect("alice listed");
    let bob = body.find("Bob").expect("Bob listed");
    assert!(alice < bob, "expected alice before Bob in {body}");
}

#[tokio::test]
async fn failed_login_rerenders_form_without_session() {
    let response = live_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, FORM)
                .body(Body::from("phone=555-999-9999"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let body = body_string(response).await;
    assert!(body.contains("Phone number not found"));
}

#[tokio::test]
async fn garbage_phone_input_is_a_form_error_not_a_500() {
    let response = live_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, FORM)
                .body(Body::from("phone=not%20a%20phone%20at%20all"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Phone number not found"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = live_app();
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");

    // The old token no longer resolves to an identity.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");
}

#[tokio::test]
async fn logout_without_a_session_still_redirects() {
    let response = live_app()
        .oneshot(Request::builder().uri("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");
}

#[tokio::test]
async fn event_endpoints_require_a_session() {
    let app = live_app();

    for (uri, body) in [
        ("/copy", ""),
        ("/log-phone-click", "phone=%2B15550000001&name=Bob"),
        ("/log-filter", "interest=Do%20a%20craft"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"], "Not logged in");
    }
}

#[tokio::test]
async fn event_endpoints_acknowledge_with_disabled_log() {
    let app = live_app();
    let cookie = login(&app).await;

    for (uri, body) in [
        ("/copy", ""),
        ("/log-phone-click", "phone=%2B15550000001&name=Bob"),
        ("/log-filter", "interest=Do%20a%20craft"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(COOKIE, &cookie)
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        // The store being unavailable must not change the response.
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["success"], true);
    }
}

#[tokio::test]
async fn health_always_answers_ok() {
    for app in [live_app(), expired_app()] {
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }
}

#[tokio::test]
async fn expired_directory_short_circuits_html_routes() {
    let app = expired_app();

    for uri in ["/", "/login"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_string(response).await.contains("expired"), "{uri}");
    }

    // Login attempts are gated too, even with a valid roster phone.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, FORM)
                .body(Body::from("phone=555-000-0002"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert!(body_string(response).await.contains("expired"));
}

#[tokio::test]
async fn expired_directory_gates_event_endpoints() {
    let response = expired_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/copy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GONE);
    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["error"], "Directory has expired");
}

#[tokio::test]
async fn expiration_api_reports_countdown() {
    let expires_at = Utc::now() + Duration::hours(1);
    let response = test_app(expires_at)
        .oneshot(
            Request::builder()
                .uri("/api/expiration")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["expired"], false);

    let seconds = json["seconds_until_expiration"].as_i64().unwrap();
    assert!(seconds > 3500 && seconds <= 3600, "{seconds}");

    let reported = json["expiration_date"].as_str().unwrap();
    let parsed = DateTime::parse_from_rfc3339(reported).unwrap();
    assert_eq!(parsed.timestamp(), expires_at.timestamp());
}

#[tokio::test]
async fn expiration_api_goes_negative_after_the_cutoff() {
    let response = expired_app()
        .oneshot(
            Request::builder()
                .uri("/api/expiration")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["expired"], true);
    assert!(json["seconds_until_expiration"].as_i64().unwrap() < 0);
}

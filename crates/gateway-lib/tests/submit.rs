// gateway-lib/tests/submit.rs
//! End-to-end tests driving the router with in-memory requests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use gateway_lib::{config::Settings, router::create_router, AppState};
use musicgw_common::digest::expected_digest;
use musicgw_common::token::{AuthToken, TokenMode};

fn app() -> axum::Router {
    let state = Arc::new(AppState::new(Settings::default()).expect("default settings are valid"));
    create_router(state)
}

/// A token for the default identity, stamped with the current clock.
fn fresh_token(mode: TokenMode) -> String {
    let ts = format!("{:x}", chrono::Utc::now().timestamp());
    let digest = expected_digest("zaq12wsx", &ts);
    AuthToken {
        mode,
        user: "mina86".to_string(),
        timestamp: ts,
        digest,
    }
    .to_string()
}

fn form_body(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

async fn post_form(body: String) -> (StatusCode, Option<String>, String) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_valid_pass_submission_no_songs() {
    let body = form_body(&[("auth", &fresh_token(TokenMode::Pass))]);
    let (status, content_type, text) = post_form(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/x-music"));
    assert_eq!(text, "MUSIC 100 OK\nEND\n");
}

#[tokio::test]
async fn test_open_mode_announces_session_and_acks_songs() {
    let token = fresh_token(TokenMode::Open);
    let body = form_body(&[
        ("auth", token.as_str()),
        ("song", "Title:Artist:Album:Rock:e4:5f3759df"),
        ("song", "Other:Artist:Album:Pop:103:5f375a00"),
        ("song", "Third::::0:0"),
    ]);
    let (_, _, text) = post_form(body).await;

    assert_eq!(
        text,
        "MUSIC 100 OK\nSESSION 0 0\nSONG 0 OK\nSONG 1 OK\nSONG 2 OK\nEND\n"
    );
}

#[tokio::test]
async fn test_php_style_song_array_keys_are_counted() {
    let token = fresh_token(TokenMode::Pass);
    let body = form_body(&[
        ("auth", token.as_str()),
        ("song[]", "a:b:c:d:0:0"),
        ("song[]", "e:f:g:h:0:0"),
    ]);
    let (_, _, text) = post_form(body).await;

    assert_eq!(text, "MUSIC 100 OK\nSONG 0 OK\nSONG 1 OK\nEND\n");
}

#[tokio::test]
async fn test_missing_auth_field() {
    let body = form_body(&[("song", "a:b:c:d:0:0")]);
    let (status, content_type, text) = post_form(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/x-music"));
    assert_eq!(
        text,
        "MUSIC 201 Invalid User\nThe request is missing authentication parameters."
    );
}

#[tokio::test]
async fn test_unsupported_mode() {
    let body = form_body(&[("auth", "sess:mina86:0:whatever")]);
    let (_, _, text) = post_form(body).await;

    assert_eq!(
        text,
        "MUSIC 301 Bad Session\nThis test server does not support sessions."
    );
}

#[tokio::test]
async fn test_stale_client_clock() {
    // Timestamp 0 with its otherwise-correct digest is decades away.
    let token = format!("pass:mina86:0:{}", expected_digest("zaq12wsx", "0"));
    let body = form_body(&[("auth", &token)]);
    let (_, _, text) = post_form(body).await;

    assert_eq!(text, "MUSIC 203 Invalid Time\nYour client has invalid time set.");
}

#[tokio::test]
async fn test_bad_password_leaks_diagnostic_trailer() {
    let ts = format!("{:x}", chrono::Utc::now().timestamp());
    let token = format!("pass:mina86:{ts}:notthedigest");
    let body = form_body(&[("auth", &token), ("song", "x:y:z:w:0:0")]);
    let (_, _, text) = post_form(body).await;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "MUSIC 201 Invalid User");
    assert_eq!(lines[1], "Invalid user name or password.");
    assert_eq!(lines[2], format!("pass: notthedigest; time: {ts}"));
    assert!(lines[3].ends_with(&format!(" {ts}")));
    assert_eq!(lines[4], format!("hash: {}", expected_digest("zaq12wsx", &ts)));
    assert_eq!(lines[5], "END");
    assert!(text.ends_with("END\n"));
    // No song is acknowledged on a rejected submission.
    assert!(!text.contains("SONG"));
}

#[tokio::test]
async fn test_wrong_user_also_gets_the_trailer() {
    let ts = format!("{:x}", chrono::Utc::now().timestamp());
    let token = format!("pass:intruder:{ts}:{}", expected_digest("zaq12wsx", &ts));
    let body = form_body(&[("auth", &token)]);
    let (_, _, text) = post_form(body).await;

    assert!(text.starts_with("MUSIC 201 Invalid User\n"));
    assert!(text.contains("\nhash: "));
    assert!(text.ends_with("END\n"));
}

#[tokio::test]
async fn test_empty_submission_gets_plain_notice() {
    let (status, content_type, text) = post_form(String::new()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain"));
    assert!(text.starts_with("This is a testing script for music protocol."));
    assert!(!text.contains("MUSIC"));
}

#[tokio::test]
async fn test_get_requests_see_the_notice_too() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.ends_with(";)"));
}

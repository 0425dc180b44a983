//! libcurl client against a local HTTP server.

mod common;

use common::api_server::{ApiServer, Canned};
use common::host;
use sitetrust_core::backend::{FetchError, HttpBackend, TrustBackend};
use sitetrust_core::config::{ClientConfig, RetryConfig};
use sitetrust_core::model::{Level, Vote, VoteLabel};

const SCORE: &str = r#"{
    "host": "example.com",
    "score": 72.5,
    "level": "green",
    "breakdown": {"S": 0.9, "C": 0.7, "T": 0.6, "U": 0.5},
    "u_included": true,
    "votes_total": 12,
    "updated_at": "2024-05-01T12:00:00Z"
}"#;

const EXPLAIN: &str = r#"{
    "host": "example.com",
    "model_version": "v0.3",
    "signals": [
        {"key": "https_ok", "value": true, "effect": "+S"},
        {"key": "google_safe_browsing_flagged", "value": false}
    ]
}"#;

fn backend(base: String) -> HttpBackend {
    let cfg = ClientConfig {
        api_base: base,
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        retry: Some(RetryConfig {
            max_attempts: 3,
            base_delay_secs: 0.01,
            max_delay_secs: 1,
        }),
        ..ClientConfig::default()
    };
    HttpBackend::from_config(&cfg).expect("client")
}

#[tokio::test]
async fn fetches_and_decodes_a_score() {
    let server = ApiServer::default();
    server.route("GET", "/v1/sites/example.com", vec![Canned::json(200, SCORE)]);
    let client = backend(server.start());

    let score = client.fetch_score(&host("example.com")).await.unwrap();
    assert_eq!(score.score, 72.5);
    assert_eq!(score.level, Level::Green);
    assert_eq!(score.votes_total, 12);
    assert!(score.u_included);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert!(requests[0]
        .headers
        .iter()
        .any(|h| h.eq_ignore_ascii_case("accept: application/json")));
}

#[tokio::test]
async fn fetches_an_explanation() {
    let server = ApiServer::default();
    server.route(
        "GET",
        "/v1/sites/example.com/explain",
        vec![Canned::json(200, EXPLAIN)],
    );
    let client = backend(server.start());

    let explanation = client.fetch_explanation(&host("example.com")).await.unwrap();
    assert_eq!(explanation.signals.len(), 2);
    assert_eq!(explanation.model_version.as_deref(), Some("v0.3"));
    assert!(!sitetrust_core::model::gsb_flagged(Some(&explanation)));
}

#[tokio::test]
async fn missing_explanation_is_a_status_error() {
    let server = ApiServer::default();
    let client = backend(server.start());

    let err = client.fetch_explanation(&host("example.com")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)), "{err:?}");
    // 404 is not retried.
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn transient_server_errors_are_retried_for_reads() {
    let server = ApiServer::default();
    server.route(
        "GET",
        "/v1/sites/example.com",
        vec![Canned::json(503, "{}"), Canned::json(200, SCORE)],
    );
    let client = backend(server.start());

    let score = client.fetch_score(&host("example.com")).await.unwrap();
    assert_eq!(score.score, 72.5);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn out_of_range_score_is_a_schema_error() {
    let server = ApiServer::default();
    let body = SCORE.replace("72.5", "150");
    server.route("GET", "/v1/sites/example.com", vec![Canned::json(200, body)]);
    let client = backend(server.start());

    let err = client.fetch_score(&host("example.com")).await.unwrap_err();
    assert!(matches!(err, FetchError::Schema(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = ApiServer::default();
    server.route(
        "GET",
        "/v1/sites/example.com",
        vec![Canned::json(200, r#"{"host": "example.com"}"#)],
    );
    let client = backend(server.start());

    let err = client.fetch_score(&host("example.com")).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn vote_posts_json_and_reads_the_receipt() {
    let server = ApiServer::default();
    server.route(
        "POST",
        "/v1/votes",
        vec![Canned::json(200, r#"{"ok": true, "new_score": 70.1}"#)],
    );
    let client = backend(server.start());

    let vote = Vote::new(host("example.com"), VoteLabel::Danger, "fake login page");
    let receipt = client.submit_vote(&vote).await.unwrap();
    assert_eq!(receipt.ok, Some(true));
    assert_eq!(receipt.new_score, Some(70.1));

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "host": "example.com",
            "label": "danger",
            "reason": "fake login page"
        })
    );
}

#[tokio::test]
async fn vote_is_sent_exactly_once_even_on_server_error() {
    let server = ApiServer::default();
    server.route("POST", "/v1/votes", vec![Canned::json(503, "{}")]);
    let client = backend(server.start());

    let vote = Vote::new(host("example.com"), VoteLabel::Safe, "");
    let err = client.submit_vote(&vote).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(503)));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn accepted_vote_with_empty_body_has_a_blank_receipt() {
    let server = ApiServer::default();
    server.route("POST", "/v1/votes", vec![Canned::json(201, "")]);
    let client = backend(server.start());

    let vote = Vote::new(host("example.com"), VoteLabel::Suspicious, "");
    let receipt = client.submit_vote(&vote).await.unwrap();
    assert_eq!(receipt.ok, None);
    assert_eq!(receipt.new_score, None);
}

#[tokio::test]
async fn health_probe() {
    let server = ApiServer::default();
    server.route(
        "GET",
        "/v1/health",
        vec![Canned::json(
            200,
            r#"{"ok": true, "service": "opensitetrust", "version": "0.1.0"}"#,
        )],
    );
    let client = backend(server.start());

    let health = client.health().await.unwrap();
    assert!(health.ok);
    assert_eq!(health.service.as_deref(), Some("opensitetrust"));
}

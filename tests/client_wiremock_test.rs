//! Check client tests against a wiremock scoring endpoint.

mod common;

use std::time::Duration;

use common::wire_report;
use pwcheck::client::CheckClient;
use pwcheck::config::CheckerConfig;
use pwcheck::error::CheckError;
use pwcheck::models::{BreachCount, CheckOutcome, CheckRequest, RiskBand};
use pwcheck::traits::{HttpError, PasswordChecker};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CheckClient {
    let config = CheckerConfig::default().with_endpoint(format!("{}/check", server.uri()));
    CheckClient::from_config(&config).expect("client builds")
}

#[tokio::test]
async fn test_posts_password_and_decodes_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire_report(17_000, 88.4)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .check(&CheckRequest::new("hunter2"))
        .await
        .expect("check succeeds");

    let result = outcome.report().expect("a report");
    assert_eq!(result.bits, 18.7);
    assert_eq!(result.crack_time, "3 seconds");
    assert_eq!(result.score, 1);
    assert_eq!(
        result.warning.as_deref(),
        Some("This is similar to a commonly used password")
    );
    assert_eq!(result.breach, BreachCount::Known(17_000));
    assert_eq!(result.risk.value(), 88);
    assert_eq!(result.risk.band(), RiskBand::High);

    assert_eq!(result.sequences.len(), 2);
    assert_eq!(result.sequences[0].pattern, "dictionary");
    assert_eq!(
        result.sequences[0].extra_fields(),
        vec![
            ("dictionary_name".to_string(), "passwords".to_string()),
            ("rank".to_string(), "1023".to_string()),
        ]
    );
    assert!(result.sequences[1].extra_fields().is_empty());
}

#[tokio::test]
async fn test_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"empty": true})))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .check(&CheckRequest::new(""))
        .await
        .unwrap();
    assert_eq!(outcome, CheckOutcome::Empty);
}

#[tokio::test]
async fn test_negative_pwned_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire_report(-1, 35.0)))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .check(&CheckRequest::new("x"))
        .await
        .unwrap();
    let result = outcome.report().unwrap();
    assert_eq!(result.breach, BreachCount::Unavailable);
    assert_eq!(result.risk.band(), RiskBand::Low);
}

#[tokio::test]
async fn test_out_of_range_risk_is_clamped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire_report(0, 130.2)))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .check(&CheckRequest::new("x"))
        .await
        .unwrap();
    assert_eq!(outcome.report().unwrap().risk.value(), 100);
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .check(&CheckRequest::new("x"))
        .await
        .unwrap_err();
    match &err {
        CheckError::Server { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_not_found_is_not_transient() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .check(&CheckRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::Server { status: 404, .. }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_missing_required_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"empty": false, "bits": 3.0})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .check(&CheckRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::MalformedResponse(_)));
    assert_eq!(err.code(), "CHECK_MALFORMED");
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wire_report(0, 10.0))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = CheckerConfig::default()
        .with_endpoint(format!("{}/check", server.uri()))
        .with_request_timeout(Duration::from_millis(200));
    let client = CheckClient::from_config(&config).unwrap();

    let err = client.check(&CheckRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, CheckError::Http(HttpError::Timeout(_))));
}

#[tokio::test]
async fn test_connection_refused() {
    let server = MockServer::start().await;
    let endpoint = format!("{}/check", server.uri());
    drop(server);

    let client = CheckClient::from_config(&CheckerConfig::default().with_endpoint(endpoint)).unwrap();
    let err = client.check(&CheckRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, CheckError::Http(_)));
    assert_eq!(err.code(), "CHECK_HTTP");
}

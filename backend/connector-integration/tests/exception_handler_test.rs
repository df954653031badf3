#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use common::LoggerMock;
use connector_integration::exception_handler::ExceptionHandlerService;
use domain_types::router_data::CommunicationFailure;
use interfaces::services::Severity;
use serde_json::{json, Value};

mod common;

const LOG_KEY: &str = "Could not testing due to a communication failure";

fn handle(failure: CommunicationFailure) -> (domain_types::router_data::ErrorResponse, common::LoggedEntry) {
    let logger = Arc::new(LoggerMock::default());
    let handler = ExceptionHandlerService::new(logger.clone());

    let error = handler.handle(&failure, "testing");
    (error, logger.single_entry())
}

fn request_failure(body: Option<String>) -> CommunicationFailure {
    CommunicationFailure::request(123, "test message", body)
}

#[test]
fn test_exception() {
    let (error, entry) = handle(CommunicationFailure::plain(123, "test message"));

    assert_eq!(error.name, "123");
    assert_eq!(error.message, "An error occurred: test message");
    assert_eq!(entry.severity, Severity::Error);
    assert_eq!(entry.key, LOG_KEY);
    assert_eq!(entry.context.get("message"), Some(&Value::from("test message")));
    assert!(!entry.context.contains_key("payload"));
}

#[test]
fn test_request_failure_without_body() {
    let (error, entry) = handle(request_failure(None));

    assert_eq!(error.name, "123");
    assert_eq!(error.message, "An error occurred: test message");
    assert_eq!(entry.key, LOG_KEY);
    assert_eq!(entry.context.get("message"), Some(&Value::from("test message")));
    assert!(!entry.context.contains_key("payload"));
}

#[test]
fn test_request_failure_with_body_but_no_json() {
    let (error, entry) = handle(request_failure(Some("test".to_string())));

    assert_eq!(error.name, "123");
    assert_eq!(error.message, "An error occurred: test message");
    assert_eq!(entry.context.get("message"), Some(&Value::from("test message")));
    assert_eq!(entry.context.get("payload"), Some(&Value::from("test")));
}

#[test]
fn test_request_failure_generic_error() {
    let body = json!({
        "error": "test error",
        "error_description": "test error description",
    })
    .to_string();
    let (error, entry) = handle(request_failure(Some(body.clone())));

    assert_eq!(error.name, "test error");
    assert_eq!(error.message, "An error occurred: test error description");
    assert_eq!(entry.context.get("message"), Some(&Value::from("test message")));
    assert_eq!(entry.context.get("payload"), Some(&Value::from(body)));
}

#[test]
fn test_request_failure_no_error_struct() {
    for body in ["[]", "{}", "\"text\"", "1"] {
        let (error, entry) = handle(request_failure(Some(body.to_string())));

        assert_eq!(error.name, "123", "body {body}");
        assert_eq!(error.message, "An error occurred: test message", "body {body}");
        assert_eq!(entry.context.get("payload"), Some(&Value::from(body)));
    }
}

#[test]
fn test_request_failure_error_response() {
    let body = r#"{"name":"error name","message":"error message","information_link":"error link"}"#;
    let (error, entry) = handle(request_failure(Some(body.to_string())));

    assert_eq!(error.name, "error name");
    assert_eq!(error.message, "An error occurred: error message");
    assert_eq!(entry.context.get("message"), Some(&Value::from("test message")));
    assert_eq!(entry.context.get("payload"), Some(&Value::from(body)));
}

#[test]
fn test_request_failure_error_response_details() {
    let body = r#"{"name":"error name","message":"error message","information_link":"error link","details":[{"field":"error field","issue":"error issue"}]}"#;
    let (error, entry) = handle(request_failure(Some(body.to_string())));

    assert_eq!(error.name, "error name");
    assert_eq!(
        error.message,
        "An error occurred: error message: error field, error issue"
    );
    assert_eq!(entry.context.get("payload"), Some(&Value::from(body)));
}

#[test]
fn test_request_failure_empty_details() {
    let body = r#"{"name":"error name","message":"error message","details":[]}"#;
    let (error, _) = handle(request_failure(Some(body.to_string())));

    assert_eq!(error.message, "An error occurred: error message");
}

#[test]
fn test_textual_failure_code() {
    let (error, _) = handle(CommunicationFailure::request(
        "ECONNRESET",
        "connection reset",
        None,
    ));

    assert_eq!(error.name, "ECONNRESET");
    assert_eq!(error.message, "An error occurred: connection reset");
}

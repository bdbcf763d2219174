//! Integration tests for the TelegramClient using mockito for HTTP mocking.

use contact_relay::error::RelayError;
use contact_relay::TelegramClient;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::io::Write;
use std::time::Duration;

const TOKEN: &str = "123456:test-token";
const PATH: &str = "/bot123456:test-token/sendMessage";

fn client_for(server: &ServerGuard) -> TelegramClient {
    TelegramClient::with_base_url(server.url(), TOKEN.to_string(), "-100200300".to_string())
}

#[test]
fn test_send_message_success() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "chat_id": "-100200300",
            "text": "<b>Hello</b>",
            "parse_mode": "HTML"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": {"message_id": 7}}"#)
        .create();

    let result = client_for(&server).send_message("<b>Hello</b>");

    mock.assert();
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_ok_false_is_rejection() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "description": "Forbidden: bot was blocked by the user"}"#)
        .create();

    let result = client_for(&server).send_message("hello");

    mock.assert();
    match result {
        Err(RelayError::Rejected(description)) => {
            assert!(description.contains("bot was blocked"));
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
}

#[test]
fn test_ok_false_without_description() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"ok": false}"#)
        .create();

    match client_for(&server).send_message("hello") {
        Err(RelayError::Rejected(description)) => {
            assert_eq!(description, "Telegram API returned error");
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
}

#[test]
fn test_http_error_status_uses_description() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
        )
        .create();

    match client_for(&server).send_message("hello") {
        Err(RelayError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Bad Request: chat not found");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_http_error_status_plain_body() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", PATH)
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    match client_for(&server).send_message("hello") {
        Err(RelayError::ApiError { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_non_json_success_body_is_error() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    let result = client_for(&server).send_message("hello");
    assert!(matches!(result, Err(RelayError::JsonError(_))));
}

#[test]
fn test_slow_api_times_out() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(br#"{"ok": true}"#)
        })
        .create();

    let client = TelegramClient::with_timeout(
        server.url(),
        TOKEN.to_string(),
        "-100200300".to_string(),
        Duration::from_millis(500),
    );

    let result = client.send_message("hello");
    assert!(result.is_err(), "a slow reply must not count as delivered");
}

#[test]
fn test_errors_never_contain_token() {
    // Nothing listens here, so the transport error is produced locally
    let client = TelegramClient::with_base_url(
        "http://127.0.0.1:9".to_string(),
        TOKEN.to_string(),
        "-100200300".to_string(),
    );

    let err = client.send_message("hello").unwrap_err();
    assert!(!err.to_string().contains("test-token"));
}

//! HTTP client tests against a local one-shot stub server.

use ai_visibility::client::{AnalysisBackend, HttpBackend, HttpBackendConfig};
use ai_visibility::error::{VisibilityError, GENERIC_FAILURE_MESSAGE};
use ai_visibility::session::{Orchestrator, SearchState};
use ai_visibility::ResultSchema;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Serve exactly one response and hand back the raw request body.
fn serve_once(status: u16, reason: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/analyze", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8(body).unwrap()
    });

    (endpoint, handle)
}

fn backend(endpoint: String) -> HttpBackend {
    HttpBackend::new(HttpBackendConfig {
        endpoint,
        timeout: Duration::from_secs(5),
        ..HttpBackendConfig::default()
    })
    .unwrap()
}

#[test]
fn posts_query_field_and_unwraps_envelope() {
    let (endpoint, server) = serve_once(
        200,
        "OK",
        r#"{"data": {"chatgpt_scores": {"cidr": {"score": 90}}}}"#,
    );
    let raw = backend(endpoint).analyze("https://example.com").unwrap();

    let request: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(request["url"], "https://example.com");
    assert_eq!(raw["chatgpt_scores"]["cidr"]["score"], 90);
}

#[test]
fn server_error_message_is_shown_verbatim() {
    let (endpoint, server) = serve_once(429, "Too Many Requests", r#"{"error": "rate limited"}"#);
    let err = backend(endpoint).analyze("acme").unwrap_err();
    server.join().unwrap();

    assert!(matches!(
        err,
        VisibilityError::ServerReported { status: 429, .. }
    ));
    assert_eq!(err.user_message(), "rate limited");
}

#[test]
fn empty_error_body_gets_generic_message() {
    let (endpoint, server) = serve_once(500, "Internal Server Error", "");
    let err = backend(endpoint).analyze("acme").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, VisibilityError::Transport { .. }));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn non_json_success_is_malformed() {
    let (endpoint, server) = serve_once(200, "OK", "<html>oops</html>");
    let err = backend(endpoint).analyze("acme").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, VisibilityError::MalformedResult(_)));
}

#[test]
fn connection_refused_is_a_transport_failure() {
    // Bind then drop to get a port nobody is listening on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = backend(format!("http://127.0.0.1:{port}/analyze"))
        .analyze("acme")
        .unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn orchestrator_end_to_end_over_http() {
    let (endpoint, server) = serve_once(200, "OK", r#"{"chatgpt_scores": {"cidr": {"score": 90}}}"#);
    let mut orchestrator = Orchestrator::new(Arc::new(backend(endpoint)), ResultSchema::Grid);

    let state = orchestrator.search("  https://example.com  ").unwrap();
    let request: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(request["url"], "https://example.com");

    let SearchState::Success { view, .. } = state else {
        panic!("expected success, got {}", state.name());
    };
    let ai_visibility::ResultView::Grid(grid) = view.as_ref() else {
        panic!("expected grid view");
    };
    assert_eq!(grid.platform_cards[0].badge.display, 23);
    assert_eq!(grid.platform_cards[0].badge.label, "Needs Improvement");
}

#[test]
fn failed_request_lands_in_failed_state() {
    let (endpoint, server) = serve_once(503, "Service Unavailable", r#"{"error": "maintenance"}"#);
    let mut orchestrator = Orchestrator::new(Arc::new(backend(endpoint)), ResultSchema::Auto);

    let state = orchestrator.search("acme").unwrap();
    server.join().unwrap();
    assert_eq!(state.error(), Some("maintenance"));
}

//! HTTP client for the analysis service.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{Map, Value};

use super::traits::AnalysisBackend;
use crate::error::{Result, TransportErrorKind, VisibilityError};
use crate::scoring::unwrap_envelope;

/// HTTP backend configuration.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Full URL the query is POSTed to
    pub endpoint: String,
    /// Name of the JSON field carrying the query
    pub query_field: String,
    /// Request timeout
    pub timeout: Duration,
    /// Strip a `{data: ...}` envelope from successful responses
    pub unwrap_envelope: bool,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/analyze".to_string(),
            query_field: "url".to_string(),
            timeout: Duration::from_secs(30),
            unwrap_envelope: true,
        }
    }
}

/// Blocking HTTP backend: one POST per query.
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

/// Helper to convert reqwest errors to transport errors
fn network_error(msg: &str, err: reqwest::Error) -> VisibilityError {
    VisibilityError::transport(msg, TransportErrorKind::Network(err.to_string()))
}

impl HttpBackend {
    /// Create a new HTTP backend.
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                VisibilityError::transport(
                    "Failed to create HTTP client",
                    TransportErrorKind::ClientSetup(e.to_string()),
                )
            })?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn request_body(&self, query: &str) -> Value {
        let mut body = Map::new();
        body.insert(
            self.config.query_field.clone(),
            Value::String(query.to_string()),
        );
        Value::Object(body)
    }
}

impl AnalysisBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    fn analyze(&self, query: &str) -> Result<Value> {
        tracing::info!(endpoint = %self.config.endpoint, "Submitting analysis request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(query))
            .send()
            .map_err(|e| {
                tracing::warn!("Analysis request failed: {}", e);
                network_error("Failed to send analysis request", e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| network_error("Failed to read analysis response", e))?;

        let result = interpret_response(status, &body, self.config.unwrap_envelope);
        match &result {
            Ok(_) => tracing::info!(status, "Analysis request completed"),
            Err(e) => tracing::warn!(status, "Analysis request failed: {}", e),
        }
        result
    }
}

/// Turn a status code and body into a payload or a classified error.
///
/// A non-2xx response carrying a JSON `error` string is a
/// [`VisibilityError::ServerReported`]; any other non-2xx response is a
/// transport failure. A 2xx body that is not JSON is a malformed result.
pub fn interpret_response(status: u16, body: &str, unwrap: bool) -> Result<Value> {
    if !(200..300).contains(&status) {
        return Err(match extract_error_message(body) {
            Some(message) => VisibilityError::server_reported(status, message),
            None => VisibilityError::transport(
                format!("analysis service returned status {status}"),
                TransportErrorKind::Status {
                    status,
                    body: body.to_string(),
                },
            ),
        });
    }

    let raw: Value = serde_json::from_str(body)
        .map_err(|e| VisibilityError::malformed(format!("response is not JSON: {e}")))?;

    Ok(if unwrap { unwrap_envelope(raw) } else { raw })
}

/// Read the `error` member of a JSON error body, if it is a non-empty string.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let config = HttpBackendConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5000/analyze");
        assert_eq!(config.query_field, "url");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_request_body_uses_configured_field() {
        let backend = HttpBackend::new(HttpBackendConfig {
            query_field: "company_name".to_string(),
            ..HttpBackendConfig::default()
        })
        .unwrap();
        assert_eq!(
            backend.request_body("Acme"),
            json!({"company_name": "Acme"})
        );
    }

    #[test]
    fn test_server_reported_error() {
        let err = interpret_response(429, r#"{"error": "rate limited"}"#, true).unwrap_err();
        assert!(matches!(err, VisibilityError::ServerReported { status: 429, .. }));
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn test_error_without_message_is_transport() {
        for body in ["", "<html>oops</html>", r#"{"error": 12}"#, r#"{"error": ""}"#] {
            let err = interpret_response(500, body, true).unwrap_err();
            assert!(
                matches!(err, VisibilityError::Transport { .. }),
                "body {body:?} gave {err:?}"
            );
            assert_eq!(err.user_message(), crate::error::GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_success_unwraps_envelope_when_enabled() {
        let body = r#"{"data": {"claude_scores": {}}}"#;
        assert_eq!(
            interpret_response(200, body, true).unwrap(),
            json!({"claude_scores": {}})
        );
        assert_eq!(
            interpret_response(200, body, false).unwrap(),
            json!({"data": {"claude_scores": {}}})
        );
    }

    #[test]
    fn test_success_with_non_json_body_is_malformed() {
        let err = interpret_response(200, "OK", true).unwrap_err();
        assert!(matches!(err, VisibilityError::MalformedResult(_)));
    }
}

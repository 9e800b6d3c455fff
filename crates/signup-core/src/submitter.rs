//! Signup submitter implementation.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::SignupConfig;
use crate::error::{SubmitError, TransportError};
use crate::types::{Accepted, SignupRequest, SubmissionOutcome};

const USER_AGENT: &str = concat!("beta-signup/", env!("CARGO_PKG_VERSION"));

/// Posts signup requests to one configured endpoint.
///
/// Holds no per-submission state: every call is an independent round trip.
#[derive(Debug, Clone)]
pub struct SignupSubmitter {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl SignupSubmitter {
    /// Create a submitter for `endpoint`. `None` or `""` means unconfigured.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoint: Option<String>) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(http, endpoint))
    }

    /// Create a submitter from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Transport` if the HTTP client cannot be built.
    pub fn from_config(cfg: &SignupConfig) -> Result<Self, SubmitError> {
        Self::new(cfg.endpoint.clone())
    }

    /// Create a submitter around an existing client.
    pub fn with_client(http: reqwest::Client, endpoint: Option<String>) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().filter(|e| !e.is_empty())
    }

    /// Submit `request` and map the result to a user-facing outcome.
    ///
    /// Never fails: every error path becomes an `error` outcome.
    pub async fn submit(&self, request: &SignupRequest) -> SubmissionOutcome {
        let result = self.try_submit(request).await;
        match &result {
            Ok(accepted) => info!(status = accepted.status_code, "signup accepted"),
            Err(SubmitError::ConfigurationMissing) => {
                warn!("signup endpoint not configured, request not sent");
            }
            Err(SubmitError::ServerReported(msg)) => {
                warn!(reason = %msg, "signup rejected by server");
            }
            Err(SubmitError::UnrecognizedResponse { status_code }) => {
                warn!(status = status_code, "unrecognized signup response");
            }
            Err(SubmitError::Transport(err)) => warn!(error = %err, "signup transport failure"),
        }
        SubmissionOutcome::from(result)
    }

    /// Submit `request` and return the typed result.
    ///
    /// # Errors
    ///
    /// Returns one `SubmitError` variant per failure kind; see
    /// [`interpret_response`] for how the reply is classified.
    pub async fn try_submit(&self, request: &SignupRequest) -> Result<Accepted, SubmitError> {
        let Some(endpoint) = self.endpoint() else {
            return Err(SubmitError::ConfigurationMissing);
        };

        debug!(endpoint, "posting signup");
        let resp = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "signup response received");

        interpret_response(status, &body)
    }
}

/// Classify a response. First match wins:
///
/// 1. body is not JSON, or is `null` → `Transport`
/// 2. truthy `error` field → `ServerReported` with that text
/// 3. truthy `message` field or 2xx status → `Accepted`
/// 4. anything else → `UnrecognizedResponse`
///
/// # Errors
///
/// Returns the `SubmitError` for rules 1, 2 and 4.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Accepted, SubmitError> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(TransportError::NullBody.into());
    }

    // `Value::get` yields `None` for non-objects, so strings, numbers and
    // arrays fall through to the status check.
    if let Some(error) = value.get("error").filter(|v| is_truthy(v)) {
        return Err(SubmitError::ServerReported(value_text(error)));
    }

    let message = value.get("message");
    if message.is_some_and(is_truthy) || status.is_success() {
        return Ok(Accepted {
            status_code: status.as_u16(),
            server_message: message.and_then(Value::as_str).map(str::to_owned),
        });
    }

    Err(SubmitError::UnrecognizedResponse {
        status_code: status.as_u16(),
    })
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{MSG_SUCCESS, MSG_TRANSPORT, MSG_UNRECOGNIZED, OutcomeStatus};

    fn outcome(status: u16, body: &str) -> SubmissionOutcome {
        SubmissionOutcome::from(interpret_response(StatusCode::from_u16(status).unwrap(), body))
    }

    // ── truthiness ───────────────────────────────────────────────────

    #[test]
    fn truthiness_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    // ── explicit error ───────────────────────────────────────────────

    #[test]
    fn error_field_passed_through_verbatim() {
        let out = outcome(400, r#"{"error":"Email already registered"}"#);
        assert_eq!(out, SubmissionOutcome::error("Email already registered"));
    }

    #[test]
    fn error_field_beats_success_status() {
        let out = outcome(200, r#"{"error":"X","message":"ok"}"#);
        assert_eq!(out, SubmissionOutcome::error("X"));
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        assert!(outcome(200, r#"{"error":""}"#).is_success());
        assert!(outcome(200, r#"{"error":null}"#).is_success());
        assert!(outcome(201, r#"{"error":false}"#).is_success());
    }

    #[test]
    fn non_string_error_rendered_as_json() {
        let err = interpret_response(StatusCode::OK, r#"{"error":{"code":7}}"#).unwrap_err();
        assert!(matches!(err, SubmitError::ServerReported(ref m) if m == r#"{"code":7}"#));
    }

    // ── success ──────────────────────────────────────────────────────

    #[test]
    fn message_field_succeeds_even_on_failure_status() {
        let out = outcome(500, r#"{"message":"Signed up"}"#);
        assert_eq!(out.status, OutcomeStatus::Success);
        assert_eq!(out.message, MSG_SUCCESS);
    }

    #[test]
    fn server_message_kept_on_typed_path() {
        let accepted = interpret_response(StatusCode::CREATED, r#"{"message":"welcome"}"#).unwrap();
        assert_eq!(accepted.status_code, 201);
        assert_eq!(accepted.server_message.as_deref(), Some("welcome"));
    }

    #[test]
    fn empty_object_with_success_status() {
        assert_eq!(outcome(200, "{}"), SubmissionOutcome::success());
        assert_eq!(outcome(299, "{}"), SubmissionOutcome::success());
    }

    #[test]
    fn non_object_body_falls_through_to_status() {
        assert!(outcome(200, r#""ok""#).is_success());
        assert!(outcome(200, "[1,2]").is_success());
        assert_eq!(outcome(404, "42"), SubmissionOutcome::error(MSG_UNRECOGNIZED));
    }

    // ── unrecognized ─────────────────────────────────────────────────

    #[test]
    fn empty_object_with_failure_status() {
        assert_eq!(outcome(500, "{}"), SubmissionOutcome::error(MSG_UNRECOGNIZED));
        assert_eq!(outcome(302, "{}"), SubmissionOutcome::error(MSG_UNRECOGNIZED));
    }

    #[test]
    fn empty_message_does_not_count() {
        let err = interpret_response(StatusCode::BAD_REQUEST, r#"{"message":""}"#).unwrap_err();
        assert!(matches!(err, SubmitError::UnrecognizedResponse { status_code: 400 }));
    }

    // ── transport ────────────────────────────────────────────────────

    #[test]
    fn unparsable_body_is_transport_failure() {
        assert_eq!(outcome(200, "<html>oops</html>"), SubmissionOutcome::error(MSG_TRANSPORT));
        assert_eq!(outcome(502, ""), SubmissionOutcome::error(MSG_TRANSPORT));
    }

    #[test]
    fn null_body_is_transport_failure() {
        let err = interpret_response(StatusCode::OK, "null").unwrap_err();
        assert!(matches!(err, SubmitError::Transport(TransportError::NullBody)));
    }

    // ── configuration ────────────────────────────────────────────────

    #[tokio::test]
    async fn empty_endpoint_is_unconfigured() {
        let submitter = SignupSubmitter::with_client(reqwest::Client::new(), Some(String::new()));
        assert!(submitter.endpoint().is_none());
        let err = submitter
            .try_submit(&SignupRequest::new("a@b.c", "A"))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::ConfigurationMissing));
    }
}

//! Public types for the signup workflow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Shown when no endpoint is configured.
pub const MSG_CONFIGURATION: &str = "Configuration error. Please contact support.";
/// Shown for any network or body-parse failure.
pub const MSG_TRANSPORT: &str = "Unable to submit. Please check your connection and try again.";
/// Shown on every success, whatever the server said.
pub const MSG_SUCCESS: &str = "Thank you for signing up! We'll be in touch soon.";
/// Shown when the response matches no known shape.
pub const MSG_UNRECOGNIZED: &str = "Something went wrong. Please try again.";

/// The form payload. Sent as-is; no format validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Reset both fields to empty strings.
    pub fn clear(&mut self) {
        self.email.clear();
        self.name.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.name.is_empty()
    }
}

/// Where a form is in its submit cycle.
///
/// `Idle` is initial, `Loading` lasts for exactly one in-flight request, and
/// `Success`/`Error` hold until the next submit re-enters `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// `true` for `Success` and `Error`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal status of one outcome. Only the two terminal statuses exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

impl From<OutcomeStatus> for SubmissionStatus {
    fn from(status: OutcomeStatus) -> Self {
        match status {
            OutcomeStatus::Success => Self::Success,
            OutcomeStatus::Error => Self::Error,
        }
    }
}

/// The only output of [`SignupSubmitter::submit`](crate::SignupSubmitter::submit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl SubmissionOutcome {
    pub fn success() -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: MSG_SUCCESS.to_owned(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

impl From<&SubmitError> for SubmissionOutcome {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::ConfigurationMissing => Self::error(MSG_CONFIGURATION),
            SubmitError::ServerReported(msg) => Self::error(msg.clone()),
            SubmitError::UnrecognizedResponse { .. } => Self::error(MSG_UNRECOGNIZED),
            SubmitError::Transport(_) => Self::error(MSG_TRANSPORT),
        }
    }
}

impl From<Result<Accepted, SubmitError>> for SubmissionOutcome {
    fn from(result: Result<Accepted, SubmitError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(err) => Self::from(&err),
        }
    }
}

/// A submission the server accepted.
///
/// The user-facing outcome always uses [`MSG_SUCCESS`]; the server's own
/// `message` is kept here for callers that want it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// The body's `message` field, when it was a string.
    pub server_message: Option<String>,
}

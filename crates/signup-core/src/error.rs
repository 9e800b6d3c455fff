//! Error types for `signup-core`.
//!
//! Every [`SubmitError`] variant is recoverable: the submitter flattens it
//! into a [`SubmissionOutcome`](crate::SubmissionOutcome) with a fixed,
//! user-facing message. The `Display` text here is for logs, not for users.

/// Why a signup submission did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No endpoint configured. No request was sent.
    #[error("signup endpoint is not configured")]
    ConfigurationMissing,

    /// The response body carried a truthy `error` field.
    #[error("server rejected signup: {0}")]
    ServerReported(String),

    /// The body parsed but was neither an explicit error nor a success.
    #[error("unrecognized signup response (HTTP {status_code})")]
    UnrecognizedResponse {
        /// HTTP status code of the response.
        status_code: u16,
    },

    /// The request never produced a usable JSON body.
    #[error("signup transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Lower-level failures that all surface as the same connection message.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// DNS, connect, TLS, invalid URL or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is JSON `null`, which has no fields to inspect.
    #[error("response body is null")]
    NullBody,
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(err))
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(TransportError::Json(err))
    }
}

/// Misuse of the [`SignupForm`](crate::SignupForm) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A submission is already in flight for this form.
    #[error("a submission is already in progress")]
    InFlight,

    /// `finish` was called without a matching `begin`.
    #[error("no submission is in progress")]
    NotInFlight,
}

//! Beta signup submission workflow.
//!
//! Posts a [`SignupRequest`] as JSON to a configured endpoint and maps the
//! reply to a [`SubmissionOutcome`]: a status plus a message fit to show a
//! user. Every failure is recovered into an `error` outcome; nothing is
//! retried.
//!
//! [`SignupForm`] wraps the workflow in the `idle → loading → success|error`
//! state a front end renders.
//!
//! # Example
//!
//! ```rust,no_run
//! use signup_core::{SignupConfig, SignupForm, SignupSubmitter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let submitter = SignupSubmitter::from_config(&SignupConfig::from_env())?;
//! let mut form = SignupForm::new();
//! form.set_email("ada@example.com");
//! form.set_name("Ada");
//! let outcome = form.submit(&submitter).await?;
//! println!("{}: {}", form.status(), outcome.message);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod form;
mod submitter;
mod types;

pub use config::{ENV_API_URL, ENV_API_URL_LEGACY, ENV_LOG_LEVEL, SignupConfig};
pub use error::{FormError, SubmitError, TransportError};
pub use form::SignupForm;
pub use submitter::{SignupSubmitter, interpret_response};
pub use types::{
    Accepted, MSG_CONFIGURATION, MSG_SUCCESS, MSG_TRANSPORT, MSG_UNRECOGNIZED, OutcomeStatus,
    SignupRequest, SubmissionOutcome, SubmissionStatus,
};

/// Submit `request` to `endpoint` with a one-off client.
///
/// `None` or an empty endpoint yields the configuration error without any
/// network call. Prefer a shared [`SignupSubmitter`] when submitting more
/// than once.
pub async fn submit(request: &SignupRequest, endpoint: Option<&str>) -> SubmissionOutcome {
    let endpoint = endpoint.filter(|e| !e.is_empty()).map(str::to_owned);
    match SignupSubmitter::new(endpoint) {
        Ok(submitter) => submitter.submit(request).await,
        Err(err) => SubmissionOutcome::from(&err),
    }
}

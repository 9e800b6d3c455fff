//! Form state for one signup form instance.
//!
//! Binds a [`SignupRequest`] to its [`SubmissionStatus`] and message so a
//! front end only has to render fields. Transitions:
//!
//! ```text
//! idle ──begin──▶ loading ──finish──▶ success | error ──begin──▶ loading
//! ```

use tracing::debug;

use crate::error::FormError;
use crate::submitter::SignupSubmitter;
use crate::types::{SignupRequest, SubmissionOutcome, SubmissionStatus};

/// One signup form: its fields, status and last message.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    request: SignupRequest,
    status: SubmissionStatus,
    message: String,
}

impl SignupForm {
    /// An idle form with empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with prefilled fields.
    pub fn with_request(request: SignupRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// Current field values.
    pub fn request(&self) -> &SignupRequest {
        &self.request
    }

    /// Current status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Last outcome message. Empty while idle or loading.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Update the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.request.email = email.into();
    }

    /// Update the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.request.name = name.into();
    }

    /// Enter `loading` and return the request to send.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InFlight` if a submission is already running.
    pub fn begin(&mut self) -> Result<SignupRequest, FormError> {
        if self.status == SubmissionStatus::Loading {
            return Err(FormError::InFlight);
        }
        debug!(from = %self.status, "signup form submitting");
        self.status = SubmissionStatus::Loading;
        self.message.clear();
        Ok(self.request.clone())
    }

    /// Record `outcome`. A success clears the request fields.
    ///
    /// # Errors
    ///
    /// Returns `FormError::NotInFlight` unless the form is `loading`.
    pub fn finish(&mut self, outcome: SubmissionOutcome) -> Result<(), FormError> {
        if self.status != SubmissionStatus::Loading {
            return Err(FormError::NotInFlight);
        }
        self.status = outcome.status.into();
        self.message = outcome.message;
        if self.status == SubmissionStatus::Success {
            self.request.clear();
        }
        Ok(())
    }

    /// Run one full submit cycle and return the outcome that was recorded.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InFlight` if a submission is already running.
    pub async fn submit(&mut self, submitter: &SignupSubmitter) -> Result<SubmissionOutcome, FormError> {
        let request = self.begin()?;
        let outcome = submitter.submit(&request).await;
        self.finish(outcome.clone())?;
        Ok(outcome)
    }
}

//! Form submission controller.

use crate::domain::ContactForm;
use crate::error::FormError;
use crate::validation::{client, FieldError, FieldValidation, ValidationReport};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const FIX_ERRORS: &str = "Please correct the errors in the form";
pub const THANK_YOU: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";
pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// How a status message should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The message shown under the form after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
    /// Per-field errors from the advisory pass, empty otherwise
    pub field_errors: Vec<FieldError>,
}

impl FormStatus {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// What the endpoint answers with.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EndpointReply {
    success: bool,
    message: Option<String>,
}

/// Submits contact forms to one endpoint.
pub struct FormController {
    endpoint: String,
    agent: ureq::Agent,
    submitting: AtomicBool,
}

/// Holds the busy flag for the duration of one request.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, FormError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| FormError::AlreadySubmitting)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl FormController {
    /// Create a controller posting to `endpoint`, e.g. `http://localhost:3000/api/contact`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();

        Self {
            endpoint: endpoint.into(),
            agent,
            submitting: AtomicBool::new(false),
        }
    }

    /// Whether the submit control is currently disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Advisory validation pass.
    pub fn validate(&self, form: &ContactForm) -> ValidationReport {
        client::validate_form(form)
    }

    /// Advisory check of a single input, e.g. when it loses focus.
    pub fn validate_input(
        &self,
        name: &str,
        value: Option<&str>,
        required: bool,
    ) -> FieldValidation {
        client::validate_input(name, value, required)
    }

    /// Validate and, when the form looks fine, post it.
    ///
    /// # Errors
    ///
    /// Returns `FormError::AlreadySubmitting` while another submission from
    /// this controller is in flight.
    pub fn submit(&self, form: &ContactForm) -> Result<FormStatus, FormError> {
        let report = self.validate(form);
        if !report.is_valid() {
            return Ok(FormStatus {
                field_errors: report.errors(),
                ..FormStatus::error(FIX_ERRORS)
            });
        }

        let _in_flight = InFlight::acquire(&self.submitting)?;
        Ok(self.post(&form.trimmed()))
    }

    fn post(&self, payload: &ContactForm) -> FormStatus {
        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(payload);

        let (ok, response) = match result {
            Ok(response) => (true, response),
            Err(ureq::Error::Status(_, response)) => (false, response),
            Err(ureq::Error::Transport(e)) => {
                tracing::warn!("Contact submission failed: {}", e);
                return FormStatus::error(NETWORK_ERROR);
            }
        };

        let reply: EndpointReply = match response.into_json() {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Unreadable contact response: {}", e);
                return FormStatus::error(NETWORK_ERROR);
            }
        };

        if ok && reply.success {
            FormStatus::success(THANK_YOU)
        } else {
            FormStatus::error(
                reply
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            )
        }
    }
}

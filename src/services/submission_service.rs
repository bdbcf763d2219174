//! Submission service layer.
//!
//! Business logic for one contact submission: validate, sanitize, format,
//! relay. Exactly one outcome per call, no retries.

use crate::domain::{ContactForm, EmailAddress, PhoneNumber, Submission};
use crate::error::{ContactError, ContactResult};
use crate::format::format_notification;
use crate::relay::{Relay, RelayOutcome};
use crate::sanitize::sanitize_input;
use crate::validation::server;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Text returned to the visitor once the notification is delivered.
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

/// Submission service trait for business operations.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Run the full pipeline for one form and return the thank-you text.
    async fn submit(&self, form: &ContactForm) -> ContactResult<String>;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    /// `None` when the bot token or chat id is not configured
    relay: Option<Arc<dyn Relay>>,
    site_name: String,
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(relay: Option<Arc<dyn Relay>>, site_name: impl Into<String>) -> Self {
        Self {
            relay,
            site_name: site_name.into(),
        }
    }

    /// Sanitize every field of an already validated form.
    ///
    /// The email is trimmed and normalized first. The phone is only kept
    /// when one was provided and it is still a well-formed number.
    pub fn sanitize(form: &ContactForm) -> Submission {
        let email = form.email.as_deref().map(str::trim).map(|raw| {
            EmailAddress::new(raw)
                .map(|e| e.normalize().into_inner())
                .unwrap_or_else(|_| raw.to_string())
        });

        let phone = form
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .and_then(|p| PhoneNumber::new(sanitize_input(Some(p))).ok());

        Submission {
            name: sanitize_input(form.name.as_deref()),
            email: sanitize_input(email.as_deref()),
            phone,
            message: sanitize_input(form.message.as_deref()),
        }
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    async fn submit(&self, form: &ContactForm) -> ContactResult<String> {
        let report = server::validate_form(form);
        if !report.is_valid() {
            let errors = report.errors();
            tracing::debug!(failed = errors.len(), "Submission rejected by validation");
            return Err(ContactError::Validation(errors));
        }

        let submission = Self::sanitize(form);

        let emptied = submission.empty_required_fields();
        if !emptied.is_empty() {
            tracing::debug!(?emptied, "Required fields empty after sanitization");
            return Err(ContactError::MissingRequiredFields);
        }

        let notification = format_notification(&submission, Utc::now(), &self.site_name);

        let Some(relay) = &self.relay else {
            tracing::error!("Telegram credentials not configured");
            return Err(ContactError::Configuration);
        };

        let outcome = RelayOutcome::from(relay.send(notification.as_str()).await);

        if outcome.delivered {
            tracing::info!("Contact submission relayed to Telegram");
            Ok(SUCCESS_MESSAGE.to_string())
        } else {
            let reason = outcome
                .reason
                .unwrap_or_else(|| "unknown relay failure".to_string());
            tracing::error!(%reason, "Telegram API error");
            Err(ContactError::DeliveryFailed { reason })
        }
    }
}

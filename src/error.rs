//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur when relaying a notification to Telegram.
#[derive(Error, Debug)]
pub enum RelayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// API answered but reported the message as not accepted
    #[error("Message rejected: {0}")]
    Rejected(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The blocking relay task could not be joined
    #[error("Relay task failed: {0}")]
    TaskFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Failures of a single contact submission.
///
/// Every variant maps to exactly one JSON response; see
/// [`crate::server::response`] for the mapping. Only `Validation` carries
/// detail back to the caller.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One or more fields failed server-side validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// A required field became empty during sanitization
    #[error("Required fields are missing")]
    MissingRequiredFields,

    /// Telegram bot token or chat id is not configured
    #[error("Relay is not configured")]
    Configuration,

    /// The notification could not be delivered
    #[error("Delivery failed: {reason}")]
    DeliveryFailed { reason: String },

    /// Anything not anticipated by the pipeline
    #[error("Unexpected error: {0}")]
    Internal(String),
}

/// Errors returned by the form controller before or instead of a status.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A submission from this controller is still in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

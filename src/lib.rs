//! Contact Relay - validates contact form submissions and forwards them to Telegram.
//!
//! One HTTP request comes in, at most one `sendMessage` call goes out, and the
//! caller gets exactly one JSON answer. Nothing is stored between requests.
//!
//! # Architecture
//!
//! - **domain**: Raw form, validated submission, email and phone value objects
//! - **validation**: Binding server rules and advisory client rules
//! - **sanitize**: Best-effort removal of markup and script-like substrings
//! - **format**: Rendering a submission into a notification
//! - **relay**: Telegram Bot API client behind an async `Relay` trait
//! - **services**: The submission pipeline
//! - **server**: axum routes, error-to-response mapping
//! - **form**: Client-side form controller
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod format;
pub mod relay;
pub mod sanitize;
pub mod server;
pub mod services;
pub mod validation;

pub use config::Config;
pub use domain::{ContactForm, Field, Submission};
pub use error::{ConfigError, ContactError, FormError, RelayError};
pub use form::{FormController, FormStatus};
pub use format::{format_notification, NotificationMessage};
pub use relay::{Relay, RelayOutcome, TelegramClient, TelegramRelay};
pub use sanitize::sanitize_input;
pub use server::{router, AppState};
pub use services::{SubmissionService, SubmissionServiceImpl};
pub use validation::{FieldError, FieldValidation, ValidationReport};

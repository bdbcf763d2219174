//! Application service layer.
//!
//! Services contain business logic and sit between the HTTP handlers and
//! the outbound relay.

mod submission_service;

pub use submission_service::{SubmissionService, SubmissionServiceImpl, SUCCESS_MESSAGE};

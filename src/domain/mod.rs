//! Domain value objects and types.
//!
//! This module contains the shapes a contact submission passes through
//! (raw form, validated submission) and type-safe wrappers for the two
//! fields with format rules, email addresses and phone numbers.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;
pub mod submission;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::Field;
pub use phone::PhoneNumber;
pub use submission::{ContactForm, Submission};

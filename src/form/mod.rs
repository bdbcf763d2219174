//! Client-side form controller.
//!
//! A server-agnostic rendition of the browser script that drives the
//! contact form: advisory validation, one POST per submission, a busy flag
//! for the submit control, and a user-facing status message.

mod controller;

pub use controller::{
    FormController, FormStatus, StatusKind, FIX_ERRORS, GENERIC_ERROR, NETWORK_ERROR, THANK_YOU,
};

//! JSON response bodies and the error-to-response boundary.

use crate::error::ContactError;
use crate::validation::FieldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::any::Any;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const REQUIRED_FIELDS_MISSING: &str = "Required fields are missing";
pub const CONFIGURATION_ERROR: &str = "Server configuration error. Please contact support.";
pub const DELIVERY_FAILED: &str =
    "Failed to send message. Please try again later or contact us directly.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Body of every `/api/contact` response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

/// Body of `/api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        // Upstream detail stays in the logs; the caller only sees fixed text
        let (status, body) = match self {
            ContactError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiResponse {
                    errors: Some(errors),
                    ..ApiResponse::failure(VALIDATION_FAILED)
                },
            ),
            ContactError::MissingRequiredFields => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(REQUIRED_FIELDS_MISSING),
            ),
            ContactError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure(CONFIGURATION_ERROR),
            ),
            ContactError::DeliveryFailed { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure(DELIVERY_FAILED),
            ),
            ContactError::Internal(detail) => {
                tracing::error!(%detail, "Server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(UNEXPECTED_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a panic that escaped every handler.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "Unhandled error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}

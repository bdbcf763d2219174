//! HTTP handlers for the contact endpoint and health check.

use crate::domain::ContactForm;
use crate::error::{ContactError, ContactResult};
use crate::server::response::{ApiResponse, HealthResponse};
use crate::server::AppState;
use crate::validation::FieldError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Message reported for a body that is not a JSON object of strings.
pub const MALFORMED_BODY: &str = "Request body must be a JSON object with string fields";

/// `POST /api/contact`
///
/// The pipeline runs in its own task so that a panic anywhere inside it
/// still produces one JSON response.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ContactResult<Json<ApiResponse>> {
    let form = parse_form(body)?;

    let service = state.service.clone();
    let message = tokio::spawn(async move { service.submit(&form).await })
        .await
        .map_err(|e| ContactError::Internal(e.to_string()))??;

    Ok(Json(ApiResponse::success(message)))
}

/// Accept only a JSON object whose known keys hold strings or `null`.
///
/// Deserializing straight into the form would also take a JSON array and
/// fill the fields by position.
fn parse_form(body: Result<Json<Value>, JsonRejection>) -> ContactResult<ContactForm> {
    let Json(value) = body.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected contact body");
        malformed_body()
    })?;

    if !value.is_object() {
        tracing::debug!("Contact body is not a JSON object");
        return Err(malformed_body());
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected contact body");
        malformed_body()
    })
}

fn malformed_body() -> ContactError {
    ContactError::Validation(vec![FieldError {
        field: "body".to_string(),
        message: MALFORMED_BODY.to_string(),
    }])
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

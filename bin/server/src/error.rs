//! HTTP error responses for the webhook.
//!
//! Details of a failed turn are logged; the body only says what the caller
//! has to fix.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use factdeck_dialog::DialogError;
use rootcause::Report;

/// Errors returned by webhook handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The intent or its parameters cannot be served.
    BadRequest(DialogError),
    /// The conversation data does not hold usable fact pools.
    InvalidSession(Report<DialogError>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(err) => {
                tracing::warn!(error = %err, "Rejected webhook request");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::InvalidSession(report) => {
                tracing::error!(error = %report, "Failed to answer turn");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "conversation data does not hold valid fact pools".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses.
 *
 * # Response Format
 *
 * Validation errors render the RealWorld field-level body:
 *
 * ```json
 * {"errors": {"title": ["can't be blank"]}}
 * ```
 *
 * Every other error renders a single message:
 *
 * ```json
 * {"error": "article not found", "status": 404}
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // The client gets a generic message; the detail goes to the log.
            tracing::error!("request failed: {self:?}");
        }

        let body = match &self {
            ApiError::Validation(errors) => serde_json::json!({ "errors": errors }),
            _ => serde_json::json!({
                "error": self.message(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

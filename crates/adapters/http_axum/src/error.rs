//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stockroom_domain::error::{InventoryError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`InventoryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(InventoryError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            InventoryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            InventoryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            InventoryError::IdsExhausted(err) => {
                tracing::error!(error = %err, "cannot assign item id");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            InventoryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "item storage failure".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

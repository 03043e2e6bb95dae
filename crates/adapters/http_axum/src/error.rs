//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homecat_domain::error::CatalogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatalogError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CatalogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatalogError::Conflict(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatalogError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(status = %status, error = %message, "request rejected");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

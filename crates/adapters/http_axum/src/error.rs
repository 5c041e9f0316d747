//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use jobtrack_domain::error::{JobTrackError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`JobTrackError`] to an HTTP response with appropriate status code.
pub struct ApiError(JobTrackError);

impl From<JobTrackError> for ApiError {
    fn from(err: JobTrackError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::MalformedBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            JobTrackError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            JobTrackError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            JobTrackError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

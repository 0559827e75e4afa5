use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::classes::ClassesError;
use crate::models::ErrorBody;

#[derive(Debug)]
pub enum ApiError {
    MissingFilter,
    InvalidFilter,
    CreateFailed,
    Unavailable,
    Internal(String),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            ApiError::MissingFilter => {
                (StatusCode::BAD_REQUEST, "Missing filters to search classes")
            }
            ApiError::InvalidFilter => {
                (StatusCode::BAD_REQUEST, "Invalid filters to search classes")
            }
            ApiError::CreateFailed => (
                StatusCode::BAD_REQUEST,
                "Unexpected error while creating new class",
            ),
            ApiError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable"),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClassesError> for ApiError {
    fn from(value: ClassesError) -> Self {
        error!("Classes query failed: {value}");
        ApiError::Internal("Failed to search classes".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingFilter.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::CreateFailed.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

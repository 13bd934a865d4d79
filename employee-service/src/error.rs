use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use shared::responses::ErrorResponse;
use thiserror::Error;

use crate::api::message::message;
use crate::domain::validation::ValidationErrors;

pub const INTERNAL_ERROR_BODY: &str = "An internal server error occurred. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected server error occurred.";
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required.";

const BASIC_CHALLENGE: &str = r#"Basic realm="employee-service", charset="UTF-8""#;

/// Application-level errors for the employee service.
///
/// Each variant maps to an HTTP status code via the [`IntoResponse`] implementation.
#[derive(Debug, Error)]
pub enum EmployeeServiceError {
    /// Requested employee id or name does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Payload failed field constraints.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Request could not be interpreted (missing id, malformed body or path).
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Missing or wrong Basic credentials.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for EmployeeServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for EmployeeServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for EmployeeServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl EmployeeServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EmployeeServiceError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Server error");
        } else {
            tracing::warn!(error = %self, %status, "Client error");
        }

        match self {
            Self::NotFound(text) | Self::BadRequest(text) => (status, message(text)).into_response(),
            Self::Validation(errors) => {
                (status, message("Validation failed."), axum::Json(errors)).into_response()
            }
            Self::Unauthorized => (
                status,
                [(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(BASIC_CHALLENGE),
                )],
                message(UNAUTHORIZED_MESSAGE),
                axum::Json(ErrorResponse::new(UNAUTHORIZED_MESSAGE)),
            )
                .into_response(),
            Self::Internal(_) | Self::Database(_) => (
                status,
                message(INTERNAL_ERROR_MESSAGE),
                axum::Json(ErrorResponse::new(INTERNAL_ERROR_BODY)),
            )
                .into_response(),
        }
    }
}

//! # HTTP Errors
//!
//! Every failure a handler can produce, and the JSON body each one answers with.

use crate::product_actor::ProductError;
use crate::validation::Violation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// The body failed field validation.
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    /// A read targeted an id that does not exist.
    #[error("Product Not Found")]
    ProductNotFound,

    /// A replace or patch targeted an id that does not exist.
    #[error("Product Not Found")]
    UpdateTargetNotFound,

    /// No route matches the method and path.
    #[error("Route not found")]
    RouteNotFound,

    /// The body could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ProductNotFound | ApiError::UpdateTargetNotFound | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a client error raised while reading.
    pub fn for_read(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::ProductNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }

    /// Maps a client error raised while replacing or patching.
    pub fn for_update(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::UpdateTargetNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Body of generic errors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

#[derive(Serialize)]
struct ValidationResponse {
    errors: Vec<Violation>,
}

#[derive(Serialize)]
struct UpdateNotFoundResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationResponse { errors })).into_response()
            }
            ApiError::UpdateTargetNotFound => (
                status,
                Json(UpdateNotFoundResponse { error: message }),
            )
                .into_response(),
            other => {
                if let ApiError::Internal(detail) = &other {
                    error!(error = %detail, "Request failed");
                }
                let body = ErrorResponse {
                    message,
                    status_code: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

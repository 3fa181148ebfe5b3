//! Unified error handling.
//!
//! Provides a unified `AppError` type that every JSON route handler returns.
//! The domain has two failure kinds: a missing record (404) and an operation
//! that the current state does not allow (400). Requests the service cannot
//! accept at all (malformed bodies, amounts out of range) are rejected too.
//! Every error body is `{"detail": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not allowed in the current state (e.g. checking out an empty cart).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// JSON body could not be read or deserialized.
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidState(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Client-facing message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::InvalidState(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CartNotFound(_) => Self::NotFound("Cart not found".to_string()),
            StoreError::ProductNotInCart(_) => {
                Self::NotFound("Product not found in cart".to_string())
            }
            StoreError::DeliveryNotFound(_) => {
                Self::NotFound("Delivery info not found".to_string())
            }
            StoreError::EmptyCart(_) => Self::InvalidState("Cart is empty".to_string()),
            StoreError::AmountOutOfRange(_) => Self::BadRequest("Amount out of range".to_string()),
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(status = status.as_u16(), error = %self, "Request rejected");

        let body = ErrorResponse {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Response envelope and API error type
//!
//! Every failure leaves the server as `{"error": "<message>"}` with
//! `Content-Type: application/json`. Successful responses are the bare
//! payload via `axum::Json`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::DbError;

/// Error envelope body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build an error envelope response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

/// API error type
///
/// Storage failures, not-found lookups included, are surfaced with the
/// storage message unchanged. All variants currently map to 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unparseable id or body under the strict input policy
    #[error("{message}")]
    BadInput { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::BadInput { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Lookup of a missing row, as opposed to a storage or input failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Database(e) if e.is_not_found())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, not_found = self.is_not_found(), "request failed");
        error_response(self.status(), self.to_string())
    }
}

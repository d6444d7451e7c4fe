// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of [`QuireError`] onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quire_core::{QuireError, StoreErrorKind};
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// A handler failure rendered as a JSON error body.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete request.
    InvalidRequest(String),
    /// Failure from the core.
    Quire(QuireError),
}

impl From<QuireError> for ApiError {
    fn from(err: QuireError) -> Self {
        ApiError::Quire(err)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            ApiError::Quire(err) => match err {
                QuireError::InvalidGrant => (StatusCode::BAD_REQUEST, "invalid_grant"),
                QuireError::InvalidToken => (StatusCode::UNAUTHORIZED, "unauthorized"),
                QuireError::CategoriesFetch { .. } => (StatusCode::BAD_GATEWAY, "bad_gateway"),
                QuireError::Store(store) => match store.kind {
                    StoreErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
                    StoreErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
                    StoreErrorKind::BackendUnavailable => {
                        (StatusCode::BAD_GATEWAY, "bad_gateway")
                    }
                },
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let description = match &self {
            ApiError::InvalidRequest(message) => message.clone(),
            ApiError::Quire(err) => err.to_string(),
        };
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %description, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                error_description: Some(description),
            }),
        )
            .into_response()
    }
}

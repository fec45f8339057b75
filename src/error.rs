//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// API-level failures. Every variant maps to one status code and one JSON body
/// shape; validation variants carry the exact client-facing message because the
/// text differs per operation (POST, PUT and DELETE each phrase the missing-id
/// complaint differently).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("No fields to update")]
    NoFieldsToUpdate,
    #[error("Invalid pagination parameters")]
    InvalidPagination,
    #[error("Page number exceeds total pages")]
    PageOutOfRange,
    #[error("{0} already exists")]
    Duplicate(&'static str),
    /// Bulk insert rejected as a whole: bad `items` shape or an item missing a
    /// required field. Writes made earlier in the same batch are not rolled back.
    #[error("{0}")]
    InvalidItems(&'static str),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Not Found")]
    RouteNotFound,
    #[error("{0} not found")]
    RecordNotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON body: {0}")]
    Body(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_)
            | ApiError::NoFieldsToUpdate
            | ApiError::InvalidPagination
            | ApiError::PageOutOfRange
            | ApiError::Duplicate(_)
            | ApiError::InvalidItems(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::RouteNotFound | ApiError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self {
            // Route misses carry no status flag, everything else does.
            ApiError::RouteNotFound => json!({ "message": "Not Found" }),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "storage failure");
                json!({
                    "message": "Internal Server Error",
                    "error": e.to_string(),
                    "status": false,
                })
            }
            ApiError::Body(e) => {
                tracing::error!(error = %e, "unreadable request body");
                json!({
                    "message": "Internal Server Error",
                    "error": e.to_string(),
                    "status": false,
                })
            }
            other => json!({ "message": other.to_string(), "status": false }),
        };
        (status, Json(body)).into_response()
    }
}

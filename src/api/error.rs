//! Handler error type and its translation to HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl
//! below is the only place an error becomes a status code and body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::validation::ValidationError;

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message body used for every error and for delete confirmations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Not found")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors a handler can produce.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    #[diagnostic(code(contacts::api::not_found))]
    NotFound,

    #[error("{0}")]
    #[diagnostic(code(contacts::api::malformed_body))]
    MalformedBody(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Persistence(#[from] DbError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Persistence(e) => {
                // Store details stay in the log, never in the response
                error!(error = %e, "persistence failure");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            other => other.to_string(),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

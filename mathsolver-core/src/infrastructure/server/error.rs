use super::dto::{ErrorResponse, WarningResponse};
use crate::constants::EMPTY_QUESTION_WARNING;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Request-level failures returned by the REST handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", EMPTY_QUESTION_WARNING)]
    EmptyQuestion,
    #[error("session '{0}' was not found")]
    SessionNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyQuestion => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(WarningResponse {
                    warning: EMPTY_QUESTION_WARNING.to_string(),
                }),
            )
                .into_response(),
            ApiError::SessionNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

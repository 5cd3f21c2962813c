//! Defines application-specific error types.
//!
//! [`Error`] covers failures of the server itself (configuration, binding,
//! serving). [`ApiError`] covers per-request failures and renders them as the
//! error envelope with a matching HTTP status.

use crate::envelope::Envelope;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while configuring or running the server.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body was not valid JSON.
    #[error("Internal server error")]
    MalformedBody(#[source] serde_json::Error),

    /// The request body could not be read, e.g. it exceeded the size limit.
    #[error("Internal server error")]
    UnreadableBody(#[source] BytesRejection),

    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No `Authorization` header was sent.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Route {method} {path} not found")]
    RouteNotFound { method: Method, path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::UnreadableBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MalformedBody(source) => {
                tracing::error!(error = %source, "Failed to parse request body")
            }
            ApiError::UnreadableBody(source) => {
                tracing::error!(error = %source, "Failed to read request body")
            }
            other => tracing::debug!("Request rejected: {}", other),
        }
        (self.status(), Envelope::error(self.to_string())).into_response()
    }
}

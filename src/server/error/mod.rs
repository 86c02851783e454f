//! Error types for the guardian fortune server.
//!
//! Each domain gets its own `thiserror` enum (configuration, fortune requests, generative model
//! calls) with an `IntoResponse` mapping, and [`Error`] aggregates them so handlers and services
//! can propagate with `?`.

pub mod config;
pub mod fortune;
pub mod generation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, fortune::FortuneError, generation::GenerationError},
};

/// Main error type for the server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables or credentials)
/// - Fortune request errors (incomplete birth data)
/// - Generation errors (Gemini transport, status, or output problems)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Fortune request error (missing required birth data).
    #[error(transparent)]
    FortuneError(#[from] FortuneError),
    /// Generative model error (request, API status, empty or undecodable output).
    #[error(transparent)]
    GenerationError(#[from] GenerationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For fortune requests missing required birth data
/// - 502 Bad Gateway - For failures of the generative model
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::FortuneError(err) => err.into_response(),
            Self::GenerationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

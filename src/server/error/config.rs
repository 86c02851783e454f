//! Errors raised while reading the Gemini configuration.
//!
//! These only occur at startup or when a [`GeminiClient`] is built, so `main` reports them and
//! exits; reaching a handler they become a plain 500.
//!
//! [`GeminiClient`]: crate::server::util::gemini::GeminiClient

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `GEMINI_API_KEY` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but unusable, e.g. a `GEMINI_API_URL` that is not an http(s) URL.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

//! Generative model error types.
//!
//! These errors cover every way the text generation stage of a fortune can fail. Image
//! generation uses the same type but its failures never leave the fortune service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message shown to the user for any failed consultation
pub static GENERATION_FAILED_MESSAGE: &str = "Communication with the deities failed, please retry";

#[derive(Error, Debug)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Gemini request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no usable text.
    #[error("Gemini returned no text")]
    EmptyResponse,

    /// The response text did not match the fortune schema.
    #[error("Failed to decode fortune from model output: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Converts generation errors into 502 Bad Gateway responses.
///
/// The model is an upstream dependency, so its failures are reported as a gateway problem with
/// a generic message while the detail goes to the log.
impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: GENERATION_FAILED_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by the fortune request itself rather than by the model.
#[derive(Error, Debug)]
pub enum FortuneError {
    /// A required field of the submitted birth data is empty.
    #[error("Required field {0} is empty")]
    MissingField(&'static str),
}

impl IntoResponse for FortuneError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingField(field) => {
                tracing::debug!("Fortune request missing required field {}", field);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("{} is required", field),
                    }),
                )
                    .into_response()
            }
        }
    }
}

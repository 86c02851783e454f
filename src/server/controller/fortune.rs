use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        fortune::{FortuneResult, UserInput},
    },
    server::{error::Error, model::app::AppState, service::fortune::FortuneService},
};

pub static FORTUNE_TAG: &str = "fortune";

/// Consult the guardian deity for the submitted birth data
#[utoipa::path(
    post,
    path = "/api/fortune",
    tag = FORTUNE_TAG,
    request_body = UserInput,
    responses(
        (status = 200, description = "Fortune generated, portrait included when available", body = FortuneResult),
        (status = 400, description = "Birth date or name is missing", body = ErrorDto),
        (status = 502, description = "The generative model failed to produce a fortune", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_fortune(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<impl IntoResponse, Error> {
    let fortune_service = FortuneService::new(state.model.as_ref());

    tracing::debug!(name = %input.name, "Fortune requested");

    let fortune = fortune_service.request_fortune(&input).await?;

    Ok((StatusCode::OK, Json(fortune)))
}

//! Tests for the request_fortune endpoint.

use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use guardian::{
    model::{
        api::ErrorDto,
        fortune::{FortuneResult, UserInput},
    },
    server::{
        controller::fortune::request_fortune, error::generation::GENERATION_FAILED_MESSAGE,
        model::app::AppState,
    },
};
use guardian_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::util::{StubModel, TestContextExt};

fn user_input(birth_date: &str, name: &str) -> UserInput {
    serde_json::from_value(fortune::user_input_json(birth_date, "", "male", name))
        .expect("valid user input")
}

async fn call(state: AppState, input: UserInput) -> Response {
    match request_fortune(State(state), Json(input)).await {
        Ok(response) => response.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// Expect 200 with the fortune and its portrait
#[tokio::test]
async fn success_with_portrait() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fortune_endpoint(TEST_TEXT_MODEL, &fortune::fortune_json(3), 1)?
        .with_image_endpoint(TEST_IMAGE_MODEL, "image/png", TEST_PNG, 1)
        .build()
        .await?;

    let response = call(test.into_app_state(), user_input("1990-01-01", "太郎")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fortune: FortuneResult = body(response).await;
    assert_eq!(fortune.timeline.len(), 3);
    assert!(fortune
        .deity_image
        .is_some_and(|uri| uri.starts_with("data:image/png;base64,")));
    test.assert_mocks();

    Ok(())
}

/// Expect 200 without `deityImage` when the image model fails
#[tokio::test]
async fn success_without_portrait() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fortune_endpoint(TEST_TEXT_MODEL, &fortune::fortune_json(3), 1)?
        .with_error_endpoint(TEST_IMAGE_MODEL, 500, 1)
        .build()
        .await?;

    let response = call(test.into_app_state(), user_input("1990-01-01", "太郎")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fortune: serde_json::Value = body(response).await;
    assert!(fortune.get("deityImage").is_none());
    assert_eq!(fortune["deityName"], "白銀の龍神");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a missing name without contacting the model
#[tokio::test]
async fn bad_request_for_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(TEST_TEXT_MODEL, 500, 0)
        .build()
        .await?;

    let response = call(test.into_app_state(), user_input("1990-01-01", "")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert_eq!(error.error, "name is required");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a missing birth date
#[tokio::test]
async fn bad_request_for_missing_birth_date() {
    let model = Arc::new(StubModel::new().with_text("{}"));
    let state = AppState {
        model: model.clone(),
    };

    let response = call(state, user_input(" ", "太郎")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(model.text_calls(), 0);
}

/// Expect 502 with the generic message when the text model fails
#[tokio::test]
async fn bad_gateway_for_text_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(TEST_TEXT_MODEL, 503, 1)
        .with_image_endpoint(TEST_IMAGE_MODEL, "image/png", TEST_PNG, 0)
        .build()
        .await?;

    let response = call(test.into_app_state(), user_input("1990-01-01", "太郎")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let error: ErrorDto = body(response).await;
    assert_eq!(error.error, GENERATION_FAILED_MESSAGE);
    test.assert_mocks();

    Ok(())
}

/// Expect 502 when the model output is not a complete fortune
#[tokio::test]
async fn bad_gateway_for_incomplete_fortune() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fortune_endpoint(
            TEST_TEXT_MODEL,
            &fortune::fortune_json_without("timeline"),
            1,
        )?
        .build()
        .await?;

    let response = call(test.into_app_state(), user_input("1990-01-01", "太郎")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}

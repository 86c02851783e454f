//! Tests for FortuneService.
//!
//! The text stage must succeed for a fortune to be returned, while the portrait stage only ever
//! degrades the result. Most tests drive the service through a stub model; the last ones run it
//! end to end against the mock Gemini server.

use guardian::{
    model::fortune::{Gender, Portrait, UserInput},
    server::{
        error::{fortune::FortuneError, generation::GenerationError, Error},
        service::fortune::FortuneService,
    },
};
use guardian_test_utils::prelude::*;

use crate::util::{StubModel, TestContextExt};

fn input() -> UserInput {
    UserInput {
        birth_date: "1992-11-23".to_string(),
        birth_time: String::new(),
        gender: Gender::Female,
        name: "花子".to_string(),
    }
}

fn fortune_text(events: usize) -> String {
    fortune::fortune_json(events).to_string()
}

/// Expect a decoded, formatted fortune with the portrait attached as a data URI
#[tokio::test]
async fn returns_fortune_with_portrait() {
    let model = StubModel::new()
        .with_text(fortune_text(3))
        .with_image("image/png", &[0, 1, 2]);

    let result = FortuneService::new(&model)
        .request_fortune(&input())
        .await
        .unwrap();

    assert_eq!(result.deity_name, "白銀の龍神");
    assert_eq!(result.timeline.len(), 3);
    assert_eq!(result.timeline[0].period, "7歳");
    assert_eq!(result.deity_image.as_deref(), Some("data:image/png;base64,AAEC"));
    assert!(result
        .essence
        .starts_with("あなたは人に合わせすぎる。\n\n本音を隠す癖がある。\n\n"));
    assert_eq!(model.text_calls(), 1);
    assert_eq!(model.image_calls(), 1);
}

/// Expect the text prompt to carry the user data and the image prompt the deity
#[tokio::test]
async fn prompts_carry_user_and_deity() {
    let model = StubModel::new()
        .with_text(fortune_text(1))
        .with_image("image/png", &[1]);

    FortuneService::new(&model)
        .request_fortune(&input())
        .await
        .unwrap();

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("1992-11-23"));
    assert!(prompts[0].contains("出生時刻：不明"));
    assert!(prompts[0].contains("性別：女性"));
    assert!(prompts[1].contains("白銀の龍神"));
    assert!(prompts[1].contains("sleepy eyes"));
}

/// Expect an image failure to leave the portrait out without failing the fortune
#[tokio::test]
async fn image_failure_degrades_to_placeholder() {
    let model = StubModel::new().with_text(fortune_text(3)).with_image_error();

    let result = FortuneService::new(&model)
        .request_fortune(&input())
        .await
        .unwrap();

    assert!(result.deity_image.is_none());
    assert_eq!(result.portrait(), Portrait::Placeholder);
    assert_eq!(model.image_calls(), 1);
}

/// Expect a reply without an inline image to leave the portrait out
#[tokio::test]
async fn missing_image_degrades_to_placeholder() {
    let model = StubModel::new().with_text(fortune_text(2));

    let result = FortuneService::new(&model)
        .request_fortune(&input())
        .await
        .unwrap();

    assert!(result.deity_image.is_none());
    assert_eq!(result.timeline.len(), 2);
}

/// Expect a text failure to fail the request without an image call
#[tokio::test]
async fn text_failure_fails_request() {
    let model = StubModel::new().with_text_error(503).with_image("image/png", &[1]);

    let result = FortuneService::new(&model).request_fortune(&input()).await;

    assert!(matches!(
        result,
        Err(Error::GenerationError(GenerationError::Api { status: 503, .. }))
    ));
    assert_eq!(model.image_calls(), 0);
}

/// Expect whitespace-only text to be an empty response
#[tokio::test]
async fn blank_text_fails_request() {
    let model = StubModel::new().with_text("  \n");

    let result = FortuneService::new(&model).request_fortune(&input()).await;

    assert!(matches!(
        result,
        Err(Error::GenerationError(GenerationError::EmptyResponse))
    ));
    assert_eq!(model.image_calls(), 0);
}

/// Expect text that is not JSON to be a decode failure
#[tokio::test]
async fn malformed_text_fails_request() {
    let model = StubModel::new().with_text("守護神は龍神です");

    let result = FortuneService::new(&model).request_fortune(&input()).await;

    assert!(matches!(
        result,
        Err(Error::GenerationError(GenerationError::Decode(_)))
    ));
}

/// Expect a fortune lacking a mandatory field to be a decode failure
#[tokio::test]
async fn incomplete_fortune_fails_request() {
    let model =
        StubModel::new().with_text(fortune::fortune_json_without("soulConnection").to_string());

    let result = FortuneService::new(&model).request_fortune(&input()).await;

    assert!(matches!(
        result,
        Err(Error::GenerationError(GenerationError::Decode(_)))
    ));
    assert_eq!(model.image_calls(), 0);
}

/// Expect a missing summary heading to be tolerated and the section left as written
#[tokio::test]
async fn tolerates_missing_summary_heading() {
    let mut fortune = fortune::fortune_json(1);
    fortune["work"] = serde_json::Value::String("仕事の話".to_string());
    let model = StubModel::new().with_text(fortune.to_string());

    let result = FortuneService::new(&model)
        .request_fortune(&input())
        .await
        .unwrap();

    assert_eq!(result.work, "仕事の話");
    assert_eq!(result.missing_summaries().len(), 1);
}

/// Expect empty required fields to be rejected before any model call
#[tokio::test]
async fn rejects_missing_fields() {
    let model = StubModel::new().with_text(fortune_text(1));

    let mut no_name = input();
    no_name.name = "  ".to_string();
    let mut no_date = input();
    no_date.birth_date = String::new();

    let service = FortuneService::new(&model);

    assert!(matches!(
        service.request_fortune(&no_name).await,
        Err(Error::FortuneError(FortuneError::MissingField("name")))
    ));
    assert!(matches!(
        service.request_fortune(&no_date).await,
        Err(Error::FortuneError(FortuneError::MissingField("birthDate")))
    ));
    assert_eq!(model.text_calls(), 0);
}

/// Expect the full flow against the mock Gemini server to attach the portrait
#[tokio::test]
async fn end_to_end_with_portrait() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fortune_endpoint(TEST_TEXT_MODEL, &fortune::fortune_json(3), 1)?
        .with_image_endpoint(TEST_IMAGE_MODEL, "image/jpeg", TEST_PNG, 1)
        .build()
        .await?;
    let client = test.gemini_client();

    let result = FortuneService::new(&client)
        .request_fortune(&input())
        .await
        .unwrap();

    assert_eq!(result.timeline.len(), 3);
    assert!(result
        .deity_image
        .as_deref()
        .is_some_and(|uri| uri.starts_with("data:image/jpeg;base64,")));
    test.assert_mocks();

    Ok(())
}

/// Expect an image endpoint failure against the mock server to still return the fortune
#[tokio::test]
async fn end_to_end_image_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fortune_endpoint(TEST_TEXT_MODEL, &fortune::fortune_json(3), 1)?
        .with_error_endpoint(TEST_IMAGE_MODEL, 500, 1)
        .build()
        .await?;
    let client = test.gemini_client();

    let result = FortuneService::new(&client)
        .request_fortune(&input())
        .await
        .unwrap();

    assert!(result.deity_image.is_none());
    test.assert_mocks();

    Ok(())
}

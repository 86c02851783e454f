//! Tests for the Gemini client against a mock server.
//!
//! These verify the request shape (path, API key header, JSON body), how text and inline
//! images are extracted from responses, and how HTTP failures are reported.

use guardian::server::{
    config::Config,
    error::{config::ConfigError, generation::GenerationError, Error},
    service::fortune::schema::fortune_schema,
    util::gemini::{GeminiClient, GenerativeModel},
};
use guardian_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::util::TestContextExt;

/// Expect the structured text request to carry the prompt, schema and JSON mime type
#[tokio::test]
async fn sends_structured_text_request() -> Result<(), TestError> {
    let schema = fortune_schema();
    let request_schema = schema.clone();

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("POST", gemini::generate_content_path(TEST_TEXT_MODEL).as_str())
                .match_header("x-goog-api-key", TEST_API_KEY)
                .match_body(Matcher::PartialJson(json!({
                    "contents": [{ "role": "user", "parts": [{ "text": "鑑定して" }] }],
                    "generationConfig": {
                        "responseMimeType": "application/json",
                        "responseSchema": request_schema,
                        "temperature": 1.0,
                    },
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(gemini::text_response("{\"ok\":true}").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let text = test
        .gemini_client()
        .generate_structured_text("鑑定して", &schema)
        .await
        .unwrap();

    assert_eq!(text, "{\"ok\":true}");
    test.assert_mocks();

    Ok(())
}

/// Expect the text parts of the first candidate to be joined in order
#[tokio::test]
async fn joins_text_parts() -> Result<(), TestError> {
    let fortune = fortune::fortune_json(3);

    let test = TestBuilder::new()
        .with_fortune_endpoint(TEST_TEXT_MODEL, &fortune, 1)?
        .build()
        .await?;

    let text = test
        .gemini_client()
        .generate_structured_text("prompt", &json!({}))
        .await
        .unwrap();

    assert_eq!(serde_json::from_str::<serde_json::Value>(&text)?, fortune);
    test.assert_mocks();

    Ok(())
}

/// Expect a response without candidates to be an empty response error
#[tokio::test]
async fn empty_text_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_endpoint(TEST_TEXT_MODEL, gemini::empty_response(), 1)
        .build()
        .await?;

    let result = test
        .gemini_client()
        .generate_structured_text("prompt", &json!({}))
        .await;

    assert!(matches!(
        result,
        Err(Error::GenerationError(GenerationError::EmptyResponse))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a non-2xx status to be reported with its status and body
#[tokio::test]
async fn api_error_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(TEST_TEXT_MODEL, 429, 1)
        .build()
        .await?;

    let result = test
        .gemini_client()
        .generate_structured_text("prompt", &json!({}))
        .await;

    match result {
        Err(Error::GenerationError(GenerationError::Api { status, body })) => {
            assert_eq!(status, 429);
            assert!(body.contains("mock failure"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
    test.assert_mocks();

    Ok(())
}

/// Expect the first inline image to be decoded from base64
#[tokio::test]
async fn decodes_inline_image() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_image_endpoint(TEST_IMAGE_MODEL, "image/png", TEST_PNG, 1)
        .build()
        .await?;

    let image = test
        .gemini_client()
        .generate_image("portrait")
        .await
        .unwrap()
        .expect("inline image");

    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, TEST_PNG);
    test.assert_mocks();

    Ok(())
}

/// Expect no image when the reply has only text parts
#[tokio::test]
async fn no_inline_image() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_endpoint(TEST_IMAGE_MODEL, gemini::no_image_response(), 1)
        .build()
        .await?;

    let image = test.gemini_client().generate_image("portrait").await.unwrap();

    assert!(image.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect an empty API key to be rejected before any request
#[tokio::test]
async fn rejects_empty_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(TEST_TEXT_MODEL, 401, 0)
        .build()
        .await?;

    let config = Config::new("").with_api_url(test.api_url());

    let result = GeminiClient::new(&config);

    assert!(matches!(
        result,
        Err(Error::ConfigError(ConfigError::MissingEnvVar(_)))
    ));
    test.assert_mocks();

    Ok(())
}

//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the mock
//! Gemini server and the mocks registered on it.

use mockito::{Mock, Server, ServerGuard};
use serde_json::Value;

use crate::{constant::TEST_API_KEY, fixtures::gemini::generate_content_path};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_generate_content_endpoint(TEST_TEXT_MODEL, gemini::text_response("{}"), 1)
///     .build()
///     .await?;
///
/// let config = Config::new(TEST_API_KEY).with_api_url(test.api_url());
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the Gemini API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock Gemini server
    pub fn api_url(&self) -> String {
        self.server.url()
    }

    /// Create a mock `generateContent` endpoint for `model`.
    ///
    /// The endpoint only matches requests carrying the test API key and answers with `status`
    /// and the JSON `body`. The mock verifies it was called exactly `expected_requests` times.
    pub fn create_generate_content_endpoint(
        &mut self,
        model: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", generate_content_path(model).as_str())
            .match_header("x-goog-api-key", TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

//! Declarative test builder.
//!
//! The builder queues mock endpoints and registers them on a fresh mock Gemini server during
//! the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, fixtures::gemini, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    // (model, status, body, expected_requests)
    endpoints: Vec<(String, usize, Value, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Add a `generateContent` endpoint for `model` answering 200 with `body`.
    pub fn with_generate_content_endpoint(
        mut self,
        model: &str,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints
            .push((model.to_string(), 200, body, expected_requests));
        self
    }

    /// Add a text endpoint returning `fortune` serialized as the model's JSON text.
    ///
    /// # Returns
    /// - `Ok(Self)` - The builder instance for method chaining
    /// - `Err(TestError::SerdeJson)` - `fortune` could not be serialized
    pub fn with_fortune_endpoint(
        self,
        model: &str,
        fortune: &Value,
        expected_requests: usize,
    ) -> Result<Self, TestError> {
        let text = serde_json::to_string(fortune)?;

        Ok(self.with_generate_content_endpoint(
            model,
            gemini::text_response(&text),
            expected_requests,
        ))
    }

    /// Add an image endpoint returning `data` as an inline image.
    pub fn with_image_endpoint(
        self,
        model: &str,
        mime_type: &str,
        data: &[u8],
        expected_requests: usize,
    ) -> Self {
        self.with_generate_content_endpoint(
            model,
            gemini::image_response(mime_type, data),
            expected_requests,
        )
    }

    /// Add a `generateContent` endpoint for `model` failing with `status`.
    pub fn with_error_endpoint(
        mut self,
        model: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push((
            model.to_string(),
            status,
            gemini::error_body(status as u16, "mock failure"),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint built against the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, registering every queued endpoint.
    ///
    /// Custom endpoints are created first so tests can layer several mocks on the same path.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (model, status, body, expected) in self.endpoints {
            mocks.push(setup.create_generate_content_endpoint(&model, status, &body, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

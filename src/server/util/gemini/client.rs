use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::{config::ConfigError, generation::GenerationError, Error},
    util::gemini::{
        wire::{GenerateContentRequest, GenerateContentResponse},
        GenerativeModel, InlineImage,
    },
};

/// HTTP client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Creates a client from the server configuration.
    ///
    /// Fails with [`ConfigError::MissingEnvVar`] when the API key is empty, before any request
    /// is made.
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.gemini_api_key.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()).into());
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GenerationError> {
        tracing::debug!(model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.api_url, model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        Ok(response.json::<GenerateContentResponse>().await?)
    }

    /// Returns the response unchanged on a success status, or a [`GenerationError::Api`]
    /// containing the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_structured_text(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, Error> {
        let request = GenerateContentRequest::prompt(prompt).with_json_schema(schema);
        let response = self.generate_content(&self.text_model, &request).await?;

        Ok(response.text().ok_or(GenerationError::EmptyResponse)?)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, Error> {
        let request = GenerateContentRequest::prompt(prompt);
        let response = self.generate_content(&self.image_model, &request).await?;

        let Some(inline) = response.inline_data() else {
            return Ok(None);
        };

        let data = STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| Error::ParseError(format!("inline image data: {}", e)))?;

        Ok(Some(InlineImage {
            mime_type: inline.mime_type.clone(),
            data,
        }))
    }
}

//! Generative model abstraction and its Gemini implementation.
//!
//! The fortune service only talks to [`GenerativeModel`], so tests can substitute a stub for the
//! hosted model.

pub mod client;
pub mod wire;

use async_trait::async_trait;

use crate::server::error::Error;

pub use client::GeminiClient;

/// Decoded inline image returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Capabilities the fortune service needs from a generative model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generates text constrained to the JSON `schema`.
    ///
    /// Returns the raw text; an empty reply is an error.
    async fn generate_structured_text(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, Error>;

    /// Generates an image for `prompt`, `None` when the reply carries no inline image.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, Error>;
}

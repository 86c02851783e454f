//! Fortune requester.
//!
//! Turns birth data into a [`FortuneResult`] with two sequential model calls: a structured text
//! call that must succeed, followed by a best-effort portrait call whose failure only leaves the
//! portrait out.

pub mod format;
pub mod prompt;
pub mod schema;

use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus_logger::tracing;

use crate::{
    model::fortune::{FortuneResult, UserInput},
    server::{
        error::{fortune::FortuneError, generation::GenerationError, Error},
        util::gemini::{GenerativeModel, InlineImage},
    },
};

pub struct FortuneService<'a> {
    model: &'a dyn GenerativeModel,
}

impl<'a> FortuneService<'a> {
    /// Creates a new instance of [`FortuneService`]
    pub fn new(model: &'a dyn GenerativeModel) -> Self {
        Self { model }
    }

    /// Requests a complete fortune for `input`.
    ///
    /// # Returns
    /// - `Ok(FortuneResult)` - Decoded and formatted fortune, with `deity_image` set when the
    ///   portrait call produced an inline image
    /// - `Err(Error::FortuneError)` - A required field of `input` is empty; no model call is made
    /// - `Err(Error)` - The text call failed, returned no text, or returned text that does not
    ///   decode as a fortune
    pub async fn request_fortune(&self, input: &UserInput) -> Result<FortuneResult, Error> {
        if let Some(field) = input.missing_field() {
            return Err(FortuneError::MissingField(field).into());
        }

        let mut result = self.generate_fortune(input).await?;

        for kind in result.missing_summaries() {
            tracing::warn!(
                section = kind.field(),
                "Model output lacks the {} summary heading",
                kind.summary_heading()
            );
        }

        result.deity_image = self.generate_portrait(&result).await;

        Ok(result)
    }

    async fn generate_fortune(&self, input: &UserInput) -> Result<FortuneResult, Error> {
        let prompt = prompt::fortune_prompt(input);
        let schema = schema::fortune_schema();

        let text = self
            .model
            .generate_structured_text(&prompt, &schema)
            .await?;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }

        let mut result: FortuneResult =
            serde_json::from_str(&text).map_err(GenerationError::from)?;

        format::format_narratives(&mut result);

        tracing::debug!(deity = %result.deity_name, "Decoded fortune");

        Ok(result)
    }

    /// Returns the portrait as a data URI, or `None` when the image call fails or has no image
    async fn generate_portrait(&self, result: &FortuneResult) -> Option<String> {
        let prompt = prompt::portrait_prompt(result);

        match self.model.generate_image(&prompt).await {
            Ok(Some(image)) => Some(data_uri(&image)),
            Ok(None) => {
                tracing::warn!(deity = %result.deity_name, "Image model returned no inline image");
                None
            }
            Err(err) => {
                tracing::warn!(deity = %result.deity_name, "Image generation failed: {}", err);
                None
            }
        }
    }
}

/// Encodes an inline image as `data:{mime};base64,{payload}`
pub fn data_uri(image: &InlineImage) -> String {
    format!("data:{};base64,{}", image.mime_type, STANDARD.encode(&image.data))
}

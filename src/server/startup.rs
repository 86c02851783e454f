use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::Error,
    util::gemini::{GeminiClient, GenerativeModel},
};

/// Build the Gemini client used for every fortune request
pub fn build_generative_model(config: &Config) -> Result<Arc<dyn GenerativeModel>, Error> {
    let client = GeminiClient::new(config)?;

    tracing::info!(
        text_model = %config.text_model,
        image_model = %config.image_model,
        "Configured Gemini client"
    );

    Ok(Arc::new(client))
}

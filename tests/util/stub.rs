use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use guardian::server::{
    error::{generation::GenerationError, Error},
    util::gemini::{GenerativeModel, InlineImage},
};

type TextReply = Box<dyn Fn() -> Result<String, Error> + Send + Sync>;
type ImageReply = Box<dyn Fn() -> Result<Option<InlineImage>, Error> + Send + Sync>;

/// Generative model with canned replies that records the prompts it receives.
pub struct StubModel {
    text: TextReply,
    image: ImageReply,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new() -> Self {
        Self {
            text: Box::new(|| Err(GenerationError::EmptyResponse.into())),
            image: Box::new(|| Ok(None)),
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = Box::new(move || Ok(text.clone()));
        self
    }

    pub fn with_text_error(mut self, status: u16) -> Self {
        self.text = Box::new(move || {
            Err(GenerationError::Api {
                status,
                body: "stub failure".to_string(),
            }
            .into())
        });
        self
    }

    pub fn with_image(mut self, mime_type: &str, data: &[u8]) -> Self {
        let image = InlineImage {
            mime_type: mime_type.to_string(),
            data: data.to_vec(),
        };
        self.image = Box::new(move || Ok(Some(image.clone())));
        self
    }

    pub fn with_image_error(mut self) -> Self {
        self.image = Box::new(|| {
            Err(GenerationError::Api {
                status: 500,
                body: "stub image failure".to_string(),
            }
            .into())
        });
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate_structured_text(
        &self,
        prompt: &str,
        _schema: &serde_json::Value,
    ) -> Result<String, Error> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.text)()
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, Error> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.image)()
    }
}

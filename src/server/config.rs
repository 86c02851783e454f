use crate::server::error::config::ConfigError;

pub static DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub static DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub static DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required. `GEMINI_API_URL`, `GEMINI_TEXT_MODEL` and
    /// `GEMINI_IMAGE_MODEL` fall back to the public Gemini endpoint and models.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Configuration for the public Gemini endpoint and default models
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Points the configuration at another Gemini-compatible base URL
    pub fn with_api_url(mut self, gemini_api_url: impl Into<String>) -> Self {
        self.gemini_api_url = gemini_api_url.into();
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let gemini_api_key = value("GEMINI_API_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let gemini_api_url = value("GEMINI_API_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !(gemini_api_url.starts_with("http://") || gemini_api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "GEMINI_API_URL".to_string(),
                reason: format!("expected an http(s) URL, got {:?}", gemini_api_url),
            });
        }

        Ok(Self {
            gemini_api_key,
            gemini_api_url,
            text_model: value("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: value("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}

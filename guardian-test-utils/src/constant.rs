//! Test configuration constants for the Gemini client setup.
//!
//! These values are placeholders for testing purposes, not real credentials or models.

/// Mock Gemini API key, sent as the `x-goog-api-key` header.
pub static TEST_API_KEY: &str = "test-gemini-api-key";

/// Model name used for structured text requests against the mock server.
pub static TEST_TEXT_MODEL: &str = "test-text-model";

/// Model name used for image requests against the mock server.
pub static TEST_IMAGE_MODEL: &str = "test-image-model";

/// PNG signature, enough to stand in for portrait bytes.
pub static TEST_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

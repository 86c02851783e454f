//! Gemini `generateContent` response bodies.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};

/// Path of the `generateContent` endpoint for `model`, relative to the API URL.
pub fn generate_content_path(model: &str) -> String {
    format!("/models/{}:generateContent", model)
}

/// Response whose first candidate carries `text`, split over two parts.
pub fn text_response(text: &str) -> Value {
    let split = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(text.chars().count() / 2)
        .unwrap_or(text.len());
    let (head, tail) = text.split_at(split);

    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": head }, { "text": tail }],
            },
            "finishReason": "STOP",
        }],
    })
}

/// Response whose first candidate carries a text part followed by an inline image.
pub fn image_response(mime_type: &str, data: &[u8]) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "Here is the deity." },
                    { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(data) } },
                ],
            },
            "finishReason": "STOP",
        }],
    })
}

/// Response with a candidate but no inline image.
pub fn no_image_response() -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "I cannot draw that." }] },
            "finishReason": "STOP",
        }],
    })
}

/// Response with no candidates at all, as returned for blocked prompts.
pub fn empty_response() -> Value {
    json!({ "promptFeedback": { "blockReason": "SAFETY" } })
}

/// Google API error body.
pub fn error_body(status: u16, message: &str) -> Value {
    json!({
        "error": {
            "code": status,
            "message": message,
            "status": "RESOURCE_EXHAUSTED",
        },
    })
}

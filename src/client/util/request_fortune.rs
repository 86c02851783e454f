#[cfg(feature = "web")]
use crate::model::fortune::{FortuneResult, UserInput};

/// Request a fortune for `input` from the API
#[cfg(feature = "web")]
pub async fn request_fortune(input: &UserInput) -> Result<FortuneResult, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(input)
        .map_err(|e| format!("Failed to serialize fortune request: {}", e))?;

    let response = Request::post("/api/fortune")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<FortuneResult>()
            .await
            .map_err(|e| format!("Failed to parse fortune data: {}", e)),
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_dto.error
                ))
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_text
                ))
            }
        }
    }
}

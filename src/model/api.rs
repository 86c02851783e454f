use serde::{Deserialize, Serialize};

/// Body of every non-2xx response from `/api`
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Message safe to show to the user
    pub error: String,
}

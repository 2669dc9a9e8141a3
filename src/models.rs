// Request and response JSON types

use serde::{Deserialize, Serialize};

/// Body of POST /get-response
///
/// A missing `message` field is treated as an empty message, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Successful reply carrying generated text
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Failure reply carrying a human-readable error string
///
/// Internal error detail never goes through this type; handlers log it
/// server-side and put only a generic message here.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::error::LlmError;

/// Main interface that all LLM provider implementations must satisfy
///
/// Handles are created once at startup and shared read-only across requests,
/// so implementations must be safe to call concurrently.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a text reply for a plain text prompt
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;

    /// Generate a text reply for a prompt plus an inline image payload
    ///
    /// # Arguments
    /// * `prompt` - Instruction sent alongside the image
    /// * `image` - Raw image bytes
    /// * `mime_type` - Declared MIME type of the image
    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, LlmError>;
}

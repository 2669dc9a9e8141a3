// Shared test helpers: stub providers and multipart body construction

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use medichat::llm::{LlmError, LlmProvider};
use medichat::state::AppState;

/// Stub provider that returns a fixed reply and counts invocations
pub struct StubProvider {
    reply: String,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    async fn generate_with_image(
        &self,
        _prompt: &str,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Stub provider that echoes the prompt back
pub struct EchoProvider;

#[async_trait]
impl LlmProvider for EchoProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(prompt.to_string())
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<String, LlmError> {
        Ok(prompt.to_string())
    }
}

/// Stub provider whose calls always fail with an internal-looking error
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::HttpError {
            status: 503,
            body: "upstream exploded with secret detail".to_string(),
        })
    }

    async fn generate_with_image(
        &self,
        _prompt: &str,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<String, LlmError> {
        Err(LlmError::HttpError {
            status: 503,
            body: "upstream exploded with secret detail".to_string(),
        })
    }
}

/// Unique upload directory under the system temp dir
pub fn temp_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("medichat-test-{}", Uuid::new_v4()))
}

/// Assemble app state around stub handles
pub fn state_with(
    text_model: Option<Arc<dyn LlmProvider>>,
    vision_model: Option<Arc<dyn LlmProvider>>,
    upload_dir: PathBuf,
) -> Arc<AppState> {
    Arc::new(AppState::new(text_model, vision_model, upload_dir))
}

/// Boundary used by all multipart test bodies
pub const BOUNDARY: &str = "------------------------medichat-test";

/// Build a multipart/form-data body with a single field
///
/// `filename: None` produces a plain value field rather than a file field.
pub fn multipart_body(
    field_name: &str,
    filename: Option<&str>,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    match filename {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field_name, name
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n", field_name).as_bytes(),
        ),
    }
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Content-Type header value matching `multipart_body`
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

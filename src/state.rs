//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, GeminiModel, LlmError, LlmProvider};

/// Shared handle to an initialized model; `None` when startup degraded
pub type ModelHandle = Option<Arc<dyn LlmProvider>>;

/// Immutable per-process state injected into every handler
///
/// Constructed once before the listener starts and shared read-only across
/// all requests.
pub struct AppState {
    pub text_model: ModelHandle,
    pub vision_model: ModelHandle,
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Construct state from explicit parts (used by tests to inject stubs)
    pub fn new(
        text_model: ModelHandle,
        vision_model: ModelHandle,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            text_model,
            vision_model,
            upload_dir,
        }
    }

    /// Build both Gemini handles once at startup
    ///
    /// A failure here degrades the service instead of aborting it: both
    /// handles are recorded as unavailable and the affected endpoints answer
    /// service-unavailable until the process restarts.
    pub fn initialize(config: &AppConfig) -> Self {
        let (text_model, vision_model) = match build_models(&config.api_key) {
            Ok(models) => {
                tracing::info!("Generative AI models initialized successfully");
                models
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize Generative AI models");
                (None, None)
            }
        };

        Self {
            text_model,
            vision_model,
            upload_dir: config.upload_dir.clone(),
        }
    }
}

fn build_models(api_key: &str) -> Result<(ModelHandle, ModelHandle), LlmError> {
    let text = GeminiClient::new(api_key.to_string(), GeminiModel::Gemini15Flash)?;
    let vision = GeminiClient::new(api_key.to_string(), GeminiModel::Gemini15FlashLatest)?;
    Ok((Some(Arc::new(text)), Some(Arc::new(vision))))
}

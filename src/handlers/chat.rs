// POST /get-response handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use super::{error_reply, success_reply};
use crate::models::ChatRequest;
use crate::state::AppState;

const TEXT_MODEL_UNAVAILABLE: &str = "Text model is not available.";
const EMPTY_MESSAGE_REPLY: &str = "Please say something.";
const GENERATION_FAILED: &str = "Sorry, I encountered an error. Please try again.";

/// Handles text-based chat messages
pub async fn get_response_handler(
    request: ChatRequest,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, Infallible> {
    let model = match state.text_model.as_ref() {
        Some(model) => model,
        None => {
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                TEXT_MODEL_UNAVAILABLE,
            ))
        }
    };

    // Empty input is a handled case, not a failure
    if request.message.trim().is_empty() {
        return Ok(success_reply(EMPTY_MESSAGE_REPLY.to_string()));
    }

    match model.generate_text(&request.message).await {
        Ok(text) => Ok(success_reply(text)),
        Err(e) => {
            tracing::error!(error = %e, "Error during text generation");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED,
            ))
        }
    }
}

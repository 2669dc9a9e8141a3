//! LLM Abstraction Layer
//!
//! This module provides a unified interface for the hosted Gemini models
//! that back the chat and image endpoints.

pub mod core;
pub mod gemini;

// Re-export commonly used types
pub use core::{error::LlmError, provider::LlmProvider};
pub use gemini::{GeminiClient, GeminiModel};

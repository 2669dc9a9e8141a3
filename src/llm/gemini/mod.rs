//! Gemini provider implementation
//!
//! This module provides a client for Google's Generative Language API,
//! implementing the LlmProvider trait for both the text and vision models.

pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, GeminiModel};

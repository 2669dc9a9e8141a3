// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod upload;

// LLM abstraction layer
pub mod llm;

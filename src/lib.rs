// src/lib.rs

use std::sync::Arc;

// Re-export modules
pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// The prompt-routing agent; immutable after startup
    pub agent: Arc<agent::AgentRouter>,
}

//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use celubot_config::Settings;
use celubot_engine::ChatEngine;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<Settings>,
    /// The chat engine, shared read-only across requests
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    pub fn new(config: Settings, engine: ChatEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}

//! Catalog Chat Server
//!
//! Thin HTTP transport around the chat engine: one JSON chat endpoint and
//! a health probe. Everything conversational lives in `celubot-engine`.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

//! Engine reply type

use serde::{Deserialize, Serialize};

/// What the engine hands back to the transport layer: rendered text plus a
/// short ordered list of suggested follow-up options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub text: String,
    pub options: Vec<String>,
}

impl BotReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

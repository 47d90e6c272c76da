//! Pending-comparison session state
//!
//! A session is either idle or waiting for the user to name the phones to
//! compare. The waiting flag lives in the session store under a short TTL
//! and is consumed at most once: any follow-up message clears it before
//! being processed, whatever it says. Store failures fail open to idle so
//! a broken cache never blocks a reply.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use celubot_session::SessionStore;

/// Value parked in the session store while a comparison prompt is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingComparison {
    pub awaiting_targets: bool,
    /// Models already resolved when the prompt was issued, lowercased
    /// model names. A follow-up can complete the pair from here.
    #[serde(default)]
    pub candidates: Vec<String>,
}

impl PendingComparison {
    pub fn awaiting() -> Self {
        Self {
            awaiting_targets: true,
            candidates: Vec::new(),
        }
    }
}

pub struct ComparisonManager {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl ComparisonManager {
    pub fn new(store: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    fn key(session_id: &str) -> String {
        format!("comparison:{session_id}")
    }

    /// Read and clear the pending flag. Expired, unreadable, or missing
    /// entries and store errors all come back as `None`.
    pub fn take_pending(&self, session_id: &str) -> Option<PendingComparison> {
        let key = Self::key(session_id);

        let raw = match self.store.get(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(session_id, error = %e, "session store read failed, treating session as idle");
                return None;
            }
        };

        // consume before parsing so a bad payload can't get stuck
        if let Err(e) = self.store.delete(&key) {
            tracing::warn!(session_id, error = %e, "failed to clear pending comparison");
        }

        match serde_json::from_str(&raw) {
            Ok(pending) => Some(pending),
            Err(e) => {
                tracing::warn!(session_id, error = %e, "dropping unreadable pending comparison");
                None
            }
        }
    }

    /// Park the waiting flag with the configured TTL. A store failure is
    /// logged and swallowed; the session simply stays idle.
    pub fn set_pending(&self, session_id: &str, pending: &PendingComparison) {
        let raw = match serde_json::to_string(pending) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(session_id, error = %e, "failed to encode pending comparison");
                return;
            }
        };

        if let Err(e) = self.store.set(&Self::key(session_id), raw, self.ttl) {
            tracing::warn!(session_id, error = %e, "session store write failed, session stays idle");
        }
    }
}

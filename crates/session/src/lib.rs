//! Session key-value store
//!
//! The engine parks per-session state (the pending-comparison flag) in a
//! small key-value store with per-entry TTL. The store is an injected
//! capability: the engine only sees this trait, and a store failure is
//! never fatal to a request.

pub mod error;
pub mod memory;

pub use error::SessionError;
pub use memory::{Clock, InMemorySessionStore, ManualClock, SystemClock};

use std::time::Duration;

/// Key-value contract for per-session engine state.
///
/// Implementations must expire entries once the TTL supplied at `set` time
/// elapses; a read of an expired key behaves as a miss.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), SessionError>;
    fn delete(&self, key: &str) -> Result<(), SessionError>;
}

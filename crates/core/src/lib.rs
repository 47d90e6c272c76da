//! Core types for the catalog chat engine
//!
//! This crate provides the foundational types shared by the other crates:
//! - The smartphone product model
//! - The immutable catalog index
//! - The reply type returned to the transport layer
//! - Error types

pub mod catalog;
pub mod error;
pub mod product;
pub mod reply;

pub use catalog::Catalog;
pub use error::CoreError;
pub use product::Product;
pub use reply::BotReply;

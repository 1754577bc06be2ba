//! Adapters - Implementations of the ports and the HTTP surface.
//!
//! - `events` - Event publishers
//! - `http` - axum REST API
//! - `storage` - Wizard store and repositories

pub mod events;
pub mod http;
pub mod storage;

//! Event publishing adapters.
//!
//! - `InMemoryEventBus` - Bounded in-process event log
//! - `TracingEventPublisher` - Logs events, then forwards them

mod in_memory;
mod tracing_publisher;

pub use in_memory::{InMemoryEventBus, DEFAULT_CAPACITY};
pub use tracing_publisher::TracingEventPublisher;

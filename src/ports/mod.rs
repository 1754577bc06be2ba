//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WizardStore` - The in-flight reflection wizard per user
//! - `JournalRepository` - Completed entries
//! - `DraftRepository` - Drafts kept from cancelled reflections
//! - `MoodRepository` - Current mood check-in
//! - `EventPublisher` - Domain event publishing

mod draft_repository;
mod event_publisher;
mod journal_repository;
mod mood_repository;
mod wizard_store;

pub use draft_repository::DraftRepository;
pub use event_publisher::EventPublisher;
pub use journal_repository::JournalRepository;
pub use mood_repository::MoodRepository;
pub use wizard_store::{WizardEdit, WizardStore};

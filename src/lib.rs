//! reso - Guided self-reflection journaling backend
//!
//! A user opens the reflection wizard, answers a fixed set of prompts one
//! step at a time, picks whether to accept or fight the situation, and the
//! finished session is filed as a journal entry. Cancelled sessions with
//! content can be kept as drafts; a separate mood check-in records how the
//! user feels right now.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;

//! Journal domain module.
//!
//! This module contains journal entries, action plans, and the in-memory
//! entry store.
//!
//! # Module Structure
//!
//! - `model`: Core journal models (`JournalEntry`, `ActionPlan`, `Commit`)
//! - `store`: Newest-first in-memory store (`EntryStore`)
//! - `samples`: Sample entries used to seed a fresh store

mod model;
mod samples;
mod store;

// Re-export public API
pub use model::{ActionPlan, Commit, JournalEntry, normalize_steps};
pub use samples::sample_entries;
pub use store::EntryStore;

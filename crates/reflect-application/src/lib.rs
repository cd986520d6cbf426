//! Application layer for Persona Reflect.
//!
//! This crate provides the use case that owns the application state and
//! coordinates the domain state machine with a response generator.

pub mod journal_usecase;

pub use journal_usecase::{JournalUseCase, PlanDraft, PlanTarget};

//! Domain layer for Persona Reflect.
//!
//! Personas, journal entries, the in-memory entry store and the view state
//! machine that drives the single-page journaling flow.
//!
//! # Examples
//!
//! ```
//! use reflect_core::journal::{Commit, EntryStore};
//! use reflect_core::persona::Reflection;
//! use reflect_core::view::{reduce, Action, AppState, Effect, View};
//!
//! let mut state = AppState::new(EntryStore::new());
//! reduce(&mut state, Action::StartJournal).unwrap();
//!
//! let effects = reduce(&mut state, Action::SubmitDilemma("I keep avoiding my taxes".into())).unwrap();
//! let Effect::Generate { ticket, .. } = effects[0].clone();
//! let outcome = Ok(Reflection::from_fn(|kind| format!("{kind}: start small")));
//! reduce(&mut state, Action::GenerationFinished { ticket, outcome }).unwrap();
//!
//! reduce(&mut state, Action::SaveWithoutPlan { commit: Commit::mint() }).unwrap();
//! assert_eq!(state.view, View::Dashboard);
//! assert_eq!(state.store.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod journal;
pub mod persona;
pub mod view;

// Re-export common error type
pub use error::{ReflectError, Result};

//! Application state model.

use serde::{Deserialize, Serialize};

use crate::error::ReflectError;
use crate::journal::{EntryStore, JournalEntry};
use crate::persona::Reflection;

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    NewEntry,
    Dashboard,
    EntryDetail,
}

/// Sub-state of the `NewEntry` screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewEntryPhase {
    /// Waiting for the user to describe a dilemma
    AwaitingDilemma,
    /// A dilemma was submitted and responses are being generated
    Generating,
    /// Responses are shown; the entry can be saved with or without a plan
    Reviewing,
}

/// Transient data of the in-progress new entry, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub dilemma: String,
    pub reflection: Option<Reflection>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.dilemma.is_empty() && self.reflection.is_none()
    }
}

/// A submitted dilemma whose responses have not arrived yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    /// Identifies this submission; completions carrying another ticket are stale
    pub ticket: u64,
    pub dilemma: String,
}

/// The complete state of the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current screen
    pub view: View,
    /// Committed journal entries, newest first
    pub store: EntryStore,
    /// Transient new-entry data
    pub draft: Draft,
    /// In-flight generation, if any
    pub pending: Option<PendingGeneration>,
    /// Entry shown on the `EntryDetail` screen
    pub selected_entry_id: Option<String>,
    /// Last generation failure, kept for display and retry
    pub last_error: Option<ReflectError>,
    pub(crate) next_ticket: u64,
}

impl AppState {
    /// Creates the initial state (`Home` screen) over an existing store.
    pub fn new(store: EntryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Whether a generation is in flight. Submissions and saves are refused
    /// while this is true.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a `GenerationFinished` carrying `ticket` would still be applied.
    pub fn awaits_ticket(&self, ticket: u64) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.ticket == ticket)
    }

    /// Sub-state of the new-entry flow, or `None` on any other screen.
    pub fn new_entry_phase(&self) -> Option<NewEntryPhase> {
        if self.view != View::NewEntry {
            return None;
        }
        Some(if self.is_generating() {
            NewEntryPhase::Generating
        } else if self.draft.reflection.is_some() {
            NewEntryPhase::Reviewing
        } else {
            NewEntryPhase::AwaitingDilemma
        })
    }

    /// The entry currently selected for the detail screen.
    pub fn current_entry(&self) -> Option<&JournalEntry> {
        self.selected_entry_id
            .as_deref()
            .and_then(|id| self.store.find_by_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.view, View::Home);
        assert!(!state.is_generating());
        assert!(state.draft.is_empty());
        assert!(state.new_entry_phase().is_none());
        assert!(state.current_entry().is_none());
    }

    #[test]
    fn test_view_tags() {
        assert_eq!(
            serde_json::to_string(&View::EntryDetail).unwrap(),
            "\"entry-detail\""
        );
    }
}

//! Reducer inputs and outputs.

use crate::error::ReflectError;
use crate::journal::Commit;
use crate::persona::Reflection;

/// Screens reachable through the navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    /// Equivalent to [`Action::StartJournal`]
    NewEntry,
    Dashboard,
}

/// Everything that can happen to the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Begin a new entry, discarding any transient draft
    StartJournal,
    /// Jump to a top-level screen
    Navigate(NavTarget),
    /// Submit a dilemma for reflection
    SubmitDilemma(String),
    /// A generation started by `SubmitDilemma` completed
    GenerationFinished {
        ticket: u64,
        outcome: Result<Reflection, ReflectError>,
    },
    /// Throw away the reviewed responses and start over
    DiscardDraft,
    /// Commit the draft as a new entry with an action plan
    SaveWithPlan { steps: Vec<String>, commit: Commit },
    /// Commit the draft as a new entry without an action plan
    SaveWithoutPlan { commit: Commit },
    /// Open an entry from the dashboard
    SelectEntry(String),
    /// Leave the detail screen
    BackToDashboard,
    /// Attach or replace the action plan of a stored entry
    SaveEntryPlan {
        entry_id: String,
        steps: Vec<String>,
        commit: Commit,
    },
}

/// Work the reducer asks its caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Generate persona responses for `dilemma`, then dispatch
    /// `Action::GenerationFinished` with the same ticket.
    Generate { ticket: u64, dilemma: String },
}

//! State transition function.
//!
//! `reduce` either applies an action completely and returns the effects the
//! caller must run, or rejects it with an error and leaves the state exactly
//! as it was.

use super::action::{Action, Effect, NavTarget};
use super::model::{AppState, Draft, PendingGeneration, View};
use crate::error::{ReflectError, Result};
use crate::journal::{ActionPlan, Commit, JournalEntry};
use crate::persona::Reflection;

/// Applies `action` to `state`.
///
/// # Errors
///
/// - `Validation`: blank dilemma or no usable action-plan step
/// - `Busy`: submit or save attempted while a generation is in flight
/// - `InvalidState`: the action is not available on the current screen
/// - `NotFound`: the referenced entry is not in the store
pub fn reduce(state: &mut AppState, action: Action) -> Result<Vec<Effect>> {
    match action {
        Action::StartJournal | Action::Navigate(NavTarget::NewEntry) => {
            start_journal(state);
            Ok(Vec::new())
        }
        Action::Navigate(NavTarget::Home) => {
            leave_to(state, View::Home);
            Ok(Vec::new())
        }
        Action::Navigate(NavTarget::Dashboard) => {
            leave_to(state, View::Dashboard);
            Ok(Vec::new())
        }
        Action::SubmitDilemma(dilemma) => submit_dilemma(state, dilemma),
        Action::GenerationFinished { ticket, outcome } => {
            finish_generation(state, ticket, outcome);
            Ok(Vec::new())
        }
        Action::DiscardDraft => {
            expect_view(state, View::NewEntry, "discard a draft")?;
            ensure_idle(state, "discard a draft")?;
            state.draft = Draft::default();
            state.last_error = None;
            Ok(Vec::new())
        }
        Action::SaveWithPlan { steps, commit } => {
            let reflection = committable_reflection(state)?;
            let plan = ActionPlan::new(&commit, commit.entry_id.as_str(), steps)?;
            let mut entry = JournalEntry::new(&commit, state.draft.dilemma.clone(), reflection);
            entry.action_plan = Some(plan);
            commit_entry(state, entry);
            Ok(Vec::new())
        }
        Action::SaveWithoutPlan { commit } => {
            let reflection = committable_reflection(state)?;
            let entry = JournalEntry::new(&commit, state.draft.dilemma.clone(), reflection);
            commit_entry(state, entry);
            Ok(Vec::new())
        }
        Action::SelectEntry(id) => {
            expect_view(state, View::Dashboard, "open an entry")?;
            if state.store.find_by_id(&id).is_none() {
                return Err(ReflectError::not_found("journal entry", id));
            }
            state.selected_entry_id = Some(id);
            state.view = View::EntryDetail;
            Ok(Vec::new())
        }
        Action::BackToDashboard => {
            expect_view(state, View::EntryDetail, "go back to the dashboard")?;
            state.selected_entry_id = None;
            state.view = View::Dashboard;
            Ok(Vec::new())
        }
        Action::SaveEntryPlan {
            entry_id,
            steps,
            commit,
        } => save_entry_plan(state, entry_id, steps, &commit),
    }
}

fn start_journal(state: &mut AppState) {
    state.view = View::NewEntry;
    state.draft = Draft::default();
    state.pending = None;
    state.selected_entry_id = None;
    state.last_error = None;
}

/// Moves to a top-level screen, abandoning any in-flight generation.
fn leave_to(state: &mut AppState, view: View) {
    state.view = view;
    state.pending = None;
    state.selected_entry_id = None;
}

fn submit_dilemma(state: &mut AppState, dilemma: String) -> Result<Vec<Effect>> {
    expect_view(state, View::NewEntry, "submit a dilemma")?;
    ensure_idle(state, "submit another dilemma")?;
    if state.draft.reflection.is_some() {
        return Err(ReflectError::invalid_state(
            "discard the current responses before submitting another dilemma",
        ));
    }
    let dilemma = dilemma.trim();
    if dilemma.is_empty() {
        return Err(ReflectError::validation("the dilemma must not be empty"));
    }

    let ticket = state.next_ticket;
    state.next_ticket += 1;
    state.pending = Some(PendingGeneration {
        ticket,
        dilemma: dilemma.to_string(),
    });
    state.last_error = None;

    Ok(vec![Effect::Generate {
        ticket,
        dilemma: dilemma.to_string(),
    }])
}

fn finish_generation(state: &mut AppState, ticket: u64, outcome: Result<Reflection>) {
    // Abandoned or superseded generations leave no trace.
    let Some(pending) = state.pending.take_if(|pending| pending.ticket == ticket) else {
        return;
    };

    match outcome.and_then(|reflection| reflection.validate().map(|_| reflection)) {
        Ok(reflection) => {
            state.draft = Draft {
                dilemma: pending.dilemma,
                reflection: Some(reflection),
            };
            state.last_error = None;
        }
        Err(err) => {
            // The draft stays as it was before the submission.
            state.last_error = Some(err);
        }
    }
}

fn committable_reflection(state: &AppState) -> Result<Reflection> {
    expect_view(state, View::NewEntry, "save an entry")?;
    ensure_idle(state, "save an entry")?;
    state
        .draft
        .reflection
        .clone()
        .ok_or_else(|| ReflectError::invalid_state("there are no generated responses to save"))
}

fn commit_entry(state: &mut AppState, entry: JournalEntry) {
    state.store.append(entry);
    state.draft = Draft::default();
    state.last_error = None;
    state.view = View::Dashboard;
}

fn save_entry_plan(
    state: &mut AppState,
    entry_id: String,
    steps: Vec<String>,
    commit: &Commit,
) -> Result<Vec<Effect>> {
    ensure_idle(state, "save an action plan")?;
    let plan = ActionPlan::new(commit, entry_id.as_str(), steps)?;
    if !state.store.update_action_plan(&entry_id, plan) {
        return Err(ReflectError::not_found("journal entry", entry_id));
    }
    Ok(Vec::new())
}

fn expect_view(state: &AppState, view: View, what: &str) -> Result<()> {
    if state.view != view {
        return Err(ReflectError::invalid_state(format!(
            "cannot {what} on the {:?} screen",
            state.view
        )));
    }
    Ok(())
}

fn ensure_idle(state: &AppState, what: &str) -> Result<()> {
    if state.is_generating() {
        return Err(ReflectError::busy(format!(
            "cannot {what} while responses are being generated"
        )));
    }
    Ok(())
}

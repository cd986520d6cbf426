//! Journal use case implementation.
//!
//! This module provides the `JournalUseCase`, which owns the single
//! `AppState` and runs the effects the reducer asks for.

use reflect_core::config::ReflectConfig;
use reflect_core::journal::{Commit, EntryStore, JournalEntry, sample_entries};
use reflect_core::persona::Reflection;
use reflect_core::view::{Action, AppState, Effect, NavTarget, View, reduce};
use reflect_core::{ReflectError, Result};
use reflect_interaction::{ResponseGenerator, build_generator};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Where a drafted action plan would be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanTarget {
    /// The reviewed draft on the new-entry screen
    NewEntry,
    /// The stored entry open on the detail screen
    Entry(String),
}

/// Action-plan steps proposed by the generator, waiting for the user to accept them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    pub target: PlanTarget,
    pub steps: Vec<String>,
    /// Responses the steps were drafted from
    source: Reflection,
}

/// Use case for the journaling flow.
///
/// `JournalUseCase` is the only owner of the application state. Every user
/// operation becomes an [`Action`] applied through [`reduce`]; the
/// `Generate` effect is executed against the configured
/// [`ResponseGenerator`] without holding the state lock across the call.
///
/// Ids for new entries and action plans are minted once per commit here and
/// passed into the reducer.
pub struct JournalUseCase {
    /// The application state, mutated only through `reduce`
    state: Arc<RwLock<AppState>>,
    /// Backend producing persona responses
    generator: Arc<dyn ResponseGenerator>,
}

impl JournalUseCase {
    /// Creates a new `JournalUseCase` over `store`, starting on the home screen.
    pub fn new(store: EntryStore, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::new(store))),
            generator,
        }
    }

    /// Creates a use case from configuration: builds the generator and seeds
    /// the store with sample entries when enabled.
    pub fn from_config(config: &ReflectConfig) -> Result<Self> {
        let generator = build_generator(&config.generation)?;
        let store = if config.journal.seed_samples {
            EntryStore::from_entries(sample_entries())
        } else {
            EntryStore::new()
        };
        tracing::info!(
            target: "journal",
            "journal ready ({} entries, backend: {})",
            store.len(),
            generator.name()
        );
        Ok(Self::new(store, generator))
    }

    /// Returns a copy of the current state for rendering.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Whether a generation is currently in flight.
    pub async fn is_generating(&self) -> bool {
        self.state.read().await.is_generating()
    }

    /// Applies `action` and runs the effects it produces.
    ///
    /// # Errors
    ///
    /// Returns the reducer's rejection, or the generation failure when the
    /// action started a generation that failed. A generation abandoned by
    /// navigating away resolves to `Ok(())` whatever its outcome.
    pub async fn dispatch(&self, action: Action) -> Result<()> {
        let effects = self.apply(action).await?;
        for effect in effects {
            self.run_effect(effect).await?;
        }
        Ok(())
    }

    async fn apply(&self, action: Action) -> Result<Vec<Effect>> {
        let mut state = self.state.write().await;
        let label = action_label(&action);
        match reduce(&mut state, action) {
            Ok(effects) => {
                tracing::debug!(target: "journal", action = label, view = ?state.view, "applied");
                Ok(effects)
            }
            Err(err) => {
                tracing::debug!(target: "journal", action = label, "rejected: {}", err);
                Err(err)
            }
        }
    }

    async fn run_effect(&self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Generate { ticket, dilemma } => {
                tracing::info!(
                    target: "generation",
                    ticket,
                    backend = self.generator.name(),
                    "generating responses"
                );
                let outcome = self.generator.generate(&dilemma).await;
                let result = outcome.as_ref().map(|_| ()).map_err(|err| err.clone());

                let mut state = self.state.write().await;
                let is_current = state.awaits_ticket(ticket);
                reduce(&mut state, Action::GenerationFinished { ticket, outcome })?;
                drop(state);

                if !is_current {
                    tracing::debug!(target: "generation", ticket, "discarded abandoned generation result");
                    return Ok(());
                }
                if let Err(err) = &result {
                    tracing::warn!(target: "generation", ticket, "generation failed: {}", err);
                }
                result
            }
        }
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    /// Opens the new-entry screen with an empty draft.
    pub async fn start_journal(&self) -> Result<()> {
        self.dispatch(Action::StartJournal).await
    }

    /// Jumps to a top-level screen.
    pub async fn navigate(&self, target: NavTarget) -> Result<()> {
        self.dispatch(Action::Navigate(target)).await
    }

    /// Opens the detail screen of a stored entry.
    pub async fn select_entry(&self, entry_id: &str) -> Result<()> {
        self.dispatch(Action::SelectEntry(entry_id.to_string())).await
    }

    /// Leaves the detail screen.
    pub async fn back_to_dashboard(&self) -> Result<()> {
        self.dispatch(Action::BackToDashboard).await
    }

    // ============================================================================
    // Dilemma submission
    // ============================================================================

    /// Submits a dilemma and waits until its responses are available.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank dilemma, `Busy` while another generation is in
    /// flight, `GenerationFailed` when the backend fails. A failed generation
    /// leaves the previous draft in place.
    pub async fn submit_dilemma(&self, dilemma: &str) -> Result<()> {
        self.dispatch(Action::SubmitDilemma(dilemma.to_string())).await
    }

    /// Submits a dilemma and generates in the background.
    ///
    /// The submission itself is validated before this returns, so a rejected
    /// dilemma never spawns a task. Observe progress with
    /// [`is_generating`](Self::is_generating).
    pub async fn begin_submission(self: &Arc<Self>, dilemma: &str) -> Result<JoinHandle<Result<()>>> {
        let effects = self.apply(Action::SubmitDilemma(dilemma.to_string())).await?;
        let this = Arc::clone(self);
        Ok(tokio::spawn(async move {
            for effect in effects {
                this.run_effect(effect).await?;
            }
            Ok(())
        }))
    }

    /// Throws away the reviewed responses.
    pub async fn discard_draft(&self) -> Result<()> {
        self.dispatch(Action::DiscardDraft).await
    }

    // ============================================================================
    // Commits
    // ============================================================================

    /// Saves the draft as a new entry with an action plan. Returns the new entry id.
    pub async fn save_with_plan(&self, steps: Vec<String>) -> Result<String> {
        let commit = Commit::mint();
        let entry_id = commit.entry_id.clone();
        self.dispatch(Action::SaveWithPlan { steps, commit }).await?;
        tracing::info!(target: "journal", entry_id = %entry_id, "entry saved with action plan");
        Ok(entry_id)
    }

    /// Saves the draft as a new entry without an action plan. Returns the new entry id.
    pub async fn save_without_plan(&self) -> Result<String> {
        let commit = Commit::mint();
        let entry_id = commit.entry_id.clone();
        self.dispatch(Action::SaveWithoutPlan { commit }).await?;
        tracing::info!(target: "journal", entry_id = %entry_id, "entry saved");
        Ok(entry_id)
    }

    /// Attaches (or replaces) the action plan of a stored entry.
    pub async fn save_entry_plan(&self, entry_id: &str, steps: Vec<String>) -> Result<()> {
        self.dispatch(Action::SaveEntryPlan {
            entry_id: entry_id.to_string(),
            steps,
            commit: Commit::mint(),
        })
        .await?;
        tracing::info!(target: "journal", entry_id, "action plan saved");
        Ok(())
    }

    // ============================================================================
    // Plan drafting
    // ============================================================================

    /// Asks the generator to draft action-plan steps for the responses on screen.
    ///
    /// Nothing is saved; pass the result to
    /// [`accept_plan_draft`](Self::accept_plan_draft) to keep it.
    ///
    /// # Errors
    ///
    /// `InvalidState` when no responses are under review and no entry is open,
    /// `GenerationFailed` when the backend fails.
    pub async fn draft_action_plan(&self) -> Result<PlanDraft> {
        let (target, source) = plan_source(&*self.state.read().await)?;
        tracing::info!(
            target: "generation",
            backend = self.generator.name(),
            ?target,
            "drafting action plan"
        );
        let steps = self.generator.draft_plan(&source).await?;
        Ok(PlanDraft {
            target,
            steps,
            source,
        })
    }

    /// Saves a drafted plan to the entry it was drafted for. Returns the entry id.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the screen no longer shows the responses the draft
    /// was made from, plus every error of the underlying save.
    pub async fn accept_plan_draft(&self, draft: PlanDraft) -> Result<String> {
        let (target, source) = plan_source(&*self.state.read().await)?;
        if target != draft.target || source != draft.source {
            return Err(ReflectError::invalid_state(
                "the drafted plan was made for different responses; draft a new one",
            ));
        }
        match draft.target {
            PlanTarget::NewEntry => self.save_with_plan(draft.steps).await,
            PlanTarget::Entry(entry_id) => {
                self.save_entry_plan(&entry_id, draft.steps).await?;
                Ok(entry_id)
            }
        }
    }

    /// Looks up a stored entry by id.
    pub async fn entry(&self, entry_id: &str) -> Result<JournalEntry> {
        self.state
            .read()
            .await
            .store
            .find_by_id(entry_id)
            .cloned()
            .ok_or_else(|| ReflectError::not_found("journal entry", entry_id))
    }
}

/// The responses an action plan would be based on, and where it would go.
fn plan_source(state: &AppState) -> Result<(PlanTarget, Reflection)> {
    match state.view {
        View::NewEntry => state
            .draft
            .reflection
            .clone()
            .map(|reflection| (PlanTarget::NewEntry, reflection))
            .ok_or_else(|| ReflectError::invalid_state("there are no generated responses to plan from")),
        View::EntryDetail => state
            .current_entry()
            .map(|entry| (PlanTarget::Entry(entry.id.clone()), entry.reflection()))
            .ok_or_else(|| ReflectError::invalid_state("no entry is open")),
        View::Home | View::Dashboard => Err(ReflectError::invalid_state(
            "open an entry or review new responses before drafting a plan",
        )),
    }
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::StartJournal => "start_journal",
        Action::Navigate(_) => "navigate",
        Action::SubmitDilemma(_) => "submit_dilemma",
        Action::GenerationFinished { .. } => "generation_finished",
        Action::DiscardDraft => "discard_draft",
        Action::SaveWithPlan { .. } => "save_with_plan",
        Action::SaveWithoutPlan { .. } => "save_without_plan",
        Action::SelectEntry(_) => "select_entry",
        Action::BackToDashboard => "back_to_dashboard",
        Action::SaveEntryPlan { .. } => "save_entry_plan",
    }
}

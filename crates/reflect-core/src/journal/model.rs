//! Journal domain model.
//!
//! A journal entry captures one dilemma, the persona responses it received,
//! and optionally the action plan the user wrote in response.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReflectError, Result};
use crate::persona::{Reflection, ResponseSet};

/// Identifiers and timestamp minted once for a single commit.
///
/// A commit that creates an entry together with its action plan must use the
/// same `entry_id` for both, so the value is minted here and threaded through
/// instead of being generated at each use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Id for a newly created journal entry
    pub entry_id: String,
    /// Id for a newly created action plan
    pub plan_id: String,
    /// Timestamp (ISO 8601 format)
    pub created_at: String,
}

impl Commit {
    /// Mints fresh UUID-based identifiers and the current timestamp.
    pub fn mint() -> Self {
        Self {
            entry_id: format!("entry-{}", Uuid::new_v4()),
            plan_id: format!("ap-{}", Uuid::new_v4()),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Creates a commit with caller-chosen identifiers.
    pub fn fixed(
        entry_id: impl Into<String>,
        plan_id: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            plan_id: plan_id.into(),
            created_at: created_at.into(),
        }
    }
}

/// An ordered list of next steps attached to a journal entry.
///
/// An action plan is only reachable through its owning entry; `entry_id` is a
/// back-reference, not ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    /// Unique plan identifier
    pub id: String,
    /// Id of the owning journal entry
    pub entry_id: String,
    /// Steps in the order the user wrote them (never empty)
    pub steps: Vec<String>,
    /// Timestamp when the plan was saved (ISO 8601 format)
    pub created_at: String,
}

impl ActionPlan {
    /// Creates a plan for `entry_id` using the ids minted in `commit`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when no non-blank step remains.
    pub fn new(commit: &Commit, entry_id: impl Into<String>, steps: Vec<String>) -> Result<Self> {
        Ok(Self {
            id: commit.plan_id.clone(),
            entry_id: entry_id.into(),
            steps: normalize_steps(steps)?,
            created_at: commit.created_at.clone(),
        })
    }
}

/// Trims every step and drops blank ones.
///
/// # Errors
///
/// Returns `Validation` when the resulting list is empty.
pub fn normalize_steps(steps: Vec<String>) -> Result<Vec<String>> {
    let steps: Vec<String> = steps
        .into_iter()
        .map(|step| step.trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();

    if steps.is_empty() {
        return Err(ReflectError::validation(
            "an action plan needs at least one step",
        ));
    }
    Ok(steps)
}

/// A committed journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique entry identifier
    pub id: String,
    /// Creation timestamp (ISO 8601 format)
    pub date: String,
    /// The dilemma as the user wrote it
    pub dilemma: String,
    /// One response per persona, in persona order
    pub responses: ResponseSet,
    /// The user's action plan, if one was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<ActionPlan>,
    /// Suggested next steps synthesized at generation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<String>>,
}

impl JournalEntry {
    /// Builds a new entry from a dilemma and its reflection.
    pub fn new(commit: &Commit, dilemma: impl Into<String>, reflection: Reflection) -> Self {
        let suggested_actions =
            (!reflection.suggested_actions.is_empty()).then_some(reflection.suggested_actions);
        Self {
            id: commit.entry_id.clone(),
            date: commit.created_at.clone(),
            dilemma: dilemma.into(),
            responses: reflection.responses,
            action_plan: None,
            suggested_actions,
        }
    }

    /// The reflection this entry was saved from.
    pub fn reflection(&self) -> Reflection {
        Reflection {
            responses: self.responses.clone(),
            suggested_actions: self.suggested_actions.clone().unwrap_or_default(),
        }
    }

    /// Whether this entry has an action plan attached.
    pub fn has_action_plan(&self) -> bool {
        self.action_plan.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_commits_are_unique() {
        let a = Commit::mint();
        let b = Commit::mint();
        assert_ne!(a.entry_id, b.entry_id);
        assert_ne!(a.plan_id, b.plan_id);
        assert!(a.entry_id.starts_with("entry-"));
        assert!(a.plan_id.starts_with("ap-"));
    }

    #[test]
    fn test_normalize_steps_trims_and_rejects_empty() {
        let steps = normalize_steps(vec![
            "  Call the accountant ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "Gather receipts".to_string(),
        ])
        .unwrap();
        assert_eq!(steps, vec!["Call the accountant", "Gather receipts"]);

        assert!(normalize_steps(vec![]).unwrap_err().is_validation());
        assert!(normalize_steps(vec![" ".to_string()]).unwrap_err().is_validation());
    }

    #[test]
    fn test_entry_keeps_suggested_actions_only_when_present() {
        let commit = Commit::fixed("entry-1", "ap-1", "2025-11-07T14:30:00+00:00");
        let bare = JournalEntry::new(&commit, "dilemma", Reflection::from_fn(|_| "r".into()));
        assert!(bare.suggested_actions.is_none());
        assert!(!bare.has_action_plan());

        let reflection = Reflection::from_fn(|_| "r".into())
            .with_suggested_actions(vec!["Start small".to_string()]);
        let entry = JournalEntry::new(&commit, "dilemma", reflection);
        assert_eq!(entry.suggested_actions, Some(vec!["Start small".to_string()]));
        assert_eq!(entry.id, "entry-1");
        assert_eq!(entry.date, commit.created_at);
        assert_eq!(entry.reflection().suggested_actions, vec!["Start small"]);
        assert!(bare.reflection().suggested_actions.is_empty());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let commit = Commit::fixed("entry-1", "ap-1", "2025-11-07T14:30:00+00:00");
        let mut entry = JournalEntry::new(&commit, "d", Reflection::from_fn(|_| "r".into()));
        entry.action_plan = Some(ActionPlan::new(&commit, "entry-1", vec!["step".into()]).unwrap());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["actionPlan"]["entryId"], "entry-1");
        assert_eq!(json["responses"][0]["persona"], "cognitive-behavioral");
        assert!(json.get("suggestedActions").is_none());
    }
}

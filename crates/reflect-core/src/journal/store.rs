//! In-memory journal entry store.

use std::collections::VecDeque;

use super::model::{ActionPlan, JournalEntry};

/// Ordered, newest-first collection of journal entries.
///
/// All operations are synchronous and total: a missing id is reported
/// through the return value and never panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: VecDeque<JournalEntry>,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `entries` in the given (newest-first) order.
    pub fn from_entries(entries: impl IntoIterator<Item = JournalEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Inserts `entry` at the head of the store.
    pub fn append(&mut self, entry: JournalEntry) {
        debug_assert!(
            self.find_by_id(&entry.id).is_none(),
            "duplicate journal entry id {}",
            entry.id
        );
        self.entries.push_front(entry);
    }

    /// Returns the entry whose id matches, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Replaces the action plan of the entry whose id matches.
    ///
    /// Every other field and the store order are left untouched. Returns
    /// `false` without modifying anything when no entry matches. The stored
    /// plan always points back at `id`, whatever `plan.entry_id` said.
    pub fn update_action_plan(&mut self, id: &str, mut plan: ActionPlan) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                plan.entry_id = entry.id.clone();
                entry.action_plan = Some(plan);
                true
            }
            None => false,
        }
    }

    /// Iterates entries newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// Returns the entry at `index` (0 is the newest).
    pub fn get(&self, index: usize) -> Option<&JournalEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::model::Commit;
    use crate::persona::Reflection;

    fn entry(id: &str) -> JournalEntry {
        let commit = Commit::fixed(id, format!("ap-{id}"), "2025-11-07T14:30:00+00:00");
        JournalEntry::new(&commit, format!("dilemma {id}"), Reflection::from_fn(|_| "r".into()))
    }

    #[test]
    fn test_append_inserts_at_head() {
        let mut store = EntryStore::new();
        for (i, id) in ["a", "b", "c"].into_iter().enumerate() {
            store.append(entry(id));
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.get(0).unwrap().id, id);
        }
        let order: Vec<&str> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_find_by_id() {
        let store = EntryStore::from_entries([entry("a"), entry("b")]);
        assert_eq!(store.find_by_id("b").unwrap().dilemma, "dilemma b");
        assert!(store.find_by_id("zzz").is_none());
    }

    #[test]
    fn test_update_action_plan_only_touches_target() {
        let mut store = EntryStore::from_entries([entry("a"), entry("b")]);
        let before = store.clone();
        let commit = Commit::fixed("unused", "ap-new", "2025-11-08T10:00:00+00:00");
        let plan = ActionPlan::new(&commit, "b", vec!["one".into()]).unwrap();

        assert!(store.update_action_plan("b", plan.clone()));
        assert_eq!(store.find_by_id("b").unwrap().action_plan, Some(plan));
        assert_eq!(store.get(0), before.get(0));
        assert_eq!(store.get(1).unwrap().dilemma, before.get(1).unwrap().dilemma);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_action_plan_rewrites_back_reference() {
        let mut store = EntryStore::from_entries([entry("a"), entry("b")]);
        let commit = Commit::fixed("unused", "ap-new", "2025-11-08T10:00:00+00:00");
        let plan = ActionPlan::new(&commit, "a", vec!["one".into()]).unwrap();

        assert!(store.update_action_plan("b", plan));
        let stored = store.find_by_id("b").unwrap().action_plan.as_ref().unwrap();
        assert_eq!(stored.entry_id, "b");
        assert!(store.find_by_id("a").unwrap().action_plan.is_none());
    }

    #[test]
    fn test_update_action_plan_unknown_id_is_noop() {
        let mut store = EntryStore::from_entries([entry("a")]);
        let before = store.clone();
        let commit = Commit::fixed("unused", "ap-x", "2025-11-08T10:00:00+00:00");
        let plan = ActionPlan::new(&commit, "ghost", vec!["one".into()]).unwrap();

        assert!(!store.update_action_plan("ghost", plan));
        assert_eq!(store, before);
    }
}

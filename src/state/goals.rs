//! Goal checklist state: completion flags, derived progress, persistence.
//!
//! The checklist is defined by the page's static catalog; goals are never
//! created or destroyed at runtime. Completion flags live in a sparse map
//! (absence == not completed) that is serialized whole to one storage key
//! on every mutation. Goal counts are small and bounded by page content,
//! so whole-map writes keep the persisted copy trivially equal to the
//! in-memory copy.

#[cfg(test)]
#[path = "goals_test.rs"]
mod goals_test;

use std::collections::HashMap;

use crate::store::{PersistentStore, StorageBackend};

/// Storage key for the serialized completion map.
pub const GOALS_STORAGE_KEY: &str = "goalpost_goals";

/// A catalog entry for one checklist item. Display fields only; the
/// completion flag lives in [`GoalsState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Goal {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
}

/// Aggregate completion numbers, recomputed after every mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub percentage: usize,
}

/// Completion flags for the fixed set of goals on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalsState {
    ids: Vec<String>,
    done: HashMap<String, bool>,
}

impl GoalsState {
    /// Build the state for a page with the given goal ids, all unchecked.
    pub fn new<I, S>(goal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: goal_ids.into_iter().map(Into::into).collect(),
            done: HashMap::new(),
        }
    }

    /// Overlay flags restored from storage. Ids not in the current catalog
    /// are dropped; the map is rewritten whole on the next toggle anyway.
    pub fn apply_saved(&mut self, saved: &HashMap<String, bool>) {
        for id in &self.ids {
            if let Some(flag) = saved.get(id) {
                self.done.insert(id.clone(), *flag);
            }
        }
    }

    /// Flip the flag for `goal_id` and return the new value, or `None`
    /// (leaving all state untouched) when the id is not on the page.
    pub fn toggle(&mut self, goal_id: &str) -> Option<bool> {
        if !self.ids.iter().any(|id| id == goal_id) {
            return None;
        }
        let flag = self.done.entry(goal_id.to_owned()).or_insert(false);
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_done(&self, goal_id: &str) -> bool {
        self.done.get(goal_id).copied().unwrap_or(false)
    }

    /// Recompute the aggregate view. `percentage` rounds half-up and is 0
    /// for an empty catalog.
    pub fn progress(&self) -> ProgressSummary {
        let total = self.ids.len();
        let completed = self.done.values().filter(|done| **done).count();
        let percentage = if total == 0 {
            0
        } else {
            (completed * 100 + total / 2) / total
        };
        ProgressSummary { total, completed, percentage }
    }

    /// The persisted shape: the raw id → flag map.
    pub fn snapshot(&self) -> &HashMap<String, bool> {
        &self.done
    }
}

/// Owns [`GoalsState`] and keeps the persisted copy reconciled with it.
///
/// Every mutating operation completes in one synchronous unit: memory
/// flip, whole-map write-through, and the caller re-derives the summary.
/// A failed write degrades to in-memory state; it never blocks the toggle.
#[derive(Debug)]
pub struct GoalTracker<B> {
    store: PersistentStore<B>,
    state: GoalsState,
}

impl<B: StorageBackend> GoalTracker<B> {
    /// One-time load-and-reconcile pass for the page's goal ids.
    ///
    /// A missing or malformed persisted map is treated as empty: every
    /// goal starts unchecked and the page works without persistence.
    pub fn initialize<I, S>(backend: B, goal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = PersistentStore::new(backend);
        let mut state = GoalsState::new(goal_ids);
        if let Some(raw) = store.read(GOALS_STORAGE_KEY) {
            match serde_json::from_str::<HashMap<String, bool>>(&raw) {
                Ok(saved) => state.apply_saved(&saved),
                Err(e) => {
                    log::warn!("discarding malformed saved goals: {e}");
                }
            }
        }
        Self { store, state }
    }

    /// Flip `goal_id`, persist the whole map, and return the new flag.
    /// Unknown ids are a no-op returning `None`.
    pub fn toggle(&mut self, goal_id: &str) -> Option<bool> {
        let flag = self.state.toggle(goal_id)?;
        self.persist();
        Some(flag)
    }

    pub fn is_done(&self, goal_id: &str) -> bool {
        self.state.is_done(goal_id)
    }

    pub fn progress(&self) -> ProgressSummary {
        self.state.progress()
    }

    fn persist(&self) {
        match serde_json::to_string(self.state.snapshot()) {
            Ok(json) => {
                // Write failures are logged by the store; in-memory state
                // stays authoritative either way.
                let _ = self.store.write(GOALS_STORAGE_KEY, &json);
            }
            Err(e) => log::warn!("could not serialize goals: {e}"),
        }
    }
}

use std::cell::Cell;
use std::collections::HashMap;

use super::*;
use crate::store::{MemoryBackend, StorageError};

/// Backend whose writes can be switched off to simulate quota failures.
/// Reads always work so reconciliation behavior stays observable.
struct FlakyBackend {
    inner: MemoryBackend,
    fail_writes: Cell<bool>,
}

impl FlakyBackend {
    fn new() -> Self {
        Self { inner: MemoryBackend::new(), fail_writes: Cell::new(false) }
    }
}

impl StorageBackend for FlakyBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Rejected("simulated quota".to_owned()));
        }
        self.inner.set(key, value)
    }
}

fn five_goals() -> Vec<&'static str> {
    vec!["g1", "g2", "g3", "g4", "g5"]
}

fn saved_map(backend: &MemoryBackend) -> HashMap<String, bool> {
    let raw = backend
        .get(GOALS_STORAGE_KEY)
        .expect("memory get")
        .expect("goals were persisted");
    serde_json::from_str(&raw).expect("persisted goals are valid JSON")
}

// =============================================================
// GoalsState: toggle semantics
// =============================================================

#[test]
fn fresh_state_has_everything_unchecked() {
    let state = GoalsState::new(five_goals());
    for id in five_goals() {
        assert!(!state.is_done(id));
    }
    assert_eq!(
        state.progress(),
        ProgressSummary { total: 5, completed: 0, percentage: 0 }
    );
}

#[test]
fn toggle_flips_absent_to_true_first() {
    let mut state = GoalsState::new(five_goals());
    assert_eq!(state.toggle("g1"), Some(true));
    assert!(state.is_done("g1"));
}

#[test]
fn double_toggle_restores_original_value() {
    let mut state = GoalsState::new(five_goals());
    assert_eq!(state.toggle("g1"), Some(true));
    assert_eq!(state.toggle("g1"), Some(false));
    assert!(!state.is_done("g1"));
    assert_eq!(state.progress().completed, 0);
}

#[test]
fn toggle_parity_matches_call_count() {
    let mut state = GoalsState::new(five_goals());
    for count in 1..=7 {
        state.toggle("g3");
        assert_eq!(state.is_done("g3"), count % 2 == 1, "after {count} toggles");
    }
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut state = GoalsState::new(five_goals());
    state.toggle("g2");
    let before = state.clone();

    assert_eq!(state.toggle("not-a-goal"), None);
    assert_eq!(state, before);
    assert_eq!(state.progress(), before.progress());
}

// =============================================================
// GoalsState: progress math
// =============================================================

#[test]
fn progress_counts_true_flags_only() {
    let mut state = GoalsState::new(five_goals());
    state.toggle("g1");
    state.toggle("g2");
    state.toggle("g2"); // back to false, stays in the map
    assert_eq!(
        state.progress(),
        ProgressSummary { total: 5, completed: 1, percentage: 20 }
    );
}

#[test]
fn percentage_rounds_half_up() {
    let mut state = GoalsState::new(vec!["a", "b", "c"]);
    state.toggle("a");
    assert_eq!(state.progress().percentage, 33);
    state.toggle("b");
    assert_eq!(state.progress().percentage, 67);
    state.toggle("c");
    assert_eq!(state.progress().percentage, 100);
}

#[test]
fn empty_catalog_reports_zero_percent() {
    let state = GoalsState::new(Vec::<String>::new());
    assert_eq!(
        state.progress(),
        ProgressSummary { total: 0, completed: 0, percentage: 0 }
    );
}

#[test]
fn progress_stays_in_bounds_across_random_walk() {
    let mut state = GoalsState::new(five_goals());
    let walk = ["g1", "g4", "g1", "g5", "g5", "g2", "g3", "g4", "g1"];
    for id in walk {
        state.toggle(id);
        let p = state.progress();
        assert!(p.completed <= p.total);
        assert!(p.percentage <= 100);
    }
}

// =============================================================
// GoalTracker: five-goal walkthrough
// =============================================================

#[test]
fn initialize_without_saved_state_starts_at_zero() {
    let tracker = GoalTracker::initialize(MemoryBackend::new(), five_goals());
    assert_eq!(
        tracker.progress(),
        ProgressSummary { total: 5, completed: 0, percentage: 0 }
    );
}

#[test]
fn toggling_g1_and_g3_reaches_forty_percent() {
    let mut tracker = GoalTracker::initialize(MemoryBackend::new(), five_goals());
    tracker.toggle("g1");
    tracker.toggle("g3");
    assert_eq!(
        tracker.progress(),
        ProgressSummary { total: 5, completed: 2, percentage: 40 }
    );

    tracker.toggle("g1");
    assert_eq!(
        tracker.progress(),
        ProgressSummary { total: 5, completed: 1, percentage: 20 }
    );
}

// =============================================================
// GoalTracker: persistence reconciliation
// =============================================================

#[test]
fn persisted_copy_equals_memory_after_every_toggle() {
    let backend = MemoryBackend::new();
    let mut tracker = GoalTracker::initialize(&backend, five_goals());
    for id in ["g1", "g3", "g1", "g5"] {
        tracker.toggle(id);
        let saved = saved_map(&backend);
        for goal in five_goals() {
            assert_eq!(
                saved.get(goal).copied().unwrap_or(false),
                tracker.is_done(goal),
                "mismatch for {goal}"
            );
        }
    }
}

#[test]
fn reload_reconstructs_identical_flags() {
    let backend = MemoryBackend::new();
    {
        let mut tracker = GoalTracker::initialize(&backend, five_goals());
        tracker.toggle("g2");
        tracker.toggle("g4");
        tracker.toggle("g2");
    }

    let reloaded = GoalTracker::initialize(&backend, five_goals());
    assert!(!reloaded.is_done("g1"));
    assert!(!reloaded.is_done("g2"));
    assert!(reloaded.is_done("g4"));
    assert_eq!(reloaded.progress().completed, 1);
}

#[test]
fn malformed_saved_state_is_treated_as_empty() {
    let backend = MemoryBackend::new();
    backend.seed(GOALS_STORAGE_KEY, "{not json");

    let tracker = GoalTracker::initialize(&backend, five_goals());
    assert_eq!(
        tracker.progress(),
        ProgressSummary { total: 5, completed: 0, percentage: 0 }
    );
}

#[test]
fn saved_state_with_wrong_shape_is_treated_as_empty() {
    let backend = MemoryBackend::new();
    backend.seed(GOALS_STORAGE_KEY, "[1, 2, 3]");

    let tracker = GoalTracker::initialize(&backend, five_goals());
    assert_eq!(tracker.progress().completed, 0);
}

#[test]
fn stale_ids_from_an_old_catalog_are_dropped() {
    let backend = MemoryBackend::new();
    backend.seed(GOALS_STORAGE_KEY, r#"{"g1":true,"retired-goal":true}"#);

    let mut tracker = GoalTracker::initialize(&backend, five_goals());
    assert!(tracker.is_done("g1"));
    assert_eq!(tracker.progress().completed, 1);

    // The next write-through rewrites the map without the stale entry.
    tracker.toggle("g2");
    let saved = saved_map(&backend);
    assert!(!saved.contains_key("retired-goal"));
    assert_eq!(saved.get("g1"), Some(&true));
}

// =============================================================
// GoalTracker: storage-failure degradation
// =============================================================

#[test]
fn write_failure_does_not_block_the_toggle() {
    let backend = FlakyBackend::new();
    backend.fail_writes.set(true);
    let mut tracker = GoalTracker::initialize(&backend, five_goals());

    assert_eq!(tracker.toggle("g2"), Some(true));
    assert!(tracker.is_done("g2"));
    assert_eq!(
        tracker.progress(),
        ProgressSummary { total: 5, completed: 1, percentage: 20 }
    );
}

#[test]
fn recovered_store_persists_from_in_memory_state() {
    let backend = FlakyBackend::new();
    backend.fail_writes.set(true);
    let mut tracker = GoalTracker::initialize(&backend, five_goals());
    tracker.toggle("g2");
    tracker.toggle("g5");

    backend.fail_writes.set(false);
    assert_eq!(tracker.toggle("g2"), Some(false));

    let saved = saved_map(&backend.inner);
    assert_eq!(saved.get("g2"), Some(&false));
    assert_eq!(saved.get("g5"), Some(&true));
    assert_eq!(tracker.progress().completed, 1);
}

// =============================================================
// Goal catalog type
// =============================================================

#[test]
fn goal_entries_compare_by_value() {
    let a = Goal { id: "g1", title: "T", detail: "D", icon: "🎯" };
    let b = a;
    assert_eq!(a, b);
}

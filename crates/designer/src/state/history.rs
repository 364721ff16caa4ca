//! Undo/redo history over garden snapshots

use std::collections::VecDeque;
use std::mem;

use crate::document::Snapshot;

/// Default cap on the number of undo steps
pub const MAX_HISTORY: usize = 50;

/// Present snapshot with bounded past and future stacks.
///
/// `future` is only non-empty right after an undo; any commit clears it.
#[derive(Debug, Clone)]
pub struct HistoryState {
    past: VecDeque<Snapshot>,
    present: Snapshot,
    future: VecDeque<Snapshot>,
    limit: usize,
}

impl HistoryState {
    pub fn new(present: Snapshot) -> Self {
        Self::with_limit(present, MAX_HISTORY)
    }

    pub fn with_limit(present: Snapshot, limit: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(limit.min(MAX_HISTORY) + 1),
            present,
            future: VecDeque::new(),
            limit,
        }
    }

    /// Current snapshot
    pub fn present(&self) -> &Snapshot {
        &self.present
    }

    /// Past snapshots, oldest first
    pub fn past(&self) -> impl Iterator<Item = &Snapshot> {
        self.past.iter()
    }

    /// Future snapshots, next redo first
    pub fn future(&self) -> impl Iterator<Item = &Snapshot> {
        self.future.iter()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Push the oldest-evicting entry onto `past`.
    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    /// Make `next` the present, remembering the old present for undo.
    pub fn commit(&mut self, next: Snapshot) {
        let previous = mem::replace(&mut self.present, next);
        self.push_past(previous);
        self.future.clear();
    }

    /// Swap the present without recording history (selection, settings).
    pub fn replace_present(&mut self, next: Snapshot) {
        self.present = next;
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = mem::replace(&mut self.present, next);
        self.push_past(current);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use shared::Garden;

    fn snap(name: &str) -> Snapshot {
        Arc::new(Garden::new("g", name))
    }

    fn names<'a>(it: impl Iterator<Item = &'a Snapshot>) -> Vec<String> {
        it.map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_initial_empty() {
        let h = HistoryState::new(snap("p0"));
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.limit(), MAX_HISTORY);
        assert_eq!(h.present().name, "p0");
    }

    #[test]
    fn test_commit_pushes_past_and_clears_future() {
        let mut h = HistoryState::new(snap("p0"));
        h.commit(snap("p1"));
        h.commit(snap("p2"));
        assert!(h.undo());
        assert_eq!(h.future_len(), 1);

        h.commit(snap("p3"));
        assert_eq!(h.future_len(), 0);
        assert_eq!(names(h.past()), vec!["p0", "p1"]);
        assert_eq!(h.present().name, "p3");
    }

    #[test]
    fn test_undo_redo_restore_identical_snapshots() {
        let mut h = HistoryState::new(snap("p0"));
        let before = Arc::clone(h.present());
        let after = snap("p1");
        h.commit(Arc::clone(&after));

        assert!(h.undo());
        assert!(Arc::ptr_eq(h.present(), &before));
        assert!(h.redo());
        assert!(Arc::ptr_eq(h.present(), &after));
    }

    #[test]
    fn test_undo_prepends_future() {
        let mut h = HistoryState::new(snap("p0"));
        h.commit(snap("p1"));
        h.commit(snap("p2"));
        h.undo();
        h.undo();
        assert_eq!(names(h.future()), vec!["p1", "p2"]);
        assert_eq!(h.present().name, "p0");
    }

    #[test]
    fn test_empty_undo_redo_are_noops() {
        let mut h = HistoryState::new(snap("p0"));
        let before = Arc::clone(h.present());
        assert!(!h.undo());
        assert!(!h.redo());
        assert!(Arc::ptr_eq(h.present(), &before));
    }

    #[test]
    fn test_past_evicts_oldest_first() {
        let mut h = HistoryState::new(snap("p0"));
        for i in 1..=60 {
            h.commit(snap(&format!("p{i}")));
        }
        assert_eq!(h.past_len(), MAX_HISTORY);
        // p0..p9 evicted; oldest remaining is p10
        assert_eq!(h.past().next().unwrap().name, "p10");
        assert_eq!(h.present().name, "p60");
    }

    #[test]
    fn test_custom_limit() {
        let mut h = HistoryState::with_limit(snap("p0"), 2);
        h.commit(snap("p1"));
        h.commit(snap("p2"));
        h.commit(snap("p3"));
        assert_eq!(names(h.past()), vec!["p1", "p2"]);
        assert!(h.undo());
        assert!(h.undo());
        assert!(!h.undo());
        assert_eq!(h.present().name, "p1");
    }

    #[test]
    fn test_replace_present_leaves_stacks() {
        let mut h = HistoryState::new(snap("p0"));
        h.commit(snap("p1"));
        h.undo();
        h.replace_present(snap("p0-selected"));
        assert_eq!(h.past_len(), 0);
        assert_eq!(h.future_len(), 1);
        assert_eq!(h.present().name, "p0-selected");
    }
}

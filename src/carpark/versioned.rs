//! # Versioned Snapshot Log
//!
//! [`VersionedBook`] keeps every committed state of the car park book as an
//! immutable [`Snapshot`] plus a cursor pointing at the state that represents "now".
//!
//! ```text
//! commit(D) after two undos:
//!
//!   before:  [A] [B] [C]        after:  [A] [D]
//!             ^current                       ^current
//! ```
//!
//! Committing always truncates everything after the cursor before appending, so a
//! new edit made after an undo throws away the redo branch. History is strictly
//! linear; undo and redo only move the cursor and are O(1).

use crate::book::CarparkBook;
use crate::error::{CarparkError, Result};
use std::sync::Arc;

/// An immutable state of the car park book.
pub type Snapshot = Arc<CarparkBook>;

#[derive(Debug, Clone)]
pub struct VersionedBook {
    states: Vec<Snapshot>,
    current: usize,
}

impl Default for VersionedBook {
    fn default() -> Self {
        Self::new(CarparkBook::new())
    }
}

impl VersionedBook {
    /// Starts a history containing only `initial`.
    pub fn new(initial: CarparkBook) -> Self {
        Self {
            states: vec![Arc::new(initial)],
            current: 0,
        }
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        &self.states[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of snapshots retained, including any redo tail. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.states.len()
    }

    /// Records `book` as the newest state, discarding any redo tail.
    pub fn commit(&mut self, book: CarparkBook) -> &Snapshot {
        self.states.truncate(self.current + 1);
        self.states.push(Arc::new(book));
        self.current = self.states.len() - 1;
        tracing::debug!(
            current = self.current,
            carparks = self.states[self.current].len(),
            "committed car park book"
        );
        &self.states[self.current]
    }

    pub fn undo(&mut self) -> Result<&Snapshot> {
        if !self.can_undo() {
            return Err(CarparkError::NoEarlierState);
        }
        self.current -= 1;
        tracing::debug!(current = self.current, "undo");
        Ok(&self.states[self.current])
    }

    pub fn redo(&mut self) -> Result<&Snapshot> {
        if !self.can_redo() {
            return Err(CarparkError::NoLaterState);
        }
        self.current += 1;
        tracing::debug!(current = self.current, "redo");
        Ok(&self.states[self.current])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::carpark;

    fn book_with(codes: &[&str]) -> CarparkBook {
        CarparkBook::from_carparks(codes.iter().map(|c| carpark(c, "Somewhere"))).unwrap()
    }

    #[test]
    fn fresh_log_cannot_move() {
        let mut log = VersionedBook::default();
        assert!(matches!(log.undo(), Err(CarparkError::NoEarlierState)));
        assert!(matches!(log.redo(), Err(CarparkError::NoLaterState)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.current_index(), 0);
        assert!(log.current_snapshot().is_empty());
    }

    #[test]
    fn commit_advances_cursor() {
        let mut log = VersionedBook::default();
        log.commit(book_with(&["A"]));
        log.commit(book_with(&["A", "B"]));
        assert_eq!(log.len(), 3);
        assert_eq!(log.current_index(), 2);
        assert_eq!(log.current_snapshot().len(), 2);
    }

    #[test]
    fn undo_then_redo_returns_same_snapshot() {
        let mut log = VersionedBook::default();
        log.commit(book_with(&["A"]));
        let before = log.current_snapshot().clone();

        let undone = log.undo().unwrap().clone();
        assert!(undone.is_empty());

        let redone = log.redo().unwrap().clone();
        assert!(Arc::ptr_eq(&before, &redone));
    }

    #[test]
    fn undo_stops_at_oldest() {
        let mut log = VersionedBook::default();
        log.commit(book_with(&["A"]));
        log.undo().unwrap();
        assert!(matches!(log.undo(), Err(CarparkError::NoEarlierState)));
        assert_eq!(log.current_index(), 0);
    }

    #[test]
    fn commit_after_undo_discards_redo_tail() {
        let mut log = VersionedBook::default();
        log.commit(book_with(&["A"]));
        log.commit(book_with(&["A", "B"]));
        log.undo().unwrap();
        log.undo().unwrap();
        assert!(log.can_redo());

        log.commit(book_with(&["C"]));
        assert_eq!(log.len(), 2);
        assert_eq!(log.current_index(), 1);
        assert!(!log.can_redo());
        assert!(matches!(log.redo(), Err(CarparkError::NoLaterState)));
    }

    #[test]
    fn snapshots_are_not_affected_by_later_commits() {
        let mut log = VersionedBook::new(book_with(&["A"]));
        let first = log.current_snapshot().clone();
        log.commit(book_with(&["B", "C"]));
        assert_eq!(first.len(), 1);
        assert_eq!(first.iter().next().unwrap().code.as_str(), "A");
    }
}

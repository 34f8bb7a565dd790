//! Snapshot history with linear undo/redo navigation.
//!
//! A history owns an ordered log of snapshots plus a position marking the
//! current view. Saving appends, undo and redo move the position, and the
//! stored snapshots themselves are never mutated.

use super::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single saved snapshot plus the moment it was captured.
///
/// The timestamp is metadata only; navigation is driven purely by the
/// log order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: Snapshot> {
    /// The captured value.
    pub snapshot: S,
    /// When `save` recorded it.
    pub saved_at: DateTime<Utc>,
}

/// Ordered log of snapshots with a movable current position.
///
/// The position is `None` only while the log is empty; after the first
/// save it always indexes a valid entry. Undo and redo are boundary-safe:
/// at the bottom or the top of the log they return `None` and leave the
/// position where it was.
///
/// Saving while the position sits before the last entry discards every
/// entry after the position before appending. That is the usual undo/redo
/// contract: editing after an undo forfeits the redo future.
///
/// # Example
///
/// ```rust
/// use patternbook::core::{EditorState, History};
///
/// let mut history = History::new();
/// let first = EditorState::new("a", 1, false);
/// let second = EditorState::new("ab", 2, true);
///
/// history.save(first.clone());
/// history.save(second.clone());
///
/// assert_eq!(history.undo(), Some(&first));
/// assert_eq!(history.redo(), Some(&second));
/// assert_eq!(history.redo(), None); // already at the top
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: Snapshot> {
    entries: Vec<HistoryEntry<S>>,
    position: Option<usize>,
}

impl<S: Snapshot> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Snapshot> History<S> {
    /// Create a new empty history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use patternbook::core::{EditorState, History};
    ///
    /// let history: History<EditorState> = History::new();
    /// assert!(history.is_empty());
    /// assert_eq!(history.position(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: None,
        }
    }

    /// Append a snapshot as the new current entry.
    ///
    /// If prior undos left the position before the last entry, the
    /// entries after the position are dropped first; they are no longer
    /// reachable by [`redo`](Self::redo) afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use patternbook::core::{EditorState, History};
    ///
    /// let mut history = History::new();
    /// history.save(EditorState::new("a", 1, false));
    /// history.save(EditorState::new("ab", 2, false));
    /// history.save(EditorState::new("abc", 3, false));
    ///
    /// history.undo();
    /// history.save(EditorState::new("abX", 3, true));
    ///
    /// // "abc" was discarded at the branch point.
    /// assert_eq!(history.len(), 3);
    /// assert_eq!(history.redo(), None);
    /// ```
    pub fn save(&mut self, snapshot: S) {
        if let Some(position) = self.position {
            self.entries.truncate(position + 1);
        }
        self.entries.push(HistoryEntry {
            snapshot,
            saved_at: Utc::now(),
        });
        self.position = Some(self.entries.len() - 1);
    }

    /// Step the position back and return the snapshot now current.
    ///
    /// Returns `None` without moving when the log is empty or already at
    /// its first entry; the bottom of history is a no-op, not an error.
    pub fn undo(&mut self) -> Option<&S> {
        match self.position {
            Some(position) if position > 0 => {
                self.position = Some(position - 1);
                self.entries.get(position - 1).map(|entry| &entry.snapshot)
            }
            _ => None,
        }
    }

    /// Step the position forward and return the snapshot now current.
    ///
    /// Returns `None` without moving when the position is already at the
    /// last entry (or the log is empty).
    pub fn redo(&mut self) -> Option<&S> {
        match self.position {
            Some(position) if position + 1 < self.entries.len() => {
                self.position = Some(position + 1);
                self.entries.get(position + 1).map(|entry| &entry.snapshot)
            }
            _ => None,
        }
    }

    /// The snapshot at the current position, if any.
    pub fn current(&self) -> Option<&S> {
        self.position
            .and_then(|position| self.entries.get(position))
            .map(|entry| &entry.snapshot)
    }

    /// The current position, or `None` while the log is empty.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no snapshot has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an undo would move the position.
    pub fn can_undo(&self) -> bool {
        matches!(self.position, Some(position) if position > 0)
    }

    /// Whether a redo would move the position.
    pub fn can_redo(&self) -> bool {
        matches!(self.position, Some(position) if position + 1 < self.entries.len())
    }

    /// When the entry at `index` was saved.
    pub fn saved_at(&self, index: usize) -> Option<DateTime<Utc>> {
        self.entries.get(index).map(|entry| entry.saved_at)
    }

    /// All saved entries in order.
    pub fn entries(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EditorPatch, EditorState};

    fn state(content: &str) -> EditorState {
        EditorState::new(content, content.len(), false)
    }

    #[test]
    fn new_history_is_empty() {
        let history: History<EditorState> = History::new();
        assert!(history.is_empty());
        assert_eq!(history.position(), None);
        assert_eq!(history.current(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn save_moves_position_to_the_new_entry() {
        let mut history = History::new();

        history.save(state("a"));
        assert_eq!(history.position(), Some(0));

        history.save(state("ab"));
        assert_eq!(history.position(), Some(1));
        assert_eq!(history.current(), Some(&state("ab")));
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut history: History<EditorState> = History::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.position(), None);
    }

    #[test]
    fn undo_at_first_entry_is_a_noop() {
        let mut history = History::new();
        history.save(state("a"));

        assert_eq!(history.undo(), None);
        assert_eq!(history.position(), Some(0));
    }

    #[test]
    fn redo_at_last_entry_is_a_noop() {
        let mut history = History::new();
        history.save(state("a"));
        history.save(state("ab"));

        assert_eq!(history.redo(), None);
        assert_eq!(history.position(), Some(1));
    }

    #[test]
    fn undo_then_redo_restores_the_snapshot() {
        let mut history = History::new();
        history.save(state("a"));
        history.save(state("ab"));

        let before = history.current().cloned().unwrap();
        history.undo();
        assert_eq!(history.redo(), Some(&before));
    }

    #[test]
    fn undo_walks_back_through_saves() {
        let mut history = History::new();
        history.save(state("s0"));
        history.save(state("s1"));
        history.save(state("s2"));

        assert_eq!(history.undo(), Some(&state("s1")));
        assert_eq!(history.undo(), Some(&state("s0")));
        assert_eq!(history.redo(), Some(&state("s1")));
    }

    #[test]
    fn save_after_undo_discards_the_redo_future() {
        let mut history = History::new();
        history.save(state("a"));
        history.save(state("b"));
        history.save(state("c"));

        assert_eq!(history.undo(), Some(&state("b")));
        history.save(state("d"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), Some(2));
        assert_eq!(history.current(), Some(&state("d")));
        assert_eq!(history.redo(), None); // "c" is gone for good
    }

    #[test]
    fn navigation_never_mutates_stored_snapshots() {
        let mut history = History::new();
        let original = state("a").copy_with(EditorPatch {
            unsaved_changes: Some(true),
            ..Default::default()
        });
        history.save(original.clone());
        history.save(state("ab"));

        history.undo();
        history.redo();
        history.undo();

        assert_eq!(history.entries()[0].snapshot, original);
    }

    #[test]
    fn saved_at_is_recorded_per_entry() {
        let mut history = History::new();
        let before = Utc::now();
        history.save(state("a"));

        let saved = history.saved_at(0).unwrap();
        assert!(saved >= before);
        assert_eq!(history.saved_at(1), None);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new();
        history.save(state("a"));
        history.save(state("ab"));
        history.undo();

        let json = serde_json::to_string(&history).unwrap();
        let back: History<EditorState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), history.len());
        assert_eq!(back.position(), history.position());
        assert_eq!(back.current(), history.current());
    }
}

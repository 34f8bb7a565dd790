//! The Snapshot trait for immutable captured values.
//!
//! Everything a history stores must implement this trait, which names the
//! value for display and exposes a couple of pure inspection methods.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that can be captured into a history.
///
/// A snapshot is an immutable value describing a session at one point in
/// time. Once captured it is never mutated; deriving a changed version
/// always produces a fresh value.
///
/// # Required Traits
///
/// - `Clone`: snapshots must be cloneable so callers can keep a working
///   copy while the history owns its own
/// - `PartialEq`: snapshots must be comparable for navigation tests
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots must be serializable so a
///   session dump is always possible
///
/// # Example
///
/// ```rust
/// use patternbook::core::Snapshot;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct SketchState {
///     strokes: Vec<String>,
///     dirty: bool,
/// }
///
/// impl Snapshot for SketchState {
///     fn label(&self) -> &str {
///         "sketch"
///     }
///
///     fn is_dirty(&self) -> bool {
///         self.dirty
///     }
/// }
/// ```
pub trait Snapshot: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the snapshot's label for display/logging.
    fn label(&self) -> &str;

    /// Check whether this snapshot carries unsaved work.
    ///
    /// Default implementation returns `false`.
    fn is_dirty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct NoteState {
        body: String,
        dirty: bool,
    }

    impl Snapshot for NoteState {
        fn label(&self) -> &str {
            "note"
        }

        fn is_dirty(&self) -> bool {
            self.dirty
        }
    }

    #[test]
    fn label_returns_fixed_name() {
        let note = NoteState {
            body: "milk".into(),
            dirty: false,
        };
        assert_eq!(note.label(), "note");
    }

    #[test]
    fn is_dirty_reflects_unsaved_work() {
        let clean = NoteState {
            body: "milk".into(),
            dirty: false,
        };
        let edited = NoteState {
            body: "milk, eggs".into(),
            dirty: true,
        };

        assert!(!clean.is_dirty());
        assert!(edited.is_dirty());
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let note = NoteState {
            body: "milk".into(),
            dirty: true,
        };
        let json = serde_json::to_string(&note).unwrap();
        let back: NoteState = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }

    #[test]
    fn snapshot_is_cloneable_and_comparable() {
        let note = NoteState {
            body: "milk".into(),
            dirty: false,
        };
        let copy = note.clone();
        assert_eq!(note, copy);
    }
}

//! The editor session snapshot.
//!
//! `EditorState` is the crate's worked example of immutability with copy:
//! the value is never mutated in place, and every change goes through
//! `copy_with`, which derives a fresh, fully-formed snapshot.

use std::fmt;

crate::snapshot_struct! {
    /// Immutable state of a code editing session.
    ///
    /// # Example
    ///
    /// ```rust
    /// use patternbook::core::{EditorPatch, EditorState};
    ///
    /// let state = EditorState::new("let x = 1;", 4, false);
    ///
    /// // Move the cursor; everything else carries over.
    /// let moved = state.copy_with(EditorPatch {
    ///     cursor: Some(9),
    ///     ..Default::default()
    /// });
    ///
    /// assert_eq!(moved.content, state.content);
    /// assert_eq!(moved.cursor, 9);
    /// assert_eq!(state.cursor, 4); // original untouched
    /// ```
    pub struct EditorState {
        /// Full text of the buffer.
        pub content: String,
        /// Cursor offset into the content.
        pub cursor: usize,
        /// Whether the buffer holds edits not yet written out.
        pub unsaved_changes: bool,
    }
    label: "editor"
    dirty: unsaved_changes
    patch: EditorPatch
}

impl EditorState {
    /// Create a snapshot from explicit field values.
    pub fn new(content: impl Into<String>, cursor: usize, unsaved_changes: bool) -> Self {
        Self {
            content: content.into(),
            cursor,
            unsaved_changes,
        }
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Editor state")?;
        writeln!(f, "    Content: {}", self.content)?;
        writeln!(f, "    Cursor position: {}", self.cursor)?;
        write!(f, "    Unsaved changes: {}", self.unsaved_changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Snapshot;

    #[test]
    fn copy_with_defaults_to_previous_values() {
        let state = EditorState::new("console.log('hi')", 2, false);

        let derived = state.copy_with(EditorPatch {
            content: Some("console.log('hi');\nconsole.log('again');".into()),
            cursor: Some(3),
            unsaved_changes: Some(true),
        });

        assert_eq!(derived.cursor, 3);
        assert!(derived.unsaved_changes);

        let moved = derived.copy_with(EditorPatch {
            cursor: Some(5),
            ..Default::default()
        });

        assert_eq!(moved.content, derived.content);
        assert_eq!(moved.cursor, 5);
        assert!(moved.unsaved_changes);
    }

    #[test]
    fn derivation_never_touches_the_original() {
        let state = EditorState::new("abc", 0, false);
        let _ = state.copy_with(EditorPatch {
            content: Some("xyz".into()),
            cursor: Some(3),
            unsaved_changes: Some(true),
        });

        assert_eq!(state.content, "abc");
        assert_eq!(state.cursor, 0);
        assert!(!state.unsaved_changes);
    }

    #[test]
    fn dirty_flag_tracks_unsaved_changes() {
        let clean = EditorState::new("abc", 0, false);
        assert!(!clean.is_dirty());

        let edited = clean.copy_with(EditorPatch {
            unsaved_changes: Some(true),
            ..Default::default()
        });
        assert!(edited.is_dirty());
    }

    #[test]
    fn display_dumps_every_field() {
        let state = EditorState::new("let x = 1;", 4, true);
        let dump = state.to_string();

        assert!(dump.contains("Content: let x = 1;"));
        assert!(dump.contains("Cursor position: 4"));
        assert!(dump.contains("Unsaved changes: true"));
    }
}

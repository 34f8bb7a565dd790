//! Core snapshot and history types.
//!
//! This module contains the pure state core of the catalogue:
//! - Snapshot definitions via the `Snapshot` trait
//! - The `EditorState` value type with copy-on-derive semantics
//! - The `History` log with linear undo/redo navigation
//!
//! All values in this module are immutable once captured; the only thing
//! that ever moves is a history's position.

mod editor;
mod history;
mod macros;
mod snapshot;

pub use editor::{EditorPatch, EditorState};
pub use history::{History, HistoryEntry};
pub use snapshot::Snapshot;

//! Patternbook: classic design patterns in idiomatic Rust
//!
//! Patternbook is a small catalogue of design-pattern examples. The heart of
//! the crate is its state-carrying core: a fluent [`builder`] that assembles a
//! record step by step, and an immutable snapshot [`core::History`] that
//! supports linear undo/redo navigation. The remaining patterns (factory
//! method, abstract factory, singleton, adapter, bridge) are stateless
//! call-and-print demonstrations collected under [`patterns`], each with a
//! runnable demo under `demos/`.
//!
//! # Core Concepts
//!
//! - **Snapshot**: an immutable captured value of a session, via the
//!   [`core::Snapshot`] trait
//! - **History**: an ordered log of snapshots with a movable position;
//!   undo and redo move the position, never the snapshots
//! - **Builder**: stepwise construction of a record through chained setters
//!
//! # Example
//!
//! ```rust
//! use patternbook::core::{EditorPatch, EditorState, History};
//!
//! let mut history = History::new();
//!
//! let state = EditorState::new("fn main() {}", 2, false);
//! history.save(state.clone());
//!
//! let state = state.copy_with(EditorPatch {
//!     content: Some("fn main() { println!(\"hi\"); }".into()),
//!     cursor: Some(14),
//!     unsaved_changes: Some(true),
//! });
//! history.save(state.clone());
//!
//! let previous = history.undo().expect("one save to go back to");
//! assert_eq!(previous.cursor, 2);
//! assert_eq!(history.redo(), Some(&state));
//! ```

pub mod builder;
pub mod core;
pub mod patterns;

// Re-export commonly used types
pub use builder::{Computer, ComputerBuilder};
pub use core::{EditorPatch, EditorState, History, Snapshot};

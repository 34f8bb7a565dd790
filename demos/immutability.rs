//! Immutability with copy
//!
//! An editor session whose state is never mutated in place. Every change
//! derives a fresh snapshot via `copy_with`, and a history records them
//! for undo/redo navigation.
//!
//! Key concepts:
//! - Value types derived by copying, with only the changed fields overridden
//! - A history that stores snapshots and moves a position over them
//! - Undo/redo at the boundaries is a no-op, never an error
//!
//! Run with: cargo run --example immutability

use colored::Colorize;
use patternbook::core::{EditorPatch, EditorState, History};

fn main() {
    println!("=== Immutability with Copy ===\n");

    let mut history = History::new();
    let mut state = EditorState::new("console.log('Hello world')", 2, false);
    history.save(state.clone());

    println!("{}", "Initial state:".blue());
    println!("{state}\n");

    state = state.copy_with(EditorPatch {
        content: Some("console.log('Hello world');\nconsole.log('New line');".into()),
        cursor: Some(3),
        unsaved_changes: Some(true),
    });
    history.save(state.clone());

    println!("{}", "After the first edit:".blue());
    println!("{state}\n");

    state = state.copy_with(EditorPatch {
        cursor: Some(5),
        ..Default::default()
    });
    history.save(state.clone());

    println!("{}", "After moving the cursor:".yellow());
    println!("{state}\n");

    if let Some(previous) = history.undo() {
        state = previous.clone();
    }
    println!("{}", "After undo:".yellow());
    println!("{state}\n");

    if let Some(next) = history.redo() {
        state = next.clone();
    }
    println!("{}", "After redo:".yellow());
    println!("{state}");

    println!("\n=== Demo Complete ===");
}

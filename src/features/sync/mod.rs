//! # Feature: Command-Set Synchronization
//!
//! Smart syncing of the declared command set against Discord. A structural
//! snapshot of every declared command is diffed against the last published
//! state, and the publish API is only called when something actually changed.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Key the diff by (name, kind) instead of list position
//! - 1.0.0: Initial implementation with positional comparison

pub mod diff;
pub mod snapshot;
pub mod tree;

pub use diff::{diff_commands, CommandDiff};
pub use snapshot::{ChoiceSnapshot, CommandKind, CommandSnapshot, OptionKind, OptionSnapshot};
pub use tree::CommandTree;

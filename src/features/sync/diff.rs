//! # Command-Set Differ
//!
//! Classifies every command in two snapshot sets as unchanged, added,
//! removed, or updated. Pure and synchronous; the sync tree decides what to
//! do with the result.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 2.0.0: Key matching by (name, kind); positional comparison dropped
//! - 1.0.0: Initial implementation

use std::collections::HashMap;
use std::fmt;

use super::snapshot::{CommandKind, CommandSnapshot};

/// Result of diffing an old command set against a new one
///
/// Buckets preserve the iteration order of the inputs: `same`, `added`, and
/// `updated` follow the order of `new`; `removed` follows the order of `old`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandDiff {
    pub same: Vec<CommandSnapshot>,
    pub added: Vec<CommandSnapshot>,
    pub removed: Vec<CommandSnapshot>,
    pub updated: Vec<CommandSnapshot>,
}

impl CommandDiff {
    /// True when publishing is required to make the remote set match
    pub fn requires_sync(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.updated.is_empty()
    }

    /// Total number of changed commands
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.updated.len()
    }
}

impl fmt::Display for CommandDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<32} {:<12} {}", "Name", "Type", "Change")?;
        writeln!(f, "{:-<32} {:-<12} {:-<7}", "", "", "")?;
        for cmd in &self.added {
            writeln!(f, "{:<32} {:<12} Added", cmd.name, cmd.kind.label())?;
        }
        for cmd in &self.removed {
            writeln!(f, "{:<32} {:<12} Removed", cmd.name, cmd.kind.label())?;
        }
        for cmd in &self.updated {
            writeln!(f, "{:<32} {:<12} Updated", cmd.name, cmd.kind.label())?;
        }
        Ok(())
    }
}

/// Diff two command-set snapshots
///
/// Matching is keyed by `(name, kind)`; a key present on both sides with any
/// structural difference lands in `updated`, carrying the new snapshot.
/// `removed` carries the old snapshot. The operation is pure and performs no
/// I/O; duplicate keys within one input are an upstream data bug and are not
/// guarded against.
pub fn diff_commands(old: &[CommandSnapshot], new: &[CommandSnapshot]) -> CommandDiff {
    let old_by_key: HashMap<(&str, CommandKind), &CommandSnapshot> = old
        .iter()
        .map(|cmd| ((cmd.name.as_str(), cmd.kind), cmd))
        .collect();
    let new_by_key: HashMap<(&str, CommandKind), &CommandSnapshot> = new
        .iter()
        .map(|cmd| ((cmd.name.as_str(), cmd.kind), cmd))
        .collect();

    let mut diff = CommandDiff::default();

    for new_cmd in new {
        match old_by_key.get(&(new_cmd.name.as_str(), new_cmd.kind)) {
            None => diff.added.push(new_cmd.clone()),
            Some(old_cmd) if *old_cmd != new_cmd => diff.updated.push(new_cmd.clone()),
            Some(_) => diff.same.push(new_cmd.clone()),
        }
    }

    for old_cmd in old {
        if !new_by_key.contains_key(&(old_cmd.name.as_str(), old_cmd.kind)) {
            diff.removed.push(old_cmd.clone());
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sync::snapshot::{OptionKind, OptionSnapshot};
    use std::collections::BTreeMap;

    fn command(name: &str, kind: CommandKind, options: Vec<OptionSnapshot>) -> CommandSnapshot {
        CommandSnapshot {
            name: name.to_string(),
            kind,
            description: format!("{name} command"),
            default_member_permissions: None,
            nsfw: false,
            options,
            name_localizations: BTreeMap::new(),
            description_localizations: BTreeMap::new(),
        }
    }

    fn option(name: &str, required: bool) -> OptionSnapshot {
        OptionSnapshot {
            name: name.to_string(),
            description: format!("{name} option"),
            kind: OptionKind::String,
            required,
            autocomplete: false,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            channel_types: vec![],
            choices: vec![],
            options: vec![],
            name_localizations: BTreeMap::new(),
            description_localizations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_equal_sets_need_no_sync() {
        let old = vec![
            command("ping", CommandKind::ChatInput, vec![]),
            command("echo", CommandKind::ChatInput, vec![option("message", true)]),
        ];
        // Order must not matter for classification
        let new = vec![old[1].clone(), old[0].clone()];

        let diff = diff_commands(&old, &new);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert!(diff.updated.is_empty());
        assert_eq!(diff.same.len(), 2);
        assert!(!diff.requires_sync());
    }

    #[test]
    fn test_empty_old_classifies_everything_added() {
        let new = vec![
            command("ping", CommandKind::ChatInput, vec![]),
            command("echo", CommandKind::ChatInput, vec![]),
        ];
        let diff = diff_commands(&[], &new);
        assert_eq!(diff.added, new);
        assert!(diff.removed.is_empty());
        assert!(diff.updated.is_empty());
        assert!(diff.same.is_empty());
    }

    #[test]
    fn test_empty_new_classifies_everything_removed() {
        let old = vec![
            command("ping", CommandKind::ChatInput, vec![]),
            command("echo", CommandKind::ChatInput, vec![]),
        ];
        let diff = diff_commands(&old, &[]);
        assert_eq!(diff.removed, old);
        assert!(diff.added.is_empty());
        assert!(diff.updated.is_empty());
        assert!(diff.same.is_empty());
    }

    #[test]
    fn test_nested_attribute_change_is_updated_not_same() {
        let old = vec![command(
            "echo",
            CommandKind::ChatInput,
            vec![option("message", false)],
        )];
        let new = vec![command(
            "echo",
            CommandKind::ChatInput,
            vec![option("message", true)],
        )];

        let diff = diff_commands(&old, &new);
        assert!(diff.same.is_empty());
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.updated, new);
        assert!(diff.requires_sync());
    }

    #[test]
    fn test_updated_carries_the_new_snapshot() {
        let old = vec![command("ping", CommandKind::ChatInput, vec![])];
        let mut changed = old[0].clone();
        changed.description = "something else".to_string();

        let diff = diff_commands(&old, &[changed.clone()]);
        assert_eq!(diff.updated[0].description, "something else");
    }

    #[test]
    fn test_same_name_different_kind_are_distinct_commands() {
        let old = vec![command("info", CommandKind::ChatInput, vec![])];
        let new = vec![command("info", CommandKind::User, vec![])];

        let diff = diff_commands(&old, &new);
        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.removed.len(), 1);
        assert!(diff.updated.is_empty());
        assert!(diff.same.is_empty());
    }

    #[test]
    fn test_mixed_classification() {
        let old = vec![command("ping", CommandKind::ChatInput, vec![])];
        let new = vec![
            command("ping", CommandKind::ChatInput, vec![]),
            command("echo", CommandKind::ChatInput, vec![option("message", true)]),
        ];

        let diff = diff_commands(&old, &new);
        assert_eq!(diff.same.len(), 1);
        assert_eq!(diff.same[0].name, "ping");
        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].name, "echo");
        assert!(diff.removed.is_empty());
        assert!(diff.updated.is_empty());
        assert!(diff.requires_sync());
    }

    #[test]
    fn test_diff_is_idempotent_and_ordered() {
        let old = vec![
            command("a", CommandKind::ChatInput, vec![]),
            command("b", CommandKind::ChatInput, vec![]),
            command("c", CommandKind::ChatInput, vec![]),
        ];
        let new = vec![
            command("c", CommandKind::ChatInput, vec![option("x", true)]),
            command("d", CommandKind::ChatInput, vec![]),
            command("a", CommandKind::ChatInput, vec![]),
        ];

        let first = diff_commands(&old, &new);
        let second = diff_commands(&old, &new);
        assert_eq!(first, second);

        // Buckets follow input order: new-order for added/updated/same,
        // old-order for removed.
        assert_eq!(first.updated[0].name, "c");
        assert_eq!(first.added[0].name, "d");
        assert_eq!(first.same[0].name, "a");
        assert_eq!(first.removed[0].name, "b");
    }

    #[test]
    fn test_both_empty() {
        let diff = diff_commands(&[], &[]);
        assert!(!diff.requires_sync());
        assert_eq!(diff.change_count(), 0);
    }

    #[test]
    fn test_display_lists_changes() {
        let old = vec![command("gone", CommandKind::ChatInput, vec![])];
        let new = vec![command("fresh", CommandKind::User, vec![])];
        let rendered = diff_commands(&old, &new).to_string();
        assert!(rendered.contains("fresh"));
        assert!(rendered.contains("Added"));
        assert!(rendered.contains("gone"));
        assert!(rendered.contains("Removed"));
    }
}

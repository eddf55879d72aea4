//! # Slash Command Declarations
//!
//! Per-category command declarations plus the option-extraction helpers the
//! handlers share.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Declarations emit CommandSpec descriptors
//! - 1.0.0: Reorganized from monolithic slash_commands.rs

pub mod admin;
pub mod context_menu;
pub mod general;
pub mod math;

use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::CommandDataOption;

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

/// Utility function to get integer option from slash command
pub fn get_integer_option(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_i64())
}

/// Utility function to get boolean option from slash command
pub fn get_bool_option(options: &[CommandDataOption], name: &str) -> Option<bool> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_bool())
}

/// Walk nested sub-command/group wrappers down to the invoked leaf
///
/// Returns the sub-command path (e.g. `["functions", "power"]`) and the leaf's
/// parameter options.
pub fn subcommand_path(options: &[CommandDataOption]) -> (Vec<String>, &[CommandDataOption]) {
    let mut path = Vec::new();
    let mut current = options;
    while current.len() == 1
        && matches!(
            current[0].kind,
            CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup
        )
    {
        path.push(current[0].name.clone());
        current = &current[0].options;
    }
    (path, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;

    fn full_registry() -> CommandRegistry {
        crate::commands::build_registry()
    }

    #[test]
    fn test_registry_declares_expected_commands() {
        let registry = full_registry();
        let names: Vec<&str> = registry.specs().map(|s| s.name.as_str()).collect();
        for expected in ["ping", "echo", "help", "math", "sync", "extensions", "User Ping"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_every_declared_command_has_a_handler() {
        let registry = full_registry();
        for spec in registry.specs() {
            assert!(
                registry.contains(&spec.name),
                "no handler registered for {}",
                spec.name
            );
        }
    }

    #[test]
    fn test_declared_keys_are_unique() {
        let registry = full_registry();
        let mut keys: Vec<(String, u8)> = registry
            .specs()
            .map(|s| (s.name.clone(), s.kind.id()))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}

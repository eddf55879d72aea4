//! Context menu commands

use crate::commands::spec::CommandSpec;

/// Creates all context menu commands
pub fn create_commands() -> Vec<CommandSpec> {
    vec![CommandSpec::user_menu("User Ping")]
}

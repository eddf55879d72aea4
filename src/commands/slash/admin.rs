//! Admin slash commands: /sync, /extensions

use serenity::model::permissions::Permissions;

use crate::commands::spec::{CommandSpec, OptionSpec};

/// Creates admin commands
pub fn create_commands() -> Vec<CommandSpec> {
    vec![create_sync_command(), create_extensions_command()]
}

/// Creates the sync command (admin) - manually republish the command tree
fn create_sync_command() -> CommandSpec {
    CommandSpec::chat("sync", "Republish application commands if anything changed (Admin)")
        .permissions(Permissions::MANAGE_GUILD)
        .option(
            OptionSpec::string("mode", "What to compare against")
                .choice("Remote - fetch the published set first", "remote")
                .choice("Local - diff against the last-known set", "local"),
        )
}

/// Creates the extensions command (admin) - inspect loaded extension manifests
fn create_extensions_command() -> CommandSpec {
    CommandSpec::chat("extensions", "Inspect loaded extensions (Admin)")
        .permissions(Permissions::MANAGE_GUILD)
        .option(OptionSpec::sub_command("list", "List loaded extensions"))
        .option(
            OptionSpec::sub_command("info", "Show one extension's declared commands").option(
                OptionSpec::string("name", "Extension name")
                    .required(true)
                    .autocomplete(true),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_commands_require_manage_guild() {
        for command in create_commands() {
            assert_eq!(
                command.default_member_permissions,
                Some(Permissions::MANAGE_GUILD),
                "{} is missing permissions",
                command.name
            );
        }
    }

    #[test]
    fn test_extensions_info_name_autocompletes() {
        let extensions = create_extensions_command();
        let info = extensions.options.iter().find(|o| o.name == "info").unwrap();
        assert!(info.options[0].autocomplete);
        assert!(info.options[0].required);
    }
}

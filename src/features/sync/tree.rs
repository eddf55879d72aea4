//! # Command Tree
//!
//! The local source of truth for what this bot publishes: static registry
//! declarations plus whatever the loaded extensions declare. Publishing is
//! gated on the differ, so unchanged command sets never hit the API.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 2.0.0: Smart sync against stored last-known snapshots
//! - 1.0.0: Unconditional publish on startup

use std::sync::Arc;

use anyhow::{Context as _, Result};
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;
use tokio::sync::Mutex;

use super::diff::{diff_commands, CommandDiff};
use super::snapshot::CommandSnapshot;
use crate::commands::registry::CommandRegistry;
use crate::features::extensions::ExtensionHost;
use crate::features::translation::Translator;

/// Declared command set plus the last-known published state
pub struct CommandTree {
    registry: Arc<CommandRegistry>,
    extensions: Arc<ExtensionHost>,
    translator: Option<Arc<dyn Translator>>,
    guild: Option<GuildId>,
    last_known: Mutex<Vec<CommandSnapshot>>,
}

impl CommandTree {
    pub fn new(
        registry: Arc<CommandRegistry>,
        extensions: Arc<ExtensionHost>,
        translator: Option<Arc<dyn Translator>>,
        guild: Option<GuildId>,
    ) -> Self {
        Self {
            registry,
            extensions,
            translator,
            guild,
            last_known: Mutex::new(Vec::new()),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Snapshot the current local command set: registry declarations first,
    /// then extension-declared commands, in declaration order.
    pub fn local_snapshots(&self) -> Vec<CommandSnapshot> {
        let translator = self.translator();
        self.registry
            .specs()
            .cloned()
            .chain(self.extensions.specs())
            .map(|spec| CommandSnapshot::from_spec(&spec, translator))
            .collect()
    }

    fn local_builders(&self) -> Vec<CreateApplicationCommand> {
        let translator = self.translator();
        self.registry
            .specs()
            .cloned()
            .chain(self.extensions.specs())
            .map(|spec| spec.build(translator))
            .collect()
    }

    /// Sync against remote truth (startup path)
    ///
    /// Fetches the currently published set and publishes only when the diff
    /// reports changes. Localization maps are stripped on both sides for this
    /// comparison, since the 0.11 list endpoint does not serve localized
    /// payloads; the stored last-known state keeps the full maps.
    pub async fn sync(&self, http: &Http) -> Result<Option<CommandDiff>> {
        let remote = match self.guild {
            Some(guild_id) => http
                .get_guild_application_commands(guild_id.0)
                .await
                .context("failed to fetch guild application commands")?,
            None => http
                .get_global_application_commands()
                .await
                .context("failed to fetch global application commands")?,
        };
        let old: Vec<CommandSnapshot> = remote.iter().map(CommandSnapshot::from_remote).collect();
        let new = self.local_snapshots();
        let stripped: Vec<CommandSnapshot> =
            new.iter().map(CommandSnapshot::without_localizations).collect();

        let diff = diff_commands(&old, &stripped);
        self.apply(http, diff, new).await
    }

    /// Sync against the last-known local state (hot-reload path)
    pub async fn smart_sync(&self, http: &Http) -> Result<Option<CommandDiff>> {
        let old = self.last_known.lock().await.clone();
        let new = self.local_snapshots();
        let diff = diff_commands(&old, &new);
        self.apply(http, diff, new).await
    }

    /// Publish when the diff requires it, then refresh last-known state.
    ///
    /// Last-known state is refreshed even when publishing is skipped, so a
    /// later smart sync diffs against the full current snapshot; on a failed
    /// publish it is left untouched and the next cycle retries.
    async fn apply(
        &self,
        http: &Http,
        diff: CommandDiff,
        new_state: Vec<CommandSnapshot>,
    ) -> Result<Option<CommandDiff>> {
        if !diff.requires_sync() {
            info!("No changes to commands detected.");
            *self.last_known.lock().await = new_state;
            return Ok(None);
        }

        info!("Detected changes to commands:\n{diff}");
        let count = self.publish(http).await?;
        *self.last_known.lock().await = new_state;
        info!("Successfully synced {count} commands.");
        Ok(Some(diff))
    }

    async fn publish(&self, http: &Http) -> Result<usize> {
        let builders = self.local_builders();
        let count = builders.len();
        match self.guild {
            Some(guild_id) => {
                guild_id
                    .set_application_commands(http, |commands| {
                        for builder in builders {
                            commands.add_application_command(builder);
                        }
                        commands
                    })
                    .await
                    .context("failed to publish guild application commands")?;
            }
            None => {
                Command::set_global_application_commands(http, |commands| {
                    for builder in builders {
                        commands.add_application_command(builder);
                    }
                    commands
                })
                .await
                .context("failed to publish global application commands")?;
            }
        }
        Ok(count)
    }

    /// Stored snapshot of the last published (or last observed) state
    pub async fn last_known(&self) -> Vec<CommandSnapshot> {
        self.last_known.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::spec::{CommandSpec, OptionSpec};
    use crate::features::translation::YamlCatalog;
    use std::collections::BTreeMap;

    fn registry() -> Arc<CommandRegistry> {
        let mut registry = CommandRegistry::new();
        registry.add_category(
            "General",
            "Everyday commands",
            vec![
                CommandSpec::chat("ping", "Get the bot's latency"),
                CommandSpec::chat("echo", "Echo a message")
                    .option(OptionSpec::string("message", "What to echo").required(true)),
            ],
        );
        Arc::new(registry)
    }

    fn empty_host() -> Arc<ExtensionHost> {
        Arc::new(ExtensionHost::new("/nonexistent/herald-tree-tests"))
    }

    #[test]
    fn test_local_snapshots_follow_declaration_order() {
        let tree = CommandTree::new(registry(), empty_host(), None, None);
        let snapshots = tree.local_snapshots();
        let names: Vec<&str> = snapshots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ping", "echo"]);
    }

    #[test]
    fn test_local_snapshots_apply_translator() {
        let mut de = BTreeMap::new();
        de.insert("ping".to_string(), "klingeln".to_string());
        let mut locales = BTreeMap::new();
        locales.insert("de".to_string(), de);
        let translator: Arc<dyn Translator> = Arc::new(YamlCatalog::from_map(locales));

        let tree = CommandTree::new(registry(), empty_host(), Some(translator), None);
        let snapshots = tree.local_snapshots();
        assert_eq!(
            snapshots[0].name_localizations.get("de"),
            Some(&"klingeln".to_string())
        );
        // Stripped form is what the startup comparison uses
        assert!(snapshots[0]
            .without_localizations()
            .name_localizations
            .is_empty());
    }

    #[tokio::test]
    async fn test_last_known_starts_empty() {
        let tree = CommandTree::new(registry(), empty_host(), None, None);
        assert!(tree.last_known().await.is_empty());
    }
}

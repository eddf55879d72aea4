//! Handlers for /sync and /extensions

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use super::{respond_ephemeral, respond_text};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_string_option, subcommand_path};

pub struct SyncHandler;

#[async_trait]
impl SlashCommandHandler for SyncHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["sync"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        // Publishing can take a moment; defer so the token stays valid.
        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::DeferredChannelMessageWithSource)
                    .interaction_response_data(|message| message.ephemeral(true))
            })
            .await?;

        let mode = get_string_option(&command.data.options, "mode")
            .unwrap_or_else(|| "local".to_string());
        let outcome = match mode.as_str() {
            "remote" => ctx.tree.sync(&serenity_ctx.http).await,
            _ => ctx.tree.smart_sync(&serenity_ctx.http).await,
        };

        let report = match outcome {
            Ok(Some(diff)) => format!(
                "Synced: {} added, {} removed, {} updated.",
                diff.added.len(),
                diff.removed.len(),
                diff.updated.len()
            ),
            Ok(None) => "No changes detected; nothing was published.".to_string(),
            Err(e) => format!("Sync failed: {e:#}"),
        };

        command
            .edit_original_interaction_response(&serenity_ctx.http, |response| {
                response.content(report)
            })
            .await?;
        Ok(())
    }
}

pub struct ExtensionsHandler;

#[async_trait]
impl SlashCommandHandler for ExtensionsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["extensions"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let (path, options) = subcommand_path(&command.data.options);
        match path.first().map(String::as_str) {
            Some("list") => {
                let extensions = ctx.extensions.extensions();
                if extensions.is_empty() {
                    return respond_text(serenity_ctx, command, "No extensions are loaded.").await;
                }
                let mut lines = Vec::new();
                for extension in &extensions {
                    let state = if extension.enabled { "enabled" } else { "disabled" };
                    lines.push(format!(
                        "`{}` ({state}) - {} command(s)",
                        extension.name,
                        extension.commands.len()
                    ));
                }
                respond_text(serenity_ctx, command, &lines.join("\n")).await
            }
            Some("info") => {
                let name = get_string_option(options, "name").unwrap_or_default();
                let Some(extension) = ctx
                    .extensions
                    .extensions()
                    .into_iter()
                    .find(|e| e.name == name)
                else {
                    return respond_ephemeral(
                        serenity_ctx,
                        command,
                        &format!("No extension named `{name}` is loaded."),
                    )
                    .await;
                };

                let mut lines = vec![format!("**{}** - {}", extension.name, extension.description)];
                for declared in &extension.commands {
                    lines.push(format!("`/{}` - {}", declared.name, declared.description));
                }
                respond_text(serenity_ctx, command, &lines.join("\n")).await
            }
            _ => respond_ephemeral(serenity_ctx, command, "Unknown subcommand.").await,
        }
    }
}

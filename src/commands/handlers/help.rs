//! Handler for /help: paginated command reference

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use super::respond_ephemeral;
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::components::Paginator;
use crate::features::help::build_help_pages;

pub struct HelpHandler;

#[async_trait]
impl SlashCommandHandler for HelpHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["help"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let pages = build_help_pages(ctx.tree.registry(), &ctx.extensions.extensions());
        if pages.is_empty() {
            return respond_ephemeral(serenity_ctx, command, "No commands are declared.").await;
        }

        let paginator = Paginator::with_select(command.user.id, pages);
        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| {
                        message
                            .set_embed(paginator.page())
                            .set_components(paginator.controls().build())
                    })
            })
            .await?;

        // The paginator is keyed by the message that carries it; component
        // interactions look it up from the store.
        let message = command.get_interaction_response(&serenity_ctx.http).await?;
        ctx.paginators.insert(message.id.0, paginator);
        Ok(())
    }
}

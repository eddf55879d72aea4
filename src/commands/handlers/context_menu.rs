//! Handler for the User Ping context menu

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;

use super::{respond_ephemeral, respond_text};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;

pub struct UserPingHandler;

#[async_trait]
impl SlashCommandHandler for UserPingHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["User Ping"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.target_id {
            Some(target) => {
                respond_text(serenity_ctx, command, &format!("Pong! <@{}>", target.0)).await
            }
            None => respond_ephemeral(serenity_ctx, command, "No user was targeted.").await,
        }
    }
}

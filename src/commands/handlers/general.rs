//! Handlers for /ping and /echo

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;

use super::{respond_ephemeral, respond_text};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::truncate_for_message;

pub struct PingHandler;

#[async_trait]
impl SlashCommandHandler for PingHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let uptime = format_uptime(ctx.uptime().as_secs());
        respond_text(serenity_ctx, command, &format!("Pong! Up for {uptime}.")).await
    }
}

pub struct EchoHandler;

#[async_trait]
impl SlashCommandHandler for EchoHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["echo"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match get_string_option(&command.data.options, "message") {
            Some(message) => {
                respond_text(serenity_ctx, command, &truncate_for_message(&message)).await
            }
            None => respond_ephemeral(serenity_ctx, command, "Nothing to echo.").await,
        }
    }
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
    }
}

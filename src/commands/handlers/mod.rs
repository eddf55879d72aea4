//! # Command Handlers
//!
//! One handler per command family, dispatched by name through the registry.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod admin;
pub mod context_menu;
pub mod extensions;
pub mod general;
pub mod help;
pub mod math;

use anyhow::Result;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

/// Reply with plain text
///
/// Extracted from the identical response closure every handler was carrying.
pub(crate) async fn respond_text(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content))
        })
        .await?;
    Ok(())
}

/// Reply with plain text only the invoker can see
pub(crate) async fn respond_ephemeral(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.ephemeral(true).content(content))
        })
        .await?;
    Ok(())
}

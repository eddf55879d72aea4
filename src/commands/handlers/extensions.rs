//! Dispatch for extension-declared commands
//!
//! Extension commands are declared at runtime, so they bypass the static
//! handler table: the event handler falls through to this path when the
//! registry has no handler but the host declares the command.

use std::collections::HashMap;

use anyhow::Result;
use serde_json::Value;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::prelude::Context;

use super::{respond_ephemeral, respond_text};
use crate::commands::context::CommandContext;
use crate::core::truncate_for_message;

/// Respond to an invoked extension command with its rendered template
pub async fn handle_extension_command(
    ctx: &CommandContext,
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    let values = option_values(&command.data.options);
    match ctx.extensions.respond(&command.data.name, &values) {
        Some(reply) => respond_text(serenity_ctx, command, &truncate_for_message(&reply)).await,
        None => {
            respond_ephemeral(
                serenity_ctx,
                command,
                "That command's extension is no longer loaded.",
            )
            .await
        }
    }
}

/// Flatten invocation options into displayable strings for the template
fn option_values(options: &[CommandDataOption]) -> HashMap<String, String> {
    options
        .iter()
        .filter_map(|opt| {
            opt.value
                .as_ref()
                .map(|value| (opt.name.clone(), render_value(value)))
        })
        .collect()
}

// Strings render bare; numbers and booleans fall back to their JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_value_plain_forms() {
        assert_eq!(render_value(&json!("world")), "world");
        assert_eq!(render_value(&json!(3)), "3");
        assert_eq!(render_value(&json!(2.5)), "2.5");
        assert_eq!(render_value(&json!(true)), "true");
    }
}

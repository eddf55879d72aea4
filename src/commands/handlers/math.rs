//! Handler for the /math command group

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;

use super::{respond_ephemeral, respond_text};
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_integer_option, subcommand_path};

pub struct MathHandler;

#[async_trait]
impl SlashCommandHandler for MathHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["math"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let (path, options) = subcommand_path(&command.data.options);
        let leaf = path.last().map(String::as_str).unwrap_or_default();

        let a = get_integer_option(options, "a").unwrap_or_default();
        let reply = match leaf {
            "sqrt" => Some(format!("sqrt({a}) = {}", (a as f64).sqrt())),
            "add" | "subtract" | "multiply" | "divide" | "power" => {
                let b = get_integer_option(options, "b").unwrap_or_default();
                compute_pair(leaf, a, b)
            }
            _ => None,
        };

        match reply {
            Some(reply) => respond_text(serenity_ctx, command, &reply).await,
            None => respond_ephemeral(serenity_ctx, command, "That operation is not defined.").await,
        }
    }
}

fn compute_pair(operation: &str, a: i64, b: i64) -> Option<String> {
    match operation {
        "add" => Some(format!("{a} + {b} = {}", a.wrapping_add(b))),
        "subtract" => Some(format!("{a} - {b} = {}", a.wrapping_sub(b))),
        "multiply" => Some(format!("{a} * {b} = {}", a.wrapping_mul(b))),
        "divide" => {
            if b == 0 {
                Some(format!("{a} / {b} is undefined."))
            } else {
                Some(format!("{a} / {b} = {}", a as f64 / b as f64))
            }
        }
        "power" => Some(format!("{a} ^ {b} = {}", (a as f64).powi(b as i32))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_pair_arithmetic() {
        assert_eq!(compute_pair("add", 2, 3).unwrap(), "2 + 3 = 5");
        assert_eq!(compute_pair("subtract", 2, 3).unwrap(), "2 - 3 = -1");
        assert_eq!(compute_pair("multiply", 4, 3).unwrap(), "4 * 3 = 12");
        assert_eq!(compute_pair("power", 2, 10).unwrap(), "2 ^ 10 = 1024");
    }

    #[test]
    fn test_divide_by_zero_is_reported_not_panicked() {
        assert_eq!(compute_pair("divide", 5, 0).unwrap(), "5 / 0 is undefined.");
        assert_eq!(compute_pair("divide", 5, 2).unwrap(), "5 / 2 = 2.5");
    }

    #[test]
    fn test_unknown_operation() {
        assert!(compute_pair("modulo", 1, 2).is_none());
    }
}

//! General slash commands: /ping, /echo, /help

use crate::commands::spec::{CommandSpec, OptionSpec};

/// Creates general commands
pub fn create_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::chat("ping", "Get the bot's latency and uptime"),
        CommandSpec::chat("echo", "Echo a message back").option(
            OptionSpec::string("message", "What to echo")
                .required(true)
                .min_length(1)
                .max_length(2000),
        ),
        CommandSpec::chat("help", "Browse all available commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_message_is_bounded() {
        let commands = create_commands();
        let echo = commands.iter().find(|c| c.name == "echo").unwrap();
        let message = &echo.options[0];
        assert!(message.required);
        assert_eq!(message.min_length, Some(1));
        assert_eq!(message.max_length, Some(2000));
    }
}

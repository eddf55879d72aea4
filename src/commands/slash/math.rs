//! # Math Command
//!
//! One `/math` command with arithmetic subcommands and a `functions`
//! sub-command group, mostly here to exercise nested option handling
//! end to end.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::commands::spec::{CommandSpec, OptionSpec};

fn pair(description_a: &str, description_b: &str) -> [OptionSpec; 2] {
    [
        OptionSpec::integer("a", description_a).required(true),
        OptionSpec::integer("b", description_b).required(true),
    ]
}

/// Creates the math command group
pub fn create_commands() -> Vec<CommandSpec> {
    let [a, b] = pair("First number", "Second number");
    let [pow_a, pow_b] = pair("Base", "Exponent");
    vec![CommandSpec::chat("math", "Math commands")
        .option(
            OptionSpec::sub_command("add", "Add two numbers")
                .option(a.clone())
                .option(b.clone()),
        )
        .option(
            OptionSpec::sub_command("subtract", "Subtract two numbers")
                .option(a.clone())
                .option(b.clone()),
        )
        .option(
            OptionSpec::sub_command("multiply", "Multiply two numbers")
                .option(a.clone())
                .option(b.clone()),
        )
        .option(
            OptionSpec::sub_command("divide", "Divide two numbers")
                .option(a)
                .option(b),
        )
        .option(
            OptionSpec::sub_command_group("functions", "Math functions")
                .option(
                    OptionSpec::sub_command("power", "Raise a number to a power")
                        .option(pow_a)
                        .option(pow_b),
                )
                .option(
                    OptionSpec::sub_command("sqrt", "Get the square root of a number")
                        .option(OptionSpec::integer("a", "The number").required(true).min_value(0.0)),
                ),
        )]
}

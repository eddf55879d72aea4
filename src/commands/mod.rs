//! # Command System
//!
//! Slash command (/) declaration and handling for Discord interactions.
//! Declarations live in `spec` and the per-category `slash` modules; dispatch
//! goes through the registry's handler table.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Declarative CommandSpec registry replaces ad-hoc builder lists
//! - 1.0.0: Initial modular command structure

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;
pub mod spec;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::SlashCommandHandler;
pub use registry::{CommandCategory, CommandRegistry};
pub use spec::{CommandChoice, CommandSpec, OptionSpec};

// Re-export commonly used items from submodules
pub use slash::{
    get_bool_option, get_integer_option, get_string_option, subcommand_path,
};

use std::sync::Arc;

/// Build the full registry: every declared category plus its handlers
pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.add_category("General", "Everyday commands", slash::general::create_commands());
    registry.add_category("Math", "Arithmetic helpers", slash::math::create_commands());
    registry.add_category("Admin", "Guild management", slash::admin::create_commands());
    registry.add_category(
        "Context Menus",
        "Right-click commands",
        slash::context_menu::create_commands(),
    );

    registry.register(Arc::new(handlers::general::PingHandler));
    registry.register(Arc::new(handlers::general::EchoHandler));
    registry.register(Arc::new(handlers::help::HelpHandler));
    registry.register(Arc::new(handlers::math::MathHandler));
    registry.register(Arc::new(handlers::admin::SyncHandler));
    registry.register(Arc::new(handlers::admin::ExtensionsHandler));
    registry.register(Arc::new(handlers::context_menu::UserPingHandler));

    registry
}

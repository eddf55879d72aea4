//! Command registry: declarations by category, handlers by name
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Carry CommandSpec declarations per category for help and sync
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::spec::CommandSpec;

/// One help-menu category of declared commands
#[derive(Debug, Clone)]
pub struct CommandCategory {
    pub name: String,
    pub description: String,
    pub specs: Vec<CommandSpec>,
}

/// Registry of declared commands and their handlers
///
/// Categories keep declaration order; the help menu and the sync tree walk
/// them directly. The handler table maps command names to handlers; several
/// names can share one handler.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    categories: Vec<CommandCategory>,
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Add a category of command declarations
    pub fn add_category(&mut self, name: &str, description: &str, specs: Vec<CommandSpec>) {
        self.categories.push(CommandCategory {
            name: name.to_string(),
            description: description.to_string(),
            specs,
        });
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a handler is registered for a command name
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Declared categories, in declaration order
    pub fn categories(&self) -> &[CommandCategory] {
        &self.categories
    }

    /// All declared specs across categories, in declaration order
    pub fn specs(&self) -> impl Iterator<Item = &CommandSpec> {
        self.categories.iter().flat_map(|c| c.specs.iter())
    }

    /// Number of declared commands
    pub fn len(&self) -> usize {
        self.specs().count()
    }

    /// Check if registry has no declarations
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.specs.is_empty())
    }
}

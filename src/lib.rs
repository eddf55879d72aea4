// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// UI components - descriptors, paginators, interaction routing
pub mod components;

// Application layer
pub mod commands;

// Re-export core config for backwards compatibility
pub use crate::core::Config;

// Re-export feature items for backwards compatibility
pub use features::{
    // Extensions
    ExtensionConfig, ExtensionHost,
    // Help
    build_help_pages,
    // Sync
    diff_commands, CommandDiff, CommandSnapshot, CommandTree, OptionSnapshot,
    // Translation
    Translator, YamlCatalog,
};

// Re-export component items
pub use components::{ComponentHandler, Paginator, PaginatorStore};

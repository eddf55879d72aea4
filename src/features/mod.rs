//! # Features Layer
//!
//! Feature modules for the herald bot: command-set synchronization,
//! hot-reloadable extensions, the help menu, and localization.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.2.0: Add translation catalog
//! - 1.1.0: Add extension watcher
//! - 1.0.0: Initial reorganization into feature modules

pub mod extensions;
pub mod help;
pub mod sync;
pub mod translation;

// Re-export commonly used items
pub use extensions::{ExtensionConfig, ExtensionHost};
pub use help::build_help_pages;
pub use sync::{diff_commands, CommandDiff, CommandSnapshot, CommandTree, OptionSnapshot};
pub use translation::{Translator, YamlCatalog};

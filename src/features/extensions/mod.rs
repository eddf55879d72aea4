//! # Feature: Hot-Reloadable Extensions
//!
//! Extensions are YAML manifests that declare extra slash commands with
//! templated responses. A background watcher polls the manifest directory
//! and, when a file changes, reloads the set and smart-syncs the command
//! tree so Discord reflects the change without a restart.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Watcher reloads on manifest mtime changes
//! - 1.0.0: Initial release with manifest-declared commands

pub mod config;
pub mod host;
pub mod watcher;

pub use config::{ExtensionChoice, ExtensionCommand, ExtensionConfig, ExtensionOption};
pub use host::ExtensionHost;
pub use watcher::watch_extensions;

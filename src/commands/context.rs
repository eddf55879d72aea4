//! Shared context for command handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add paginator store for the help menu
//! - 1.0.0: Initial implementation with core shared state

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::components::PaginatorStore;
use crate::features::extensions::ExtensionHost;
use crate::features::sync::CommandTree;

/// Shared context for all command handlers
///
/// Carries the services most handlers need: the sync tree (for manual sync
/// and registry access), the extension host, and the live paginator store.
pub struct CommandContext {
    pub tree: Arc<CommandTree>,
    pub extensions: Arc<ExtensionHost>,
    pub paginators: Arc<PaginatorStore>,
    started_at: Instant,
}

impl CommandContext {
    pub fn new(
        tree: Arc<CommandTree>,
        extensions: Arc<ExtensionHost>,
        paginators: Arc<PaginatorStore>,
    ) -> Self {
        Self {
            tree,
            extensions,
            paginators,
            started_at: Instant::now(),
        }
    }

    /// Time since the context was created at startup
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

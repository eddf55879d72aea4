//! # Extension Watcher
//!
//! Background poll loop that reloads changed extension manifests and
//! smart-syncs the command tree. Every failure is logged and the loop moves
//! on to its next interval; the interval itself is the retry policy.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use serenity::http::Http;

use super::host::ExtensionHost;
use crate::features::sync::CommandTree;

/// Watch the extension directory for manifest changes
///
/// Runs until the process exits. One change-set is handled as a single
/// sequential unit: reload, re-snapshot, diff, publish if needed.
pub async fn watch_extensions(
    host: Arc<ExtensionHost>,
    tree: Arc<CommandTree>,
    http: Arc<Http>,
    interval: Duration,
) {
    info!(
        "Watching {} for extension changes...",
        host.dir().display()
    );
    let mut ticker = tokio::time::interval(interval);
    // the first tick completes immediately
    ticker.tick().await;
    loop {
        ticker.tick().await;

        let changed = match host.modified_since_last_scan() {
            Ok(changed) => changed,
            Err(e) => {
                error!("Failed to scan extension directory: {e:#}");
                continue;
            }
        };
        if changed.is_empty() {
            continue;
        }

        for path in &changed {
            info!("Reloading extension manifest {}", path.display());
        }
        if let Err(e) = host.load() {
            error!("Failed to reload extensions: {e:#}");
            continue;
        }

        match tree.smart_sync(&http).await {
            Ok(Some(diff)) => info!(
                "Republished commands after reload ({} change(s)).",
                diff.change_count()
            ),
            Ok(None) => info!("Reload produced no command changes."),
            Err(e) => error!("Failed to sync commands after reload: {e:#}"),
        }
    }
}

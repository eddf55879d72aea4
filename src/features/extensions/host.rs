//! # Extension Host
//!
//! Owns the manifest directory and the currently loaded extension set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use std::time::SystemTime;

use anyhow::{Context as _, Result};
use log::{info, warn};

use super::config::{ExtensionCommand, ExtensionConfig};
use crate::commands::spec::CommandSpec;

/// Loaded extension set with filesystem scanning for the watcher
///
/// The lock is only held for short synchronous sections; nothing awaits while
/// holding it.
pub struct ExtensionHost {
    dir: PathBuf,
    loaded: RwLock<Vec<ExtensionConfig>>,
    last_scan: Mutex<SystemTime>,
}

impl ExtensionHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            loaded: RwLock::new(Vec::new()),
            last_scan: Mutex::new(SystemTime::now()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load (or reload) every manifest in the directory
    ///
    /// A manifest that fails to parse or validate is skipped with a warning;
    /// the rest of the set still loads. A missing directory loads an empty
    /// set, since extensions are optional.
    pub fn load(&self) -> Result<usize> {
        let mut extensions = Vec::new();
        if self.dir.is_dir() {
            for path in self.manifest_paths()? {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                match ExtensionConfig::parse(&contents) {
                    Ok(config) => {
                        info!(
                            "Loaded extension {} ({} command(s))",
                            config.name,
                            config.commands.len()
                        );
                        extensions.push(config);
                    }
                    Err(e) => warn!("Skipping extension {}: {e:#}", path.display()),
                }
            }
        } else {
            warn!("Extension directory {} does not exist", self.dir.display());
        }
        extensions.sort_by(|a, b| a.name.cmp(&b.name));
        let count = extensions.len();
        *self.loaded.write().unwrap_or_else(|e| e.into_inner()) = extensions;
        Ok(count)
    }

    /// Manifest files that changed since the previous scan
    ///
    /// Advances the scan marker, so each change is reported once.
    pub fn modified_since_last_scan(&self) -> Result<Vec<PathBuf>> {
        let mut last_scan = self.last_scan.lock().unwrap_or_else(|e| e.into_inner());
        let mut changed = Vec::new();
        if self.dir.is_dir() {
            for path in self.manifest_paths()? {
                let modified = std::fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .with_context(|| format!("failed to stat {}", path.display()))?;
                if modified > *last_scan {
                    changed.push(path);
                }
            }
        }
        *last_scan = SystemTime::now();
        Ok(changed)
    }

    /// The currently loaded extension set
    pub fn extensions(&self) -> Vec<ExtensionConfig> {
        self.loaded
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Command declarations contributed by enabled extensions
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.extensions()
            .iter()
            .flat_map(ExtensionConfig::specs)
            .collect()
    }

    /// Look up a declared extension command by name
    pub fn command(&self, name: &str) -> Option<ExtensionCommand> {
        self.extensions()
            .iter()
            .filter(|ext| ext.enabled)
            .flat_map(|ext| ext.commands.iter())
            .find(|cmd| cmd.name == name)
            .cloned()
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.command(name).is_some()
    }

    /// Names of loaded extensions (enabled or not), for autocomplete
    pub fn extension_names(&self) -> Vec<String> {
        self.extensions().iter().map(|e| e.name.clone()).collect()
    }

    /// Render the reply for an invoked extension command
    pub fn respond(&self, name: &str, values: &HashMap<String, String>) -> Option<String> {
        self.command(name).map(|cmd| cmd.render(values))
    }

    fn manifest_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read {}", self.dir.display()))?
        {
            let path = entry?.path();
            let is_manifest = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "yml" || ext == "yaml")
                .unwrap_or(false);
            if is_manifest {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "herald-host-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_manifest(dir: &Path, file: &str, command: &str) {
        std::fs::write(
            dir.join(file),
            format!(
                "name: {command}\ndescription: test\ncommands:\n  - name: {command}\n    description: A test command\n    response: ok\n"
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_load_reads_manifests_sorted() {
        let dir = scratch_dir("load");
        write_manifest(&dir, "b.yml", "beta");
        write_manifest(&dir, "a.yaml", "alpha");
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let host = ExtensionHost::new(&dir);
        assert_eq!(host.load().unwrap(), 2);
        assert_eq!(host.extension_names(), vec!["alpha", "beta"]);
        assert!(host.has_command("alpha"));
        assert!(!host.has_command("notes"));
    }

    #[test]
    fn test_invalid_manifest_is_skipped() {
        let dir = scratch_dir("invalid");
        write_manifest(&dir, "good.yml", "good");
        std::fs::write(dir.join("bad.yml"), "name: [unclosed").unwrap();

        let host = ExtensionHost::new(&dir);
        assert_eq!(host.load().unwrap(), 1);
        assert!(host.has_command("good"));
    }

    #[test]
    fn test_missing_directory_loads_empty() {
        let host = ExtensionHost::new("/nonexistent/herald-extensions");
        assert_eq!(host.load().unwrap(), 0);
        assert!(host.specs().is_empty());
    }

    #[test]
    fn test_modified_scan_reports_each_change_once() {
        let dir = scratch_dir("scan");
        let host = ExtensionHost::new(&dir);

        // Backdate the marker so a fresh write counts as a change
        *host.last_scan.lock().unwrap() = UNIX_EPOCH;
        write_manifest(&dir, "fresh.yml", "fresh");

        let changed = host.modified_since_last_scan().unwrap();
        assert_eq!(changed.len(), 1);
        assert!(changed[0].ends_with("fresh.yml"));

        // Nothing new since the scan above
        assert!(host.modified_since_last_scan().unwrap().is_empty());

        // Touch the manifest well past the marker
        std::thread::sleep(Duration::from_millis(20));
        write_manifest(&dir, "fresh.yml", "fresh");
        *host.last_scan.lock().unwrap() = UNIX_EPOCH;
        assert_eq!(host.modified_since_last_scan().unwrap().len(), 1);
    }

    #[test]
    fn test_respond_renders_template() {
        let dir = scratch_dir("respond");
        std::fs::write(
            dir.join("greet.yml"),
            "name: greet\ndescription: test\ncommands:\n  - name: greet\n    description: Greet someone\n    options:\n      - name: who\n        description: Who to greet\n        required: true\n    response: \"Hello, {who}!\"\n",
        )
        .unwrap();
        let host = ExtensionHost::new(&dir);
        host.load().unwrap();

        let mut values = HashMap::new();
        values.insert("who".to_string(), "chat".to_string());
        assert_eq!(host.respond("greet", &values), Some("Hello, chat!".to_string()));
        assert_eq!(host.respond("missing", &values), None);
    }
}

//! # Runtime Configuration
//!
//! Environment-driven configuration for the bot process.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{Context, Result};

/// Bot configuration resolved from environment variables (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub token: String,
    /// Optional guild to publish commands to (faster iteration than global)
    pub guild_id: Option<u64>,
    /// Directory containing extension manifests
    pub extensions_dir: String,
    /// Extension watcher poll interval in seconds
    pub watch_interval_secs: u64,
    /// Optional locale catalog file for command localizations
    pub locales_path: Option<String>,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// `DISCORD_TOKEN` is required; everything else has a default or is
    /// optional.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;

        let guild_id = match std::env::var("GUILD_ID") {
            Ok(raw) => Some(raw.parse::<u64>().context("GUILD_ID is not a valid id")?),
            Err(_) => None,
        };

        let extensions_dir =
            std::env::var("EXTENSIONS_DIR").unwrap_or_else(|_| "extensions".to_string());

        let watch_interval_secs = match std::env::var("WATCH_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("WATCH_INTERVAL_SECS is not a valid number")?,
            Err(_) => 1,
        };

        let locales_path = std::env::var("LOCALES_PATH").ok();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            token,
            guild_id,
            extensions_dir,
            watch_interval_secs,
            locales_path,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them in one test to avoid
    // interleaving with parallel test threads.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        std::env::set_var("DISCORD_TOKEN", "token-under-test");
        std::env::remove_var("GUILD_ID");
        std::env::remove_var("EXTENSIONS_DIR");
        std::env::remove_var("WATCH_INTERVAL_SECS");
        std::env::remove_var("LOCALES_PATH");
        std::env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.token, "token-under-test");
        assert_eq!(config.guild_id, None);
        assert_eq!(config.extensions_dir, "extensions");
        assert_eq!(config.watch_interval_secs, 1);
        assert_eq!(config.log_level, "info");

        std::env::set_var("GUILD_ID", "123456789");
        std::env::set_var("WATCH_INTERVAL_SECS", "5");
        let config = Config::from_env().unwrap();
        assert_eq!(config.guild_id, Some(123456789));
        assert_eq!(config.watch_interval_secs, 5);

        std::env::set_var("GUILD_ID", "not-a-number");
        assert!(Config::from_env().is_err());
        std::env::remove_var("GUILD_ID");
        std::env::remove_var("WATCH_INTERVAL_SECS");
    }
}

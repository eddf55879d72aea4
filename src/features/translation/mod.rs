//! # Feature: Localization
//!
//! Locale catalog for command name and description localizations. The catalog
//! is consulted when commands are built for publishing and when local
//! snapshots are taken, so the published payload and the snapshot agree.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with YAML catalog

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Localization lookup for command metadata
///
/// Implementations return `None` when a phrase has no translation for the
/// requested locale; callers then omit that locale from the payload.
pub trait Translator: Send + Sync {
    /// Locale tags the translator can produce (e.g. `de`, `fr`, `pt-BR`)
    fn locales(&self) -> Vec<String>;

    /// Translate one phrase into the given locale
    fn translate(&self, phrase: &str, locale: &str) -> Option<String>;
}

/// File-backed catalog: locale tag -> phrase -> translation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YamlCatalog {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl YamlCatalog {
    /// Load a catalog from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read locale catalog {path}"))?;
        let catalog: YamlCatalog =
            serde_yaml::from_str(&contents).with_context(|| format!("invalid locale catalog {path}"))?;
        Ok(catalog)
    }

    /// Build a catalog from an in-memory map (used by tests and embedding)
    pub fn from_map(locales: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { locales }
    }
}

impl Translator for YamlCatalog {
    fn locales(&self) -> Vec<String> {
        self.locales.keys().cloned().collect()
    }

    fn translate(&self, phrase: &str, locale: &str) -> Option<String> {
        self.locales.get(locale)?.get(phrase).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> YamlCatalog {
        serde_yaml::from_str(
            r#"
locales:
  de:
    ping: klingeln
    "Get the bot's latency": "Latenz des Bots abfragen"
  fr:
    ping: ping
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_locales_are_sorted() {
        assert_eq!(catalog().locales(), vec!["de", "fr"]);
    }

    #[test]
    fn test_translate_hit() {
        assert_eq!(catalog().translate("ping", "de"), Some("klingeln".to_string()));
    }

    #[test]
    fn test_translate_unknown_phrase() {
        assert_eq!(catalog().translate("echo", "de"), None);
    }

    #[test]
    fn test_translate_unknown_locale() {
        assert_eq!(catalog().translate("ping", "ja"), None);
    }

    #[test]
    fn test_load_rejects_missing_file() {
        assert!(YamlCatalog::load("/nonexistent/locales.yml").is_err());
    }
}

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{ConfigError, SettingKey, Settings};

/// Settings file location, `WORDNIK_CONFIG` wins over the platform config dir
pub fn default_settings_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = env::var("WORDNIK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().context("No config directory on this platform")?;
    Ok(config_dir.join("wordnik").join("settings.json"))
}

/// Owns the loaded settings and writes them back on every change
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`, merging the stored keys over the defaults
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        let settings = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse settings in {}", path.display()))?
        } else {
            tracing::info!("No settings at {}, using defaults", path.display());
            Settings::default()
        };

        Ok(Self { path, settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.settings)?)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Apply a change and persist it immediately. A rejected change is not saved.
    pub fn update<F>(&mut self, change: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Settings) -> Result<(), ConfigError>,
    {
        change(&mut self.settings)?;
        self.save()
    }

    pub fn set(&mut self, key: SettingKey, value: &str) -> anyhow::Result<()> {
        self.update(|settings| settings.set(key, value))?;
        tracing::info!("Updated setting {}", key.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.settings(), &Settings::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::load(&path).unwrap();
        store.set(SettingKey::ApiKey, "secret").unwrap();
        store.set(SettingKey::MaxDefinitions, "3").unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.settings().api_key, "secret");
        assert_eq!(reloaded.settings().max_definitions, 3);
    }

    #[test]
    fn test_rejected_value_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::load(&path).unwrap();
        assert!(store.set(SettingKey::MaxDefinitions, "NaN").is_err());
        assert!(!path.exists());
        assert_eq!(store.settings().max_definitions, 5);
    }

    #[test]
    fn test_partial_file_is_merged_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"template": "{{text}}"}"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.settings().template, "{{text}}");
        assert_eq!(store.settings().max_definitions, 5);
        assert!(store.settings().api_key.is_empty());
    }

    #[test]
    fn test_bad_value_keeps_other_keys_and_can_be_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"max_definitions": null, "api_key": "k"}"#).unwrap();

        let mut store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.settings().api_key, "k");
        assert_eq!(store.settings().max_definitions, 5);

        store.set(SettingKey::MaxDefinitions, "8").unwrap();
        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.settings().max_definitions, 8);
        assert_eq!(reloaded.settings().api_key, "k");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(SettingsStore::load(&path).is_err());
    }
}

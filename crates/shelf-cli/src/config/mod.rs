//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            server_url: "http://localhost:8080".to_string(),
        }
    }
}

impl Settings {
    /// Base endpoint of the file API on the configured server.
    pub fn api_base(&self) -> String {
        format!("{}/api/files", self.server_url.trim_end_matches('/'))
    }
}

pub struct SettingsManager;

impl SettingsManager {
    /// Get the shelf home directory (~/.shelf)
    pub fn shelf_home() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("SHELF_HOME") {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".shelf"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::shelf_home()?.join("settings.json"))
    }

    /// Load settings from disk, writing defaults on first use
    pub fn load() -> Result<Settings> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Settings::default();
            Self::save(&settings)?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {:?}", path))?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(settings: &Settings) -> Result<()> {
        let path = Self::settings_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        std::env::set_var("SHELF_HOME", temp_dir.path());

        // First load writes the defaults
        let settings = SettingsManager::load()?;
        assert_eq!(settings.server_url, "http://localhost:8080");
        assert!(SettingsManager::settings_path()?.exists());

        let mut updated = settings.clone();
        updated.server_url = "http://files.internal:9000".to_string();
        SettingsManager::save(&updated)?;

        let reloaded = SettingsManager::load()?;
        assert_eq!(reloaded.server_url, "http://files.internal:9000");
        assert_eq!(reloaded.api_base(), "http://files.internal:9000/api/files");

        std::env::remove_var("SHELF_HOME");
        Ok(())
    }
}

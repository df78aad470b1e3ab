use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::nav::ViewMode;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "auditdeck";

pub const KEYS: &[&str] = &["defaults.theme", "defaults.start_mode", "defaults.font"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<ViewMode>,

    /// Font file with CJK coverage, tried before the system locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `auditdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# auditdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn start_mode(&self) -> Option<ViewMode> {
        self.defaults.as_ref().and_then(|d| d.start_mode)
    }

    pub fn font(&self) -> Option<&Path> {
        self.defaults.as_ref().and_then(|d| d.font.as_deref())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.start_mode" => {
                let Some(mode) = ViewMode::from_name(value) else {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'interactive' or 'print'."
                    );
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(mode);
            }
            "defaults.font" => {
                let path = PathBuf::from(value);
                if !path.is_file() {
                    anyhow::bail!("Font file not found: {value}");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .font = Some(path);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("auditdeck-test-{}-{name}", std::process::id()))
            .join(FILENAME)
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.start_mode", "print").unwrap();
        assert_eq!(config.theme(), Some("dark"));
        assert_eq!(config.start_mode(), Some(ViewMode::Print));

        assert!(config.set("defaults.theme", "sepia").is_err());
        assert!(config.set("defaults.start_mode", "overview").is_err());
        assert!(config.set("defaults.font", "/no/such/font.ttf").is_err());
        assert!(config.set("defaults.aspect", "16:9").is_err());
        assert_eq!(config.theme(), Some("dark"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = scratch_path("roundtrip");
        let mut config = Config::default();
        config.set("defaults.start_mode", "interactive").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.start_mode(), Some(ViewMode::Interactive));
        assert_eq!(loaded.theme(), None);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Config::load_from(&scratch_path("missing")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn parses_kebab_case_mode() {
        let config: Config =
            serde_yaml::from_str("defaults:\n  start_mode: print\n  theme: light\n").unwrap();
        assert_eq!(config.start_mode(), Some(ViewMode::Print));
        assert_eq!(config.theme(), Some("light"));
    }
}

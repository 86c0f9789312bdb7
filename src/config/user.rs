//! User-configurable settings stored in ~/.config/hyprland-guiutils/config.toml

use crate::config;
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub dialog: DialogConfig,
    pub update_screen: UpdateScreenConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Program invoked with a single URL argument to open links
    pub url_opener: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            url_opener: config::DEFAULT_URL_OPENER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DialogConfig {
    pub sizing: DialogSizing,
}

/// How the message dialog picks its window size.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DialogSizing {
    /// Always 480x180.
    Fixed,
    /// Font-scaled width, height measured from the content.
    #[default]
    FitContent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateScreenConfig {
    pub support_url: String,
    pub news_url: String,
}

impl Default for UpdateScreenConfig {
    fn default() -> Self {
        Self {
            support_url: config::update_screen::SUPPORT_URL.to_string(),
            news_url: config::update_screen::NEWS_URL.to_string(),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("hyprland-guiutils")
        .join("config.toml")
}

impl Config {
    /// Load config from the default location.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, returning defaults for any missing keys or
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read config {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config parse error in {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"));

        assert_eq!(config, Config::default());
        assert_eq!(config.general.url_opener, "xdg-open");
        assert_eq!(config.dialog.sizing, DialogSizing::FitContent);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (_dir, path) = write_config(
            r#"
[dialog]
sizing = "fixed"

[update_screen]
news_url = "https://example.org/news"
"#,
        );

        let config = Config::load_from(&path);
        assert_eq!(config.dialog.sizing, DialogSizing::Fixed);
        assert_eq!(config.update_screen.news_url, "https://example.org/news");
        assert_eq!(config.update_screen.support_url, "https://hypr.land/support");
        assert_eq!(config.general.url_opener, "xdg-open");
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let (_dir, path) = write_config("[dialog]\nsizing = \"sideways\"\n");

        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_custom_opener() {
        let (_dir, path) = write_config("[general]\nurl_opener = \"firefox\"\n");

        assert_eq!(Config::load_from(&path).general.url_opener, "firefox");
    }
}

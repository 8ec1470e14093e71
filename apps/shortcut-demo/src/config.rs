//! Configuration for the shortcut demo.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tui_shortcuts::Defaults;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Registry defaults (timeout, hint generation).
    #[serde(default)]
    pub shortcuts: Defaults,
}

impl DemoConfig {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Get configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "shortcut-demo")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

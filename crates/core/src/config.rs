//! Configuration for cdas-docs.
//!
//! Loaded from the user config directory (~/.config/cdas-docs/config.toml);
//! a missing or unreadable file silently falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
  /// Log level: trace, debug, info, warn, error (default: info)
  pub level: String,

  /// File rotation for TUI logs: daily, hourly, or never (default: daily)
  pub rotation: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
      rotation: "daily".to_string(),
    }
  }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
  /// Sidebar column width in wide layouts (default: 32)
  pub sidebar_width: u16,

  /// Capture mouse events for wheel scrolling and click navigation (default: true)
  pub mouse: bool,
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      sidebar_width: 32,
      mouse: true,
    }
  }
}

/// cdas-docs configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Log settings
  #[serde(default)]
  pub log: LogConfig,

  /// Terminal UI settings
  #[serde(default)]
  pub ui: UiConfig,
}

impl Config {
  /// Load the user config, falling back to defaults if absent or invalid
  pub fn load() -> Self {
    if let Some(path) = Self::user_config_path()
      && let Some(config) = Self::from_file(&path)
    {
      return config;
    }

    Self::default()
  }

  fn from_file(path: &Path) -> Option<Self> {
    if path.exists()
      && let Ok(content) = std::fs::read_to_string(path)
      && let Ok(config) = toml::from_str(&content)
    {
      return Some(config);
    }

    None
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CDAS_DOCS_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("cdas-docs").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("cdas-docs").join("config.toml"))
  }

  /// Directory for log files and other local data
  pub fn data_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CDAS_DOCS_DATA_DIR") {
      return Some(PathBuf::from(path));
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
      return Some(PathBuf::from(path).join("cdas-docs"));
    }

    dirs::data_local_dir().map(|p: PathBuf| p.join("cdas-docs"))
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    r#"# cdas-docs Configuration
# Place in ~/.config/cdas-docs/config.toml

[log]
# Log level: trace, debug, info, warn, error
level = "info"

# File rotation for TUI logs: daily, hourly, or never
rotation = "daily"

[ui]
# Sidebar column width in wide layouts
sidebar_width = 32

# Capture mouse events for wheel scrolling and click navigation
mouse = true
"#
    .to_string()
  }
}

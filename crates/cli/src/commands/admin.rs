//! Configuration commands and the TUI launcher

use anyhow::Result;
use cdas_core::Config;
use tracing::error;

/// Show current effective configuration
pub fn cmd_config_show() -> Result<()> {
  let config = Config::load();

  if let Some(path) = Config::user_config_path()
    && path.exists()
  {
    println!("Using user config: {}", path.display());
  } else {
    println!("Using default configuration (no config file found)");
  }
  println!();

  let toml_str = toml::to_string_pretty(&config)?;
  println!("{toml_str}");

  Ok(())
}

/// Create a config file with the default settings
pub fn cmd_config_init() -> Result<()> {
  let Some(config_path) = Config::user_config_path() else {
    error!("Could not determine the user config directory");
    std::process::exit(1);
  };

  if config_path.exists() {
    error!("Config file already exists: {}", config_path.display());
    println!("Edit it directly, or run 'cdas-docs config reset' to start over.");
    std::process::exit(1);
  }

  if let Some(parent) = config_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(&config_path, Config::generate_template())?;

  println!("Created user config: {}", config_path.display());
  println!("Edit the file to customize settings.");

  Ok(())
}

/// Overwrite the config file with the default settings
pub fn cmd_config_reset() -> Result<()> {
  let Some(config_path) = Config::user_config_path() else {
    error!("Could not determine the user config directory");
    std::process::exit(1);
  };

  if let Some(parent) = config_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(&config_path, Config::generate_template())?;

  println!("Reset user config to defaults: {}", config_path.display());

  Ok(())
}

/// Launch the interactive browser
pub fn cmd_tui() -> Result<()> {
  crate::tui::run()
}

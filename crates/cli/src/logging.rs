//! Logging setup for CLI commands and the TUI

use cdas_core::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging for CLI commands (console output)
pub fn init_cli_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .init();
}

/// Parse log level from config string
fn parse_log_level(level: &str) -> tracing::Level {
  match level.to_lowercase().as_str() {
    "error" => tracing::Level::ERROR,
    "warn" => tracing::Level::WARN,
    "info" => tracing::Level::INFO,
    "debug" => tracing::Level::DEBUG,
    "trace" => tracing::Level::TRACE,
    _ => tracing::Level::INFO,
  }
}

/// Initialize file logging for the TUI.
///
/// The TUI draws to the terminal, so log output goes to a rolling file under
/// the data directory instead. Returns a guard that must stay alive for the
/// lifetime of the process; dropping it flushes and stops the writer. Falls
/// back to console logging when the data directory is unavailable.
pub fn init_tui_logging(config: &Config) -> Option<WorkerGuard> {
  let level = parse_log_level(&config.log.level);

  let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

  let Some(log_dir) = Config::data_dir() else {
    init_cli_logging();
    return None;
  };

  if std::fs::create_dir_all(&log_dir).is_err() {
    init_cli_logging();
    return None;
  }

  let file_appender = match config.log.rotation.as_str() {
    "hourly" => tracing_appender::rolling::hourly(&log_dir, "cdas-docs.log"),
    "never" => tracing_appender::rolling::never(&log_dir, "cdas-docs.log"),
    _ => tracing_appender::rolling::daily(&log_dir, "cdas-docs.log"),
  };

  let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_ansi(false)
    .with_writer(file_writer)
    .init();

  Some(guard)
}

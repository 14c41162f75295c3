//! Terminal user interface for browsing the documentation

mod app;
mod event;
mod text;
mod theme;
mod views;
mod widgets;

use anyhow::Result;

/// Run the TUI application
pub fn run() -> Result<()> {
  app::run()
}

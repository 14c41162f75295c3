//! Catalog export command

use anyhow::{Context, Result};
use cdas_core::Catalog;
use tracing::error;

use crate::format::format_catalog_markdown;

/// Export the whole catalog as JSON or Markdown
pub fn cmd_export(output: Option<&str>, format: &str) -> Result<()> {
  let catalog = Catalog::builtin()?;

  let rendered = match format.to_lowercase().as_str() {
    "json" => serde_json::to_string_pretty(catalog.sections())?,
    "markdown" | "md" => format_catalog_markdown(&catalog),
    other => {
      error!("Unknown export format: {}", other);
      println!("Supported formats: json, markdown");
      std::process::exit(1);
    }
  };

  match output {
    Some(path) => {
      std::fs::write(path, &rendered).with_context(|| format!("Failed to write {path}"))?;
      println!("Exported {} sections to {path}", catalog.len());
    }
    None => println!("{rendered}"),
  }

  Ok(())
}

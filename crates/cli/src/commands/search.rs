//! Section listing, display, and search commands

use anyhow::Result;
use cdas_core::{Catalog, DocSection};
use serde::Serialize;
use tracing::error;

use crate::format::format_section_text;

#[derive(Serialize)]
struct SectionSummary<'a> {
  id: &'a str,
  title: &'a str,
  topics: usize,
}

#[derive(Serialize)]
struct SearchResult<'a> {
  id: &'a str,
  title: &'a str,
  matched: Vec<String>,
}

/// List documentation sections
pub fn cmd_sections(json_output: bool) -> Result<()> {
  let catalog = Catalog::builtin()?;

  if json_output {
    let summaries: Vec<SectionSummary> = catalog
      .iter()
      .map(|section| SectionSummary {
        id: section.id.as_str(),
        title: &section.title,
        topics: section.topic_count(),
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    return Ok(());
  }

  println!(
    "{} ({} sections, {} topics)\n",
    cdas_core::APP_TITLE,
    catalog.len(),
    catalog.topic_count()
  );
  for section in catalog.iter() {
    println!(
      "  {:<16} {} ({} topics)",
      section.id.as_str(),
      section.title,
      section.topic_count()
    );
  }
  println!("\nUse 'cdas-docs show <id>' to print a section.");

  Ok(())
}

/// Print one section to stdout
pub fn cmd_show(id: &str) -> Result<()> {
  let catalog = Catalog::builtin()?;

  let Some(section) = catalog.get(id) else {
    error!("Unknown section id: {}", id);
    println!("Known ids:");
    for section in catalog.iter() {
      println!("  {}", section.id.as_str());
    }
    std::process::exit(1);
  };

  print!("{}", format_section_text(section));

  Ok(())
}

/// Search section titles and topic text
pub fn cmd_search(query: &str, json_output: bool) -> Result<()> {
  let catalog = Catalog::builtin()?;
  let results = catalog.filtered(query);

  if json_output {
    let matches: Vec<SearchResult> = results
      .iter()
      .map(|section| SearchResult {
        id: section.id.as_str(),
        title: &section.title,
        matched: matched_fields(section, query),
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&matches)?);
    return Ok(());
  }

  if results.is_empty() {
    println!("No sections match: {query}");
    return Ok(());
  }

  println!("Found {} section(s) matching '{query}':\n", results.len());
  for (i, section) in results.iter().enumerate() {
    println!("{}. {} [{}]", i + 1, section.title, section.id.as_str());
    for field in matched_fields(section, query) {
      println!("   - {field}");
    }
    println!();
  }
  println!("Use 'cdas-docs show <id>' to print a section.");

  Ok(())
}

/// Where the query matched, for display: the section title or topic headings
fn matched_fields(section: &DocSection, query: &str) -> Vec<String> {
  let needle = query.to_lowercase();
  let mut fields = Vec::new();

  if section.title.to_lowercase().contains(&needle) {
    fields.push("section title".to_string());
  }
  for topic in &section.content.sections {
    if topic.heading.to_lowercase().contains(&needle) || topic.content.to_lowercase().contains(&needle) {
      fields.push(topic.heading.clone());
    }
  }

  fields
}

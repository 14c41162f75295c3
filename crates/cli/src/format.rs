//! Plain-text and Markdown rendering of the catalog for stdout output.
//!
//! These builders are shared by `show` and `export` so a section prints the
//! same way in both. Topic text keeps its embedded line breaks.

use cdas_core::{
  ARCHITECTURE_TIERS, ARCHITECTURE_TITLE, Catalog, DocSection, FLOW_BRANCH, FLOW_BRANCH_FROM, FLOW_NODES,
  WORKFLOW_STEPS, WORKFLOW_TITLE,
};

/// Format one section as indented plain text
pub fn format_section_text(section: &DocSection) -> String {
  let mut out = String::new();

  out.push_str(&section.content.title);
  out.push('\n');
  out.push_str(&section.content.subtitle);
  out.push('\n');

  for (i, topic) in section.content.sections.iter().enumerate() {
    out.push_str(&format!("\n{}. {}\n", i + 1, topic.heading));
    for line in topic.content.lines() {
      out.push_str(&format!("   {line}\n"));
    }
  }

  if let Some(image) = &section.content.image {
    out.push_str(&format!("\nVisual guide: {image}\n"));
  }

  if section.content.architecture {
    out.push('\n');
    out.push_str(&format_architecture_text());
  }
  if section.content.workflow {
    out.push('\n');
    out.push_str(&format_workflow_text());
  }

  out
}

fn format_architecture_text() -> String {
  let mut out = String::new();

  out.push_str(&format!("{ARCHITECTURE_TITLE}\n"));
  for tier in ARCHITECTURE_TIERS {
    out.push_str(&format!("\n  {}\n", tier.name));
    for item in tier.items {
      out.push_str(&format!("    - {item}\n"));
    }
  }

  let chain: Vec<String> = FLOW_NODES.iter().map(|node| node.label.join(" ")).collect();
  out.push_str(&format!("\n  Flow: {}\n", chain.join(" -> ")));
  out.push_str(&format!(
    "        {} -> {}\n",
    FLOW_NODES[FLOW_BRANCH_FROM].label.join(" "),
    FLOW_BRANCH.label.join(" ")
  ));

  out
}

fn format_workflow_text() -> String {
  let mut out = String::new();

  out.push_str(&format!("{WORKFLOW_TITLE}\n"));
  for step in WORKFLOW_STEPS {
    out.push_str(&format!("  {}. {}\n", step.number, step.title));
  }

  out
}

/// Format the whole catalog as one Markdown document
pub fn format_catalog_markdown(catalog: &Catalog) -> String {
  let mut out = String::new();

  out.push_str(&format!("# {}\n\n{}\n", cdas_core::APP_TITLE, cdas_core::APP_SUBTITLE));

  for section in catalog.iter() {
    out.push_str(&format!("\n## {}\n\n{}\n", section.content.title, section.content.subtitle));

    for (i, topic) in section.content.sections.iter().enumerate() {
      out.push_str(&format!("\n### {}. {}\n\n", i + 1, topic.heading));
      out.push_str(&topic.content);
      out.push('\n');
    }

    if let Some(image) = &section.content.image {
      out.push_str(&format!("\n![Visual guide]({image})\n"));
    }

    if section.content.architecture {
      out.push_str(&format!("\n### {ARCHITECTURE_TITLE}\n"));
      for tier in ARCHITECTURE_TIERS {
        out.push_str(&format!("\n**{}**\n\n", tier.name));
        for item in tier.items {
          out.push_str(&format!("- {item}\n"));
        }
      }
      let chain: Vec<String> = FLOW_NODES.iter().map(|node| node.label.join(" ")).collect();
      out.push_str(&format!("\nFlow: {}\n", chain.join(" → ")));
      out.push_str(&format!(
        "\nBranch: {} → {}\n",
        FLOW_NODES[FLOW_BRANCH_FROM].label.join(" "),
        FLOW_BRANCH.label.join(" ")
      ));
    }

    if section.content.workflow {
      out.push_str(&format!("\n### {WORKFLOW_TITLE}\n\n"));
      for step in WORKFLOW_STEPS {
        out.push_str(&format!("{}. {}\n", step.number, step.title));
      }
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_section_text_numbers_topics() {
    let catalog = Catalog::builtin().unwrap();
    let section = catalog.get("user-management").unwrap();
    let text = format_section_text(section);

    assert!(text.contains("1. Creating New Users"));
    assert!(text.contains("2. User Roles & Permissions"));
    assert!(text.contains("3. Profile Management"));
  }

  #[test]
  fn test_section_text_keeps_embedded_line_breaks() {
    let catalog = Catalog::builtin().unwrap();
    let section = catalog.get("api-reference").unwrap();
    let text = format_section_text(section);

    // Each endpoint from the topic body lands on its own indented line
    assert!(text.contains("   POST /api/auth/login - User authentication\n"));
    assert!(text.contains("   GET /api/bills - List bills\n"));
  }

  #[test]
  fn test_section_text_includes_diagrams_when_flagged() {
    let catalog = Catalog::builtin().unwrap();
    let overview = format_section_text(catalog.get("overview").unwrap());

    assert!(overview.contains("System Architecture"));
    assert!(overview.contains("Frontend Layer"));
    assert!(overview.contains("Notification System"));
    assert!(!overview.contains("Automation Workflow"));

    let workflow = format_section_text(catalog.get("workflow").unwrap());
    assert!(workflow.contains("6. Send Notifications"));
    assert!(!workflow.contains("System Architecture"));
  }

  #[test]
  fn test_markdown_covers_every_section() {
    let catalog = Catalog::builtin().unwrap();
    let md = format_catalog_markdown(&catalog);

    assert!(md.starts_with("# CDAS Documentation"));
    for section in catalog.iter() {
      assert!(md.contains(&format!("## {}", section.content.title)));
    }
    assert!(md.contains("![Visual guide](https://iili.io/KBpgFRe.jpg)"));
  }
}

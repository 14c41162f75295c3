//! Documentation catalog: sections, subsections, and the search filter.
//!
//! The catalog is built once at startup and never mutated. User interaction
//! only ever changes *which* section is selected and *which* subset the
//! navigation list shows; see [`crate::state::ViewState`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable slug identifying a documentation section (newtype for type safety)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for SectionId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<&str> for SectionId {
  fn from(id: &str) -> Self {
    Self(id.to_string())
  }
}

impl PartialEq<str> for SectionId {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for SectionId {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

/// Symbolic icon attached to sections and workflow steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
  Home,
  Users,
  Shield,
  Activity,
  FileText,
  Settings,
  Lock,
  Zap,
}

impl Icon {
  pub fn as_str(&self) -> &'static str {
    match self {
      Icon::Home => "home",
      Icon::Users => "users",
      Icon::Shield => "shield",
      Icon::Activity => "activity",
      Icon::FileText => "file_text",
      Icon::Settings => "settings",
      Icon::Lock => "lock",
      Icon::Zap => "zap",
    }
  }

  /// Single-cell glyph for terminal rendering
  pub fn glyph(&self) -> &'static str {
    match self {
      Icon::Home => "⌂",
      Icon::Users => "◉",
      Icon::Shield => "◈",
      Icon::Activity => "∿",
      Icon::FileText => "≡",
      Icon::Settings => "⚙",
      Icon::Lock => "⊠",
      Icon::Zap => "↯",
    }
  }
}

/// One heading+body topic inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsection {
  pub heading: String,

  /// Plain text; embedded newlines are significant and must survive rendering
  pub content: String,
}

impl Subsection {
  pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      heading: heading.into(),
      content: content.into(),
    }
  }
}

/// Body of a section: header text, ordered topics, and optional extras
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocContent {
  pub title: String,
  pub subtitle: String,

  /// Topics in display order, numbered from 1 by the renderer
  pub sections: Vec<Subsection>,

  /// Illustrative screenshot URL; never fetched, only referenced
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,

  /// Render the architecture diagram after the topics
  #[serde(default)]
  pub architecture: bool,

  /// Render the workflow diagram after the topics
  #[serde(default)]
  pub workflow: bool,
}

/// One top-level documentation entry, shown as one navigation item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSection {
  pub id: SectionId,

  /// Navigation title; the content pane shows `content.title` instead
  pub title: String,

  pub icon: Icon,
  pub content: DocContent,
}

impl DocSection {
  /// Number of topics listed under this section
  pub fn topic_count(&self) -> usize {
    self.content.sections.len()
  }

  /// Case-insensitive substring match against the navigation title and every
  /// topic heading and body. An empty query matches everything.
  pub fn matches(&self, query: &str) -> bool {
    if query.is_empty() {
      return true;
    }
    let q = query.to_lowercase();
    self.title.to_lowercase().contains(&q)
      || self
        .content
        .sections
        .iter()
        .any(|s| s.heading.to_lowercase().contains(&q) || s.content.to_lowercase().contains(&q))
  }
}

/// The full, static, ordered collection of sections
#[derive(Debug, Clone)]
pub struct Catalog {
  sections: Vec<DocSection>,
}

impl Catalog {
  /// Validates that ids are unique, every section carries at least one topic,
  /// and the catalog itself is non-empty (so the initial selection is total).
  pub fn new(sections: Vec<DocSection>) -> Result<Self> {
    if sections.is_empty() {
      return Err(Error::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for section in &sections {
      if !seen.insert(section.id.as_str()) {
        return Err(Error::DuplicateSection(section.id.to_string()));
      }
      if section.content.sections.is_empty() {
        return Err(Error::EmptySection(section.id.to_string()));
      }
    }

    Ok(Self { sections })
  }

  pub fn get(&self, id: &str) -> Option<&DocSection> {
    self.sections.iter().find(|s| s.id == id)
  }

  /// Construction guarantees at least one section
  pub fn first(&self) -> &DocSection {
    &self.sections[0]
  }

  /// Position of a section in catalog order
  pub fn position(&self, id: &str) -> Option<usize> {
    self.sections.iter().position(|s| s.id == id)
  }

  pub fn iter(&self) -> impl Iterator<Item = &DocSection> {
    self.sections.iter()
  }

  pub fn sections(&self) -> &[DocSection] {
    &self.sections
  }

  pub fn len(&self) -> usize {
    self.sections.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sections.is_empty()
  }

  /// Total topic count across all sections
  pub fn topic_count(&self) -> usize {
    self.sections.iter().map(DocSection::topic_count).sum()
  }

  /// Sections matching the query, in original catalog order. Recomputed on
  /// every call; filtering never touches which section is selected.
  pub fn filtered(&self, query: &str) -> Vec<&DocSection> {
    self.sections.iter().filter(|s| s.matches(query)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn section(id: &str, title: &str, topics: &[(&str, &str)]) -> DocSection {
    DocSection {
      id: SectionId::from(id),
      title: title.to_string(),
      icon: Icon::Home,
      content: DocContent {
        title: format!("{title} Guide"),
        subtitle: String::new(),
        sections: topics.iter().map(|(h, c)| Subsection::new(*h, *c)).collect(),
        image: None,
        architecture: false,
        workflow: false,
      },
    }
  }

  #[test]
  fn test_catalog_rejects_empty() {
    assert!(matches!(Catalog::new(vec![]), Err(Error::EmptyCatalog)));
  }

  #[test]
  fn test_catalog_rejects_duplicate_ids() {
    let sections = vec![
      section("a", "Alpha", &[("One", "body")]),
      section("a", "Beta", &[("Two", "body")]),
    ];
    assert!(matches!(Catalog::new(sections), Err(Error::DuplicateSection(id)) if id == "a"));
  }

  #[test]
  fn test_catalog_rejects_section_without_topics() {
    let sections = vec![section("a", "Alpha", &[("One", "body")]), section("b", "Beta", &[])];
    assert!(matches!(Catalog::new(sections), Err(Error::EmptySection(id)) if id == "b"));
  }

  #[test]
  fn test_get_and_position() {
    let catalog = Catalog::new(vec![
      section("a", "Alpha", &[("One", "body")]),
      section("b", "Beta", &[("Two", "body")]),
    ])
    .unwrap();

    assert_eq!(catalog.first().id, "a");
    assert_eq!(catalog.get("b").unwrap().title, "Beta");
    assert!(catalog.get("missing").is_none());
    assert_eq!(catalog.position("b"), Some(1));
    assert_eq!(catalog.position("missing"), None);
  }

  #[test]
  fn test_matches_title_heading_and_body() {
    let s = section("a", "Alpha", &[("Heading One", "shared secret body")]);
    assert!(s.matches("alpha"));
    assert!(s.matches("heading"));
    assert!(s.matches("secret"));
    assert!(!s.matches("missing"));
  }

  #[test]
  fn test_matches_is_case_insensitive() {
    let s = section("a", "Alpha", &[("Heading", "Body Text")]);
    assert!(s.matches("ALPHA"));
    assert!(s.matches("body text"));
    assert!(s.matches("BoDy"));
  }

  #[test]
  fn test_empty_query_matches_everything() {
    let s = section("a", "Alpha", &[("Heading", "body")]);
    assert!(s.matches(""));
  }

  #[test]
  fn test_filtered_preserves_order() {
    let catalog = Catalog::new(vec![
      section("a", "Alpha", &[("One", "needle here")]),
      section("b", "Beta", &[("Two", "nothing")]),
      section("c", "Gamma", &[("Three", "another needle")]),
    ])
    .unwrap();

    let filtered = catalog.filtered("needle");
    let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    // Empty query is the identity filter
    assert_eq!(catalog.filtered("").len(), catalog.len());
  }

  #[test]
  fn test_topic_count() {
    let catalog = Catalog::new(vec![
      section("a", "Alpha", &[("One", "x"), ("Two", "y")]),
      section("b", "Beta", &[("Three", "z")]),
    ])
    .unwrap();
    assert_eq!(catalog.topic_count(), 3);
  }

  #[test]
  fn test_section_id_display_and_eq() {
    let id = SectionId::from("overview");
    assert_eq!(id.to_string(), "overview");
    assert_eq!(id, "overview");
    assert_eq!(id.as_str(), "overview");
  }
}

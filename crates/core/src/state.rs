//! View state shared by every rendering surface.
//!
//! One explicit state object owns the selection, the search query, the
//! sidebar flag, and the scroll position. Renderers borrow it; nothing else
//! holds navigation state, and nothing here is derived or cached.

use crate::catalog::{Catalog, DocSection, SectionId};
use crate::scroll::ScrollState;

#[derive(Debug, Clone)]
pub struct ViewState {
  /// Id of the section shown in the content pane. Always a catalog id.
  selected: SectionId,

  /// Search text, stored verbatim
  query: String,

  /// Narrow-layout sidebar visibility; wide layouts ignore it
  sidebar_open: bool,

  pub scroll: ScrollState,
}

impl ViewState {
  /// Starts at the catalog's first section with an empty query.
  pub fn new(catalog: &Catalog) -> Self {
    Self {
      selected: catalog.first().id.clone(),
      query: String::new(),
      sidebar_open: false,
      scroll: ScrollState::default(),
    }
  }

  pub fn selected_id(&self) -> &SectionId {
    &self.selected
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn sidebar_open(&self) -> bool {
    self.sidebar_open
  }

  /// Replaces the query verbatim; no trimming or normalization.
  pub fn set_search_query(&mut self, text: impl Into<String>) {
    self.query = text.into();
  }

  pub fn push_query_char(&mut self, c: char) {
    self.query.push(c);
  }

  pub fn pop_query_char(&mut self) {
    self.query.pop();
  }

  /// Selects `id` if it exists in the unfiltered catalog, closing the sidebar
  /// and jumping the content back to the top. An unknown id is a no-op
  /// returning false: the previously selected section stays displayed.
  pub fn select_section(&mut self, catalog: &Catalog, id: &str) -> bool {
    match catalog.get(id) {
      Some(section) => {
        self.selected = section.id.clone();
        self.sidebar_open = false;
        self.scroll.to_top();
        true
      }
      None => false,
    }
  }

  /// The section to render, looked up in the full catalog regardless of the
  /// current filter. `None` only if the selection somehow left the catalog;
  /// the renderer draws an empty pane in that case.
  pub fn selected_section<'a>(&self, catalog: &'a Catalog) -> Option<&'a DocSection> {
    catalog.get(self.selected.as_str())
  }

  /// Navigation subset for the sidebar. Never affects `selected_section`.
  pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a DocSection> {
    catalog.filtered(&self.query)
  }

  pub fn toggle_sidebar(&mut self) {
    self.sidebar_open = !self.sidebar_open;
  }

  pub fn close_sidebar(&mut self) {
    self.sidebar_open = false;
  }
}

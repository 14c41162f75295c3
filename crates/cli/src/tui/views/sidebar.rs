//! Navigation sidebar: the filtered section list plus catalog stats

use cdas_core::{Catalog, ViewState};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Modifier, Style},
  widgets::{Block, Borders, Widget},
};

use crate::tui::{text, theme::Theme};

/// Rows one navigation entry occupies: title row plus count row
pub const ITEM_HEIGHT: u16 = 2;

/// Rows reserved at the bottom of the sidebar for the stats panel
const STATS_HEIGHT: u16 = 3;

/// Cursor over the filtered navigation entries.
///
/// The cursor is a position in the *filtered* list, not a section id: typing
/// a query reshuffles what is under it, and [`clamp`](Self::clamp) pulls it
/// back in range when the list shrinks.
#[derive(Debug, Default)]
pub struct SidebarState {
  pub cursor: usize,
}

impl SidebarState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn select_next(&mut self, visible: usize) {
    if visible == 0 {
      return;
    }
    self.cursor = (self.cursor + 1).min(visible - 1);
  }

  pub fn select_prev(&mut self) {
    self.cursor = self.cursor.saturating_sub(1);
  }

  pub fn clamp(&mut self, visible: usize) {
    if visible == 0 {
      self.cursor = 0;
    } else if self.cursor >= visible {
      self.cursor = visible - 1;
    }
  }
}

/// Split the sidebar into its list region and optional stats region.
/// Shared with mouse hit-testing, which needs the same geometry.
pub fn layout_inner(area: Rect) -> (Rect, Option<Rect>) {
  let inner = Block::default().borders(Borders::ALL).inner(area);
  if inner.height >= STATS_HEIGHT + 4 * ITEM_HEIGHT {
    let list = Rect::new(inner.x, inner.y, inner.width, inner.height - STATS_HEIGHT);
    let stats = Rect::new(inner.x, inner.y + list.height, inner.width, STATS_HEIGHT);
    (list, Some(stats))
  } else {
    (inner, None)
  }
}

/// First visible entry index keeping the cursor inside the window
pub fn window_start(cursor: usize, visible_items: usize) -> usize {
  if visible_items == 0 {
    0
  } else if cursor >= visible_items {
    cursor - visible_items + 1
  } else {
    0
  }
}

pub struct SidebarView<'a> {
  catalog: &'a Catalog,
  state: &'a ViewState,
  list: &'a SidebarState,
}

impl<'a> SidebarView<'a> {
  pub fn new(catalog: &'a Catalog, state: &'a ViewState, list: &'a SidebarState) -> Self {
    Self { catalog, state, list }
  }
}

impl Widget for SidebarView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
      .title(" SECTIONS ")
      .title_style(Style::default().fg(Theme::SUBTEXT).add_modifier(Modifier::BOLD))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));
    block.render(area, buf);

    let (list_area, stats_area) = layout_inner(area);
    if list_area.width < 8 || list_area.height < ITEM_HEIGHT {
      return;
    }

    let filtered = self.state.filtered(self.catalog);
    if filtered.is_empty() {
      buf.set_string(
        list_area.x + 1,
        list_area.y,
        "No sections match",
        Style::default().fg(Theme::MUTED),
      );
      buf.set_string(
        list_area.x + 1,
        list_area.y + 1,
        "Esc clears the search",
        Style::default().fg(Theme::MUTED),
      );
    } else {
      let visible = (list_area.height / ITEM_HEIGHT) as usize;
      let start = window_start(self.list.cursor.min(filtered.len() - 1), visible);
      let width = list_area.width as usize;

      for (row, (i, section)) in filtered.iter().enumerate().skip(start).take(visible).enumerate() {
        let y = list_area.y + row as u16 * ITEM_HEIGHT;
        let under_cursor = i == self.list.cursor;
        let active = section.id == *self.state.selected_id();

        let marker = if under_cursor { "▶ " } else { "  " };
        let title_style = if active {
          Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)
        } else if under_cursor {
          Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD)
        } else {
          Style::default().fg(Theme::TEXT)
        };

        let title = format!("{marker}{} {}", section.icon.glyph(), section.title);
        buf.set_string(list_area.x, y, text::truncate(&title, width), title_style);

        let count = format!("    {} sections", section.topic_count());
        buf.set_string(list_area.x, y + 1, text::truncate(&count, width), Style::default().fg(Theme::MUTED));
      }
    }

    if let Some(stats) = stats_area {
      for x in stats.x..stats.x + stats.width {
        buf[(x, stats.y)].set_char('─').set_fg(Theme::OVERLAY);
      }
      buf.set_string(
        stats.x + 1,
        stats.y + 1,
        "Documentation Stats",
        Style::default().fg(Theme::SUBTEXT).add_modifier(Modifier::BOLD),
      );
      let counts = format!("{} Sections · {} Topics", self.catalog.len(), self.catalog.topic_count());
      buf.set_string(stats.x + 1, stats.y + 2, text::truncate(&counts, stats.width as usize - 1), Style::default().fg(Theme::MUTED));
    }
  }
}

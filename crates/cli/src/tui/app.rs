//! Main TUI application: state, event loop, and top-level rendering

use std::{io, time::Duration};

use anyhow::Result;
use cdas_core::{Catalog, Config, ViewState};
use crossterm::{
  event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
  },
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Position, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Widget},
};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::tui::{
  event::{Action, key_to_action},
  text,
  theme::Theme,
  views::{ContentView, SidebarState, SidebarView, content::content_lines, sidebar},
};

/// Terminal width below which the sidebar becomes a toggleable overlay
const SIDEBAR_BREAKPOINT: u16 = 80;

/// Rows scrolled per wheel tick or h/l press
const SCROLL_STEP: usize = 3;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
  #[default]
  Normal,
  Search,
}

/// Screen regions recorded during render, for mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
struct HitAreas {
  sidebar_list: Rect,
  sidebar_start: usize,
  content: Rect,
}

/// Main application state
pub struct App {
  pub catalog: Catalog,
  pub state: ViewState,
  pub sidebar: SidebarState,
  pub input_mode: InputMode,
  pub should_quit: bool,
  pub show_help: bool,
  sidebar_width: u16,
  areas: HitAreas,
}

impl App {
  pub fn new(config: &Config) -> Result<Self> {
    let catalog = Catalog::builtin()?;
    let state = ViewState::new(&catalog);
    Ok(Self {
      catalog,
      state,
      sidebar: SidebarState::new(),
      input_mode: InputMode::default(),
      should_quit: false,
      show_help: false,
      sidebar_width: config.ui.sidebar_width.clamp(24, 48),
      areas: HitAreas::default(),
    })
  }

  fn filtered_len(&self) -> usize {
    self.state.filtered(&self.catalog).len()
  }

  fn page_rows(&self) -> usize {
    (self.areas.content.height.saturating_sub(2)).max(1) as usize
  }

  pub fn handle_action(&mut self, action: Action) {
    match action {
      Action::Quit => self.should_quit = true,
      Action::NavigateDown => {
        let len = self.filtered_len();
        self.sidebar.select_next(len);
      }
      Action::NavigateUp => self.sidebar.select_prev(),
      Action::Select => self.select_highlighted(),
      Action::JumpTo(n) => self.jump_to(n),
      Action::Back => self.back(),
      Action::OpenSearch => self.input_mode = InputMode::Search,
      Action::Submit => self.input_mode = InputMode::Normal,
      Action::Input(c) => {
        self.state.push_query_char(c);
        let len = self.filtered_len();
        self.sidebar.clamp(len);
      }
      Action::DeleteChar => {
        self.state.pop_query_char();
        let len = self.filtered_len();
        self.sidebar.clamp(len);
      }
      Action::ScrollUp => self.state.scroll.scroll_up(SCROLL_STEP),
      Action::ScrollDown => self.state.scroll.scroll_down(SCROLL_STEP),
      Action::PageUp => {
        let rows = self.page_rows();
        self.state.scroll.scroll_up(rows);
      }
      Action::PageDown => {
        let rows = self.page_rows();
        self.state.scroll.scroll_down(rows);
      }
      Action::GoToTop => self.state.scroll.to_top(),
      Action::GoToBottom => self.state.scroll.to_bottom(),
      Action::ToggleSidebar => self.state.toggle_sidebar(),
      Action::ToggleHelp => self.show_help = !self.show_help,
      Action::None => {}
    }
  }

  /// Open the section under the sidebar cursor
  fn select_highlighted(&mut self) {
    let id = {
      let filtered = self.state.filtered(&self.catalog);
      filtered.get(self.sidebar.cursor).map(|section| section.id.clone())
    };
    if let Some(id) = id {
      self.state.select_section(&self.catalog, id.as_str());
      debug!(section = id.as_str(), "opened section");
    }
  }

  /// Jump straight to the nth catalog section (1-based), ignoring the filter
  fn jump_to(&mut self, ordinal: usize) {
    let id = self
      .catalog
      .sections()
      .get(ordinal.wrapping_sub(1))
      .map(|section| section.id.clone());
    let Some(id) = id else { return };

    self.state.select_section(&self.catalog, id.as_str());
    if let Some(pos) = self.state.filtered(&self.catalog).iter().position(|s| s.id == id) {
      self.sidebar.cursor = pos;
    }
  }

  /// Esc: close things in order of how transient they are
  fn back(&mut self) {
    if self.input_mode == InputMode::Search {
      self.input_mode = InputMode::Normal;
    } else if self.show_help {
      self.show_help = false;
    } else if !self.state.query().is_empty() {
      self.state.set_search_query("");
      let len = self.filtered_len();
      self.sidebar.clamp(len);
    } else if self.state.sidebar_open() {
      self.state.close_sidebar();
    }
  }

  pub fn handle_mouse(&mut self, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
      MouseEventKind::ScrollDown => {
        if self.areas.sidebar_list.contains(pos) {
          let len = self.filtered_len();
          self.sidebar.select_next(len);
        } else {
          self.state.scroll.scroll_down(SCROLL_STEP);
        }
      }
      MouseEventKind::ScrollUp => {
        if self.areas.sidebar_list.contains(pos) {
          self.sidebar.select_prev();
        } else {
          self.state.scroll.scroll_up(SCROLL_STEP);
        }
      }
      MouseEventKind::Down(MouseButton::Left) => {
        if self.areas.sidebar_list.contains(pos) {
          let rel = ((mouse.row - self.areas.sidebar_list.y) / sidebar::ITEM_HEIGHT) as usize;
          let index = self.areas.sidebar_start + rel;
          let id = {
            let filtered = self.state.filtered(&self.catalog);
            filtered.get(index).map(|section| section.id.clone())
          };
          if let Some(id) = id {
            self.sidebar.cursor = index;
            self.state.select_section(&self.catalog, id.as_str());
            debug!(section = id.as_str(), "opened section via click");
          }
        }
      }
      _ => {}
    }
  }
}

/// Run the TUI application
pub fn run() -> Result<()> {
  let config = Config::load();

  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  if config.ui.mouse {
    execute!(io::stdout(), EnableMouseCapture)?;
  }
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut app = App::new(&config)?;
  info!(sections = app.catalog.len(), "TUI started");

  let result = event_loop(&mut terminal, &mut app);

  disable_raw_mode()?;
  if config.ui.mouse {
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
  }
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  info!("TUI stopped");
  result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
  loop {
    terminal.draw(|frame| {
      let area = frame.area();
      render_app(app, area, frame.buffer_mut());
    })?;

    if event::poll(Duration::from_millis(250))? {
      match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
          let action = key_to_action(key, app.input_mode == InputMode::Search);
          app.handle_action(action);
        }
        CrosstermEvent::Mouse(mouse) => app.handle_mouse(mouse),
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }

  Ok(())
}

fn render_app(app: &mut App, area: Rect, buf: &mut Buffer) {
  Clear.render(area, buf);
  for y in area.y..area.y + area.height {
    for x in area.x..area.x + area.width {
      buf[(x, y)].set_bg(Theme::BG);
    }
  }

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // Header with search box
      Constraint::Min(10),   // Body
      Constraint::Length(1), // Footer with keybindings
    ])
    .split(area);

  render_header(app, chunks[0], buf);

  let body = chunks[1];
  if area.width >= SIDEBAR_BREAKPOINT {
    let cols = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Length(app.sidebar_width), Constraint::Min(20)])
      .split(body);
    render_sidebar(app, cols[0], buf);
    render_content(app, cols[1], buf);
  } else {
    render_content(app, body, buf);
    if app.state.sidebar_open() {
      let drawer = Rect::new(body.x, body.y, app.sidebar_width.min(body.width), body.height);
      Clear.render(drawer, buf);
      for y in drawer.y..drawer.y + drawer.height {
        for x in drawer.x..drawer.x + drawer.width {
          buf[(x, y)].set_bg(Theme::SURFACE);
        }
      }
      render_sidebar(app, drawer, buf);
    } else {
      app.areas.sidebar_list = Rect::default();
    }
  }

  render_footer(app, chunks[2], buf);

  if app.show_help {
    render_help_overlay(area, buf);
  }
}

fn render_sidebar(app: &mut App, area: Rect, buf: &mut Buffer) {
  let (list_area, _stats) = sidebar::layout_inner(area);
  let len = app.state.filtered(&app.catalog).len();
  app.sidebar.clamp(len);

  let visible = (list_area.height / sidebar::ITEM_HEIGHT) as usize;
  app.areas.sidebar_list = list_area;
  app.areas.sidebar_start = sidebar::window_start(app.sidebar.cursor, visible);

  SidebarView::new(&app.catalog, &app.state, &app.sidebar).render(area, buf);
}

fn render_content(app: &mut App, area: Rect, buf: &mut Buffer) {
  let inner = Block::default().borders(Borders::ALL).inner(area);
  let lines = content_lines(app.state.selected_section(&app.catalog), inner.width.saturating_sub(2));

  let max = lines.len().saturating_sub(inner.height as usize);
  app.state.scroll.clamp(max);
  app.areas.content = area;

  ContentView::new(&lines, app.state.scroll.offset(), app.state.scroll.show_scroll_top()).render(area, buf);
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
  buf.set_string(
    area.x + 1,
    area.y,
    cdas_core::APP_TITLE,
    Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
  );
  let subtitle_x = area.x + 1 + cdas_core::APP_TITLE.len() as u16 + 2;
  if area.width > subtitle_x + cdas_core::APP_SUBTITLE.len() as u16 {
    buf.set_string(subtitle_x, area.y, cdas_core::APP_SUBTITLE, Style::default().fg(Theme::SUBTEXT));
  }

  // Search box on the right edge
  let box_width: u16 = 30;
  let left_end = subtitle_x + cdas_core::APP_SUBTITLE.len() as u16;
  if area.width > left_end + box_width + 4 {
    let search_x = area.x + area.width - box_width - 1;
    let (shown, style) = if app.state.query().is_empty() && app.input_mode != InputMode::Search {
      (
        format!("/ {}", cdas_core::SEARCH_PLACEHOLDER),
        Style::default().fg(Theme::MUTED),
      )
    } else {
      (format!("/ {}", app.state.query()), Style::default().fg(Theme::TEXT))
    };
    let shown = text::truncate(&shown, box_width as usize);
    buf.set_string(search_x, area.y, &shown, style);
    if app.input_mode == InputMode::Search {
      let cursor_x = search_x + shown.width() as u16;
      if cursor_x < area.x + area.width {
        buf.set_string(cursor_x, area.y, "▌", Style::default().fg(Theme::ACCENT));
      }
    }
  }

  for x in area.x..area.x + area.width {
    buf[(x, area.y + 1)].set_char('─').set_fg(Theme::OVERLAY);
  }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
  let hints = match app.input_mode {
    InputMode::Normal => "q:Quit  j/k:Sections  Enter:Open  h/l:Scroll  /:Search  1-6:Jump  ?:Help",
    InputMode::Search => "Type to filter sections  Enter:Done  Ctrl-C:Quit",
  };
  buf.set_string(area.x + 1, area.y, hints, Style::default().fg(Theme::MUTED));

  let position = app
    .catalog
    .position(app.state.selected_id().as_str())
    .map(|i| format!("{}/{}", i + 1, app.catalog.len()))
    .unwrap_or_default();
  if !position.is_empty() {
    let x = area.x + area.width.saturating_sub(position.len() as u16 + 2);
    buf.set_string(x, area.y, &position, Style::default().fg(Theme::SUBTEXT));
  }
}

fn render_help_overlay(area: Rect, buf: &mut Buffer) {
  let width = 56.min(area.width.saturating_sub(4));
  let height = 21.min(area.height.saturating_sub(2));
  if width < 30 || height < 10 {
    return;
  }
  let popup = Rect::new(
    area.x + (area.width - width) / 2,
    area.y + (area.height - height) / 2,
    width,
    height,
  );

  Clear.render(popup, buf);
  for y in popup.y..popup.y + popup.height {
    for x in popup.x..popup.x + popup.width {
      buf[(x, y)].set_bg(Theme::SURFACE);
    }
  }

  let block = Block::default()
    .title(" HELP ")
    .title_style(Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Theme::ACCENT));
  let inner = block.inner(popup);
  block.render(popup, buf);

  let header = Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD);
  let key = Style::default().fg(Theme::TEXT);
  let lines: Vec<Line> = vec![
    Line::from(Span::styled("NAVIGATION", header)),
    Line::from(Span::styled("  j/k or ↑/↓     Move between sections", key)),
    Line::from(Span::styled("  Enter          Open highlighted section", key)),
    Line::from(Span::styled("  1-6            Jump to a section by number", key)),
    Line::from(Span::styled("  h/l or ←/→     Scroll the document", key)),
    Line::from(Span::styled("  PgUp/PgDn      Scroll a page at a time", key)),
    Line::from(Span::styled("  g / G          Top / end of the document", key)),
    Line::from(Span::styled("  t              Back to the top", key)),
    Line::default(),
    Line::from(Span::styled("SEARCH", header)),
    Line::from(Span::styled("  /              Start typing a filter", key)),
    Line::from(Span::styled("  Enter          Keep the filter", key)),
    Line::from(Span::styled("  Esc            Leave input, then clear", key)),
    Line::default(),
    Line::from(Span::styled("WINDOW", header)),
    Line::from(Span::styled("  b              Toggle sidebar (narrow screens)", key)),
    Line::from(Span::styled("  ?              Toggle this help", key)),
    Line::from(Span::styled("  q or Ctrl-C    Quit", key)),
  ];
  for (i, line) in lines.iter().take(inner.height as usize).enumerate() {
    buf.set_line(inner.x + 1, inner.y + i as u16, line, inner.width.saturating_sub(1));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::KeyModifiers;

  fn app() -> App {
    App::new(&Config::default()).unwrap()
  }

  fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
      for x in 0..buf.area.width {
        out.push_str(buf[(x, y)].symbol());
      }
      out.push('\n');
    }
    out
  }

  #[test]
  fn test_app_starts_on_first_section() {
    let app = app();
    assert_eq!(app.state.selected_id().as_str(), "overview");
    assert_eq!(app.sidebar.cursor, 0);
    assert!(!app.should_quit);
  }

  #[test]
  fn test_quit_action() {
    let mut app = app();
    app.handle_action(Action::Quit);
    assert!(app.should_quit);
  }

  #[test]
  fn test_navigate_and_select() {
    let mut app = app();
    app.handle_action(Action::NavigateDown);
    app.handle_action(Action::NavigateDown);
    app.handle_action(Action::Select);
    assert_eq!(app.state.selected_id().as_str(), "authentication");
  }

  #[test]
  fn test_jump_to_ordinal() {
    let mut app = app();
    app.handle_action(Action::JumpTo(5));
    assert_eq!(app.state.selected_id().as_str(), "api-reference");

    // Out of range is a no-op
    app.handle_action(Action::JumpTo(9));
    assert_eq!(app.state.selected_id().as_str(), "api-reference");
  }

  #[test]
  fn test_selecting_resets_scroll() {
    let mut app = app();
    app.handle_action(Action::ScrollDown);
    app.handle_action(Action::ScrollDown);
    assert!(app.state.scroll.offset() > 0);

    app.handle_action(Action::NavigateDown);
    app.handle_action(Action::Select);
    assert_eq!(app.state.scroll.offset(), 0);
  }

  #[test]
  fn test_search_input_flow() {
    let mut app = app();
    app.handle_action(Action::OpenSearch);
    assert_eq!(app.input_mode, InputMode::Search);

    for c in "firewall".chars() {
      app.handle_action(Action::Input(c));
    }
    assert_eq!(app.state.query(), "firewall");
    assert_eq!(app.filtered_len(), 1);

    app.handle_action(Action::Submit);
    assert_eq!(app.input_mode, InputMode::Normal);

    app.handle_action(Action::Select);
    assert_eq!(app.state.selected_id().as_str(), "troubleshooting");
  }

  #[test]
  fn test_back_clears_search_then_nothing() {
    let mut app = app();
    app.handle_action(Action::OpenSearch);
    app.handle_action(Action::Input('x'));
    app.handle_action(Action::Back);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.state.query(), "x");

    app.handle_action(Action::Back);
    assert_eq!(app.state.query(), "");
  }

  #[test]
  fn test_keys_route_through_handle_action() {
    let mut app = app();
    let key = crossterm::event::KeyEvent::new(crossterm::event::KeyCode::Char('q'), KeyModifiers::NONE);
    let action = key_to_action(key, app.input_mode == InputMode::Search);
    app.handle_action(action);
    assert!(app.should_quit);
  }

  #[test]
  fn test_render_wide_layout() {
    let mut app = app();
    let area = Rect::new(0, 0, 110, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);
    let text = buffer_text(&buf);

    assert!(text.contains("CDAS Documentation"));
    assert!(text.contains("Search documentation..."));
    assert!(text.contains("System Overview"));
    assert!(text.contains("CDAS Bill Documentation System"));
    assert!(text.contains("1/6"));
  }

  #[test]
  fn test_click_in_sidebar_selects_section() {
    let mut app = app();
    let area = Rect::new(0, 0, 110, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);

    let list = app.areas.sidebar_list;
    let click = MouseEvent {
      kind: MouseEventKind::Down(MouseButton::Left),
      column: list.x + 2,
      row: list.y + sidebar::ITEM_HEIGHT,
      modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(click);

    assert_eq!(app.state.selected_id().as_str(), "user-management");
    assert_eq!(app.sidebar.cursor, 1);
  }

  #[test]
  fn test_wheel_outside_sidebar_scrolls_content() {
    let mut app = app();
    let area = Rect::new(0, 0, 110, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);

    let content = app.areas.content;
    let wheel = MouseEvent {
      kind: MouseEventKind::ScrollDown,
      column: content.x + 5,
      row: content.y + 5,
      modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(wheel);
    assert_eq!(app.state.scroll.offset(), SCROLL_STEP);
  }

  #[test]
  fn test_narrow_layout_hides_sidebar_until_toggled() {
    let mut app = app();
    let area = Rect::new(0, 0, 70, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);
    let text = buffer_text(&buf);
    assert!(!text.contains("Documentation Stats"));

    app.handle_action(Action::ToggleSidebar);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);
    let text = buffer_text(&buf);
    assert!(text.contains("Documentation Stats"));
  }

  #[test]
  fn test_help_overlay_renders() {
    let mut app = app();
    app.handle_action(Action::ToggleHelp);
    let area = Rect::new(0, 0, 110, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);
    assert!(buffer_text(&buf).contains("NAVIGATION"));
  }

  #[test]
  fn test_scroll_clamps_to_document_end() {
    let mut app = app();
    app.handle_action(Action::GoToBottom);
    let area = Rect::new(0, 0, 110, 32);
    let mut buf = Buffer::empty(area);
    render_app(&mut app, area, &mut buf);
    assert!(app.state.scroll.offset() < 10_000);
  }
}

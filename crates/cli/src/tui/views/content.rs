//! Content pane: the selected section rendered as a scrollable document

use cdas_core::DocSection;
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::{
  text,
  theme::Theme,
  widgets::{architecture_lines, workflow_lines},
};

/// Build every line of the document for `section` at `width` columns.
///
/// Pure function: the pane renders a window over this, so scroll limits are
/// just `lines.len()` minus the pane height. Topic bodies keep their embedded
/// line breaks. When a section wants both diagrams the architecture block
/// comes first.
pub fn content_lines(section: Option<&DocSection>, width: u16) -> Vec<Line<'static>> {
  let Some(section) = section else {
    return Vec::new();
  };

  let w = width.max(10) as usize;
  let mut lines = Vec::new();

  lines.push(Line::from(vec![
    Span::styled(format!("{} ", section.icon.glyph()), Style::default().fg(Theme::ACCENT)),
    Span::styled(
      section.content.title.clone(),
      Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
    ),
  ]));
  for sub in text::wrap(&section.content.subtitle, w) {
    lines.push(Line::from(Span::styled(sub, Style::default().fg(Theme::SUBTEXT))));
  }
  lines.push(Line::default());

  for (i, topic) in section.content.sections.iter().enumerate() {
    lines.push(Line::from(vec![
      Span::styled(
        format!("{}. ", i + 1),
        Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        topic.heading.clone(),
        Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
      ),
    ]));
    for body in text::wrap(&topic.content, w.saturating_sub(3).max(7)) {
      lines.push(Line::from(Span::styled(format!("   {body}"), Style::default().fg(Theme::TEXT))));
    }
    lines.push(Line::default());
  }

  if let Some(image) = &section.content.image {
    lines.push(Line::from(Span::styled(
      "Visual Guide",
      Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
      format!("   {image}"),
      Style::default().fg(Theme::INFO),
    )));
    lines.push(Line::default());
  }

  if section.content.architecture {
    lines.extend(architecture_lines(width));
    if section.content.workflow {
      lines.push(Line::default());
    }
  }
  if section.content.workflow {
    lines.extend(workflow_lines(width));
  }

  lines
}

/// Scrolling window over pre-built document lines
pub struct ContentView<'a> {
  lines: &'a [Line<'static>],
  offset: usize,
  show_scroll_hint: bool,
}

impl<'a> ContentView<'a> {
  pub fn new(lines: &'a [Line<'static>], offset: usize, show_scroll_hint: bool) -> Self {
    Self {
      lines,
      offset,
      show_scroll_hint,
    }
  }
}

impl Widget for ContentView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
      .title(" DOCUMENT ")
      .title_style(Style::default().fg(Theme::SUBTEXT).add_modifier(Modifier::BOLD))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
      return;
    }

    for (i, line) in self.lines.iter().skip(self.offset).take(inner.height as usize).enumerate() {
      buf.set_line(inner.x + 1, inner.y + i as u16, line, inner.width.saturating_sub(1));
    }

    if self.show_scroll_hint {
      let hint = " ↑ Top (t) ";
      let x = inner.x + inner.width.saturating_sub(hint.width() as u16);
      let y = inner.y + inner.height - 1;
      buf.set_string(x, y, hint, Style::default().fg(Theme::BG).bg(Theme::ACCENT));
    }
  }
}

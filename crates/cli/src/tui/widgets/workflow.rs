//! Automation workflow diagram rendered as styled lines

use cdas_core::{WORKFLOW_STEPS, WORKFLOW_TITLE, WorkflowStep};
use ratatui::{
  style::{Modifier, Style},
  text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// Column width of one step card in the two-up grid
const CARD_COLUMN: usize = 28;

/// Build the workflow block: a grid of step cards followed by the process
/// timeline. Pure function of the static step data and the pane width.
pub fn workflow_lines(width: u16) -> Vec<Line<'static>> {
  let mut lines = Vec::new();

  lines.push(Line::from(Span::styled(
    WORKFLOW_TITLE,
    Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::default());

  // Cards sit two per row when the pane is wide enough, stacked otherwise
  if width as usize >= 2 * CARD_COLUMN {
    for pair in WORKFLOW_STEPS.chunks(2) {
      let mut spans = card_spans(&pair[0]);
      if let Some(second) = pair.get(1) {
        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        spans.push(Span::raw(" ".repeat(CARD_COLUMN.saturating_sub(used))));
        spans.extend(card_spans(second));
      }
      lines.push(Line::from(spans));
    }
  } else {
    for step in &WORKFLOW_STEPS {
      lines.push(Line::from(card_spans(step)));
    }
  }
  lines.push(Line::default());

  lines.push(Line::from(Span::styled(
    "Process Timeline",
    Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
  )));
  let spine = Style::default().fg(Theme::MUTED);
  for step in WORKFLOW_STEPS {
    lines.push(Line::from(vec![
      Span::styled("│ ", spine),
      Span::styled("● ", Style::default().fg(Theme::accent(step.accent))),
      Span::styled(step.title, Style::default().fg(Theme::TEXT)),
    ]));
    lines.push(Line::from(vec![
      Span::styled("│   ", spine),
      Span::styled(format!("Automated process step {}", step.number), spine),
    ]));
  }

  lines
}

fn card_spans(step: &WorkflowStep) -> Vec<Span<'static>> {
  let accent = Style::default().fg(Theme::accent(step.accent));
  vec![
    Span::styled(format!("[{}] ", step.number), accent.add_modifier(Modifier::BOLD)),
    Span::styled(format!("{} ", step.icon.glyph()), accent),
    Span::styled(step.title, Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD)),
  ]
}

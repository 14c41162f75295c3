//! System architecture diagram rendered as styled lines

use cdas_core::{ARCHITECTURE_TIERS, ARCHITECTURE_TITLE, FLOW_BRANCH, FLOW_BRANCH_FROM, FLOW_NODES, FlowNode};
use ratatui::{
  style::{Modifier, Style},
  text::{Line, Span},
};

use crate::tui::{text, theme::Theme};

const BOX_WIDTH: usize = 14;
const BOX_INNER: usize = BOX_WIDTH - 2;
const GAP: usize = 5;

/// Columns needed for the boxed flow diagram
pub const FLOW_MIN_WIDTH: u16 = (FLOW_NODES.len() * BOX_WIDTH + (FLOW_NODES.len() - 1) * GAP) as u16 + 1;

/// Build the architecture block: tier summaries plus the data-flow diagram.
/// Pure function of the static tier/flow data and the pane width.
pub fn architecture_lines(width: u16) -> Vec<Line<'static>> {
  let mut lines = Vec::new();

  lines.push(Line::from(Span::styled(
    ARCHITECTURE_TITLE,
    Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::default());

  for tier in ARCHITECTURE_TIERS {
    lines.push(Line::from(vec![
      Span::styled("● ", Style::default().fg(Theme::accent(tier.accent))),
      Span::styled(tier.name, Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD)),
    ]));
    for item in tier.items {
      lines.push(Line::from(Span::styled(
        format!("    • {item}"),
        Style::default().fg(Theme::SUBTEXT),
      )));
    }
    lines.push(Line::default());
  }

  if width >= FLOW_MIN_WIDTH {
    lines.extend(flow_boxes());
  } else {
    lines.extend(flow_text(width));
  }

  lines
}

/// Boxed left-to-right flow with the notification branch hanging under the
/// processor node
fn flow_boxes() -> Vec<Line<'static>> {
  let mut lines = Vec::new();

  let top = format!("┌{}┐", "─".repeat(BOX_INNER));
  let bottom = format!("└{}┘", "─".repeat(BOX_INNER));

  // Row of four node boxes, arrows on the first label row
  lines.push(node_row(|_| top.clone(), false));
  lines.push(node_row(|node| format!("│{:^width$}│", node.label[0], width = BOX_INNER), true));
  lines.push(node_row(|node| format!("│{:^width$}│", node.label[1], width = BOX_INNER), false));
  lines.push(node_row(|_| bottom.clone(), false));

  // Branch drops from the center of the source node
  let center = FLOW_BRANCH_FROM * (BOX_WIDTH + GAP) + BOX_WIDTH / 2;
  let muted = Style::default().fg(Theme::MUTED);
  lines.push(Line::from(vec![
    Span::raw(" ".repeat(center)),
    Span::styled("│", muted),
  ]));
  lines.push(Line::from(vec![
    Span::raw(" ".repeat(center)),
    Span::styled("▼", muted),
  ]));

  let branch_style = Style::default().fg(Theme::accent(FLOW_BRANCH.accent));
  let branch_x = center - BOX_WIDTH / 2;
  for row in [
    top,
    format!("│{:^width$}│", FLOW_BRANCH.label[0], width = BOX_INNER),
    format!("│{:^width$}│", FLOW_BRANCH.label[1], width = BOX_INNER),
    bottom,
  ] {
    lines.push(Line::from(vec![Span::raw(" ".repeat(branch_x)), Span::styled(row, branch_style)]));
  }

  lines
}

fn node_row(cell: impl Fn(&FlowNode) -> String, arrows: bool) -> Line<'static> {
  let mut spans = Vec::new();
  for (i, node) in FLOW_NODES.iter().enumerate() {
    spans.push(Span::styled(cell(node), Style::default().fg(Theme::accent(node.accent))));
    if i + 1 < FLOW_NODES.len() {
      if arrows {
        spans.push(Span::styled("  →  ", Style::default().fg(Theme::MUTED)));
      } else {
        spans.push(Span::raw(" ".repeat(GAP)));
      }
    }
  }
  Line::from(spans)
}

/// Plain-text fallback for panes too narrow for the boxes
fn flow_text(width: u16) -> Vec<Line<'static>> {
  let chain: Vec<String> = FLOW_NODES.iter().map(|node| node.label.join(" ")).collect();
  let flow = format!("Flow: {}", chain.join(" → "));
  let branch = format!(
    "Branch: {} → {}",
    FLOW_NODES[FLOW_BRANCH_FROM].label.join(" "),
    FLOW_BRANCH.label.join(" ")
  );

  let mut lines = Vec::new();
  for piece in [flow, branch] {
    for wrapped in text::wrap(&piece, width.max(10) as usize) {
      lines.push(Line::from(Span::styled(wrapped, Style::default().fg(Theme::SUBTEXT))));
    }
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  fn flatten(lines: &[Line]) -> String {
    lines
      .iter()
      .map(|line| {
        line
          .spans
          .iter()
          .map(|span| span.content.as_ref())
          .collect::<String>()
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  #[test]
  fn test_wide_panes_get_boxed_flow() {
    let text = flatten(&architecture_lines(100));
    assert!(text.contains("System Architecture"));
    assert!(text.contains("Frontend Layer"));
    assert!(text.contains("│    CDAS    │"));
    assert!(text.contains("│Notification│"));
    assert!(text.contains("▼"));
  }

  #[test]
  fn test_narrow_panes_fall_back_to_text() {
    let text = flatten(&architecture_lines(50));
    assert!(!text.contains("┌"));
    assert!(text.contains("Flow: CDAS Portal → Web Scraper"));
    assert!(text.contains("Branch: Data Processor → Notification System"));
  }

  #[test]
  fn test_every_tier_item_is_listed() {
    let text = flatten(&architecture_lines(100));
    for tier in ARCHITECTURE_TIERS {
      for item in tier.items {
        assert!(text.contains(item), "missing tier item: {item}");
      }
    }
  }
}

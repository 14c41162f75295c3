//! Scroll-position tracking for the content pane.

/// Offset past which the scroll-to-top affordance appears
pub const SCROLL_TOP_THRESHOLD: usize = 300;

/// Vertical offset of the content viewport, in rows.
///
/// The offset is mutated freely by input handling and clamped against the
/// measured content height at render time, so intermediate values may
/// overshoot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
  offset: usize,
}

impl ScrollState {
  pub fn offset(&self) -> usize {
    self.offset
  }

  pub fn scroll_up(&mut self, rows: usize) {
    self.offset = self.offset.saturating_sub(rows);
  }

  pub fn scroll_down(&mut self, rows: usize) {
    self.offset = self.offset.saturating_add(rows);
  }

  /// Jump back to the top of the section
  pub fn to_top(&mut self) {
    self.offset = 0;
  }

  /// Request the end of the content; the render pass clamps this to the real
  /// last page.
  pub fn to_bottom(&mut self) {
    self.offset = usize::MAX;
  }

  /// Restrict the offset to the scrollable range
  pub fn clamp(&mut self, max: usize) {
    if self.offset > max {
      self.offset = max;
    }
  }

  /// True once the viewport has moved past [`SCROLL_TOP_THRESHOLD`].
  /// Derived on every read, never cached.
  pub fn show_scroll_top(&self) -> bool {
    self.offset > SCROLL_TOP_THRESHOLD
  }
}

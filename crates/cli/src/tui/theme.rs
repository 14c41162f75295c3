//! Color palette shared by every view

use cdas_core::Accent;
use ratatui::style::Color;

pub struct Theme;

impl Theme {
  pub const BG: Color = Color::Rgb(24, 24, 37);
  pub const SURFACE: Color = Color::Rgb(38, 38, 54);
  pub const OVERLAY: Color = Color::Rgb(54, 54, 74);
  pub const TEXT: Color = Color::Rgb(205, 214, 244);
  pub const SUBTEXT: Color = Color::Rgb(166, 173, 200);
  pub const MUTED: Color = Color::Rgb(108, 112, 134);
  pub const ACCENT: Color = Color::Rgb(137, 180, 250);
  pub const INFO: Color = Color::Rgb(116, 199, 236);

  /// Color for a diagram accent tag
  pub fn accent(accent: Accent) -> Color {
    match accent {
      Accent::Blue => Color::Rgb(59, 130, 246),   // #3B82F6
      Accent::Green => Color::Rgb(16, 185, 129),  // #10B981
      Accent::Purple => Color::Rgb(139, 92, 246), // #8B5CF6
      Accent::Amber => Color::Rgb(245, 158, 11),  // #F59E0B
      Accent::Orange => Color::Rgb(249, 115, 22), // #F97316
      Accent::Red => Color::Rgb(239, 68, 68),     // #EF4444
      Accent::Pink => Color::Rgb(236, 72, 153),   // #EC4899
    }
  }
}

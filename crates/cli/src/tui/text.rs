//! Width-aware text helpers for fixed-column layout

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text at word boundaries to fit `width` columns.
///
/// Embedded line breaks are kept: each input line wraps independently and
/// blank lines survive as empty output lines. Words wider than the pane are
/// hard-broken.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
  if width == 0 {
    return Vec::new();
  }

  let mut lines = Vec::new();
  for raw in text.lines() {
    if raw.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current = String::new();
    let mut current_width = 0usize;
    for word in raw.split_whitespace() {
      let word_width = word.width();

      if current_width > 0 && current_width + 1 + word_width > width {
        lines.push(std::mem::take(&mut current));
        current_width = 0;
      }

      if word_width > width {
        for c in word.chars() {
          let cw = c.width().unwrap_or(0);
          if current_width + cw > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
          }
          current.push(c);
          current_width += cw;
        }
      } else {
        if current_width > 0 {
          current.push(' ');
          current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
      }
    }

    if !current.is_empty() {
      lines.push(current);
    }
  }

  lines
}

/// Truncate to `width` columns, appending "..." when text is cut
pub fn truncate(text: &str, width: usize) -> String {
  if text.width() <= width {
    return text.to_string();
  }
  if width <= 3 {
    return ".".repeat(width);
  }

  let mut out = String::new();
  let mut used = 0usize;
  for c in text.chars() {
    let cw = c.width().unwrap_or(0);
    if used + cw > width - 3 {
      break;
    }
    out.push(c);
    used += cw;
  }
  out.push_str("...");
  out
}

/// Pad with trailing spaces to exactly `width` columns
pub fn pad(text: &str, width: usize) -> String {
  let w = text.width();
  if w >= width {
    text.to_string()
  } else {
    format!("{}{}", text, " ".repeat(width - w))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrap_fits_width() {
    let lines = wrap("The system supports multiple user roles including Admin, Manager, and Viewer.", 20);
    assert!(lines.len() > 1);
    for line in &lines {
      assert!(line.width() <= 20, "line too wide: {line:?}");
    }
  }

  #[test]
  fn test_wrap_keeps_embedded_line_breaks() {
    let lines = wrap("POST /api/auth/login - User authentication\nPOST /api/auth/logout - User logout", 80);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("POST /api/auth/login"));
  }

  #[test]
  fn test_wrap_preserves_blank_lines() {
    let lines = wrap("first\n\nsecond", 80);
    assert_eq!(lines, vec!["first".to_string(), String::new(), "second".to_string()]);
  }

  #[test]
  fn test_wrap_hard_breaks_long_words() {
    let lines = wrap("https://iili.io/KBpgFRe.jpg", 10);
    assert!(lines.len() > 1);
    for line in &lines {
      assert!(line.width() <= 10);
    }
  }

  #[test]
  fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer sentence", 10), "a longe...");
    assert_eq!(truncate("abcdef", 2), "..");
  }

  #[test]
  fn test_pad() {
    assert_eq!(pad("ab", 4), "ab  ");
    assert_eq!(pad("abcdef", 4), "abcdef");
  }
}

//! Keyboard handling for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level action produced from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Quit,
  NavigateUp,
  NavigateDown,
  Select,
  /// Jump straight to the nth catalog section (1-based)
  JumpTo(usize),
  Back,
  OpenSearch,
  Submit,
  Input(char),
  DeleteChar,
  ScrollUp,
  ScrollDown,
  PageUp,
  PageDown,
  GoToTop,
  GoToBottom,
  ToggleSidebar,
  ToggleHelp,
  None,
}

/// Map a key event to an action.
///
/// When `input_active` is set, printable keys feed the search box instead of
/// triggering bindings. Ctrl-C quits in either mode.
pub fn key_to_action(key: KeyEvent, input_active: bool) -> Action {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    return Action::Quit;
  }

  if input_active {
    return match key.code {
      KeyCode::Esc => Action::Back,
      KeyCode::Enter => Action::Submit,
      KeyCode::Backspace => Action::DeleteChar,
      KeyCode::Char(c) => Action::Input(c),
      _ => Action::None,
    };
  }

  match key.code {
    KeyCode::Char('q') => Action::Quit,
    KeyCode::Char('/') => Action::OpenSearch,
    KeyCode::Char('j') | KeyCode::Down => Action::NavigateDown,
    KeyCode::Char('k') | KeyCode::Up => Action::NavigateUp,
    KeyCode::Char('h') | KeyCode::Left => Action::ScrollUp,
    KeyCode::Char('l') | KeyCode::Right => Action::ScrollDown,
    KeyCode::Enter => Action::Select,
    KeyCode::Esc => Action::Back,
    KeyCode::PageUp => Action::PageUp,
    KeyCode::PageDown => Action::PageDown,
    KeyCode::Char('g') => Action::GoToTop,
    KeyCode::Char('G') => Action::GoToBottom,
    KeyCode::Char('t') => Action::GoToTop,
    KeyCode::Char('b') => Action::ToggleSidebar,
    KeyCode::Char('?') => Action::ToggleHelp,
    KeyCode::Char(c @ '1'..='9') => Action::JumpTo(c as usize - '0' as usize),
    _ => Action::None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn test_normal_mode_bindings() {
    assert_eq!(key_to_action(key(KeyCode::Char('q')), false), Action::Quit);
    assert_eq!(key_to_action(key(KeyCode::Char('/')), false), Action::OpenSearch);
    assert_eq!(key_to_action(key(KeyCode::Char('j')), false), Action::NavigateDown);
    assert_eq!(key_to_action(key(KeyCode::Down), false), Action::NavigateDown);
    assert_eq!(key_to_action(key(KeyCode::Char('k')), false), Action::NavigateUp);
    assert_eq!(key_to_action(key(KeyCode::Enter), false), Action::Select);
    assert_eq!(key_to_action(key(KeyCode::Char('t')), false), Action::GoToTop);
    assert_eq!(key_to_action(key(KeyCode::Char('b')), false), Action::ToggleSidebar);
    assert_eq!(key_to_action(key(KeyCode::Char('3')), false), Action::JumpTo(3));
  }

  #[test]
  fn test_input_mode_routes_chars_to_search() {
    assert_eq!(key_to_action(key(KeyCode::Char('q')), true), Action::Input('q'));
    assert_eq!(key_to_action(key(KeyCode::Char('3')), true), Action::Input('3'));
    assert_eq!(key_to_action(key(KeyCode::Backspace), true), Action::DeleteChar);
    assert_eq!(key_to_action(key(KeyCode::Enter), true), Action::Submit);
    assert_eq!(key_to_action(key(KeyCode::Esc), true), Action::Back);
  }

  #[test]
  fn test_ctrl_c_quits_in_both_modes() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(key_to_action(ctrl_c, false), Action::Quit);
    assert_eq!(key_to_action(ctrl_c, true), Action::Quit);
  }
}

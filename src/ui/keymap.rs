//! Key bindings for the address form
//!
//! - `Ctrl+R` or `F5` → Validate Addresses
//! - `Ctrl+L` → Clear
//! - `Ctrl+Y` → copy valid addresses, one per line
//! - `Ctrl+U` → copy valid addresses, comma-separated
//! - `Ctrl+V` → paste into the input
//! - `PageUp` / `PageDown` → scroll the results list
//! - `Esc`, `Ctrl+Q` or `Ctrl+C` → quit
//!
//! Everything else edits the input area.

use crate::app::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows moved by one PageUp/PageDown
pub const RESULTS_PAGE: i32 = 5;

/// Short key reference drawn under the input area
pub const KEY_HELP: &str =
    "^R/F5 validate · ^L clear · ^Y copy lines · ^U copy commas · ^V paste · Esc quit";

/// Translate a terminal key press into an AppEvent
pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::F(5) => AppEvent::Validate,
        KeyCode::Esc => AppEvent::Quit,
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'r' => AppEvent::Validate,
            'l' => AppEvent::Clear,
            'y' => AppEvent::CopyLines,
            'u' => AppEvent::CopyCommas,
            'v' => AppEvent::PasteClipboard,
            'q' | 'c' => AppEvent::Quit,
            _ => AppEvent::None,
        },
        KeyCode::Char(_) if alt => AppEvent::None,
        KeyCode::Char(c) => AppEvent::InsertChar(c),
        KeyCode::Enter => AppEvent::Newline,
        KeyCode::Backspace => AppEvent::Backspace,
        KeyCode::Delete => AppEvent::Delete,
        KeyCode::Left => AppEvent::CursorLeft,
        KeyCode::Right => AppEvent::CursorRight,
        KeyCode::Up => AppEvent::CursorUp,
        KeyCode::Down => AppEvent::CursorDown,
        KeyCode::Home => AppEvent::CursorHome,
        KeyCode::End => AppEvent::CursorEnd,
        KeyCode::PageUp => AppEvent::ScrollResults(-RESULTS_PAGE),
        KeyCode::PageDown => AppEvent::ScrollResults(RESULTS_PAGE),
        _ => AppEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_validate_bindings() {
        assert_eq!(key_to_app_event(ctrl('r')), AppEvent::Validate);
        assert_eq!(key_to_app_event(key(KeyCode::F(5))), AppEvent::Validate);
    }

    #[test]
    fn test_clear_binding() {
        assert_eq!(key_to_app_event(ctrl('l')), AppEvent::Clear);
    }

    #[test]
    fn test_copy_and_paste_bindings() {
        assert_eq!(key_to_app_event(ctrl('y')), AppEvent::CopyLines);
        assert_eq!(key_to_app_event(ctrl('u')), AppEvent::CopyCommas);
        assert_eq!(key_to_app_event(ctrl('v')), AppEvent::PasteClipboard);
    }

    #[test]
    fn test_quit_variants() {
        assert_eq!(key_to_app_event(key(KeyCode::Esc)), AppEvent::Quit);
        assert_eq!(key_to_app_event(ctrl('q')), AppEvent::Quit);
        assert_eq!(key_to_app_event(ctrl('c')), AppEvent::Quit);
    }

    #[test]
    fn test_plain_and_shifted_chars_insert() {
        assert_eq!(key_to_app_event(key(KeyCode::Char('a'))), AppEvent::InsertChar('a'));
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_app_event(shifted), AppEvent::InsertChar('A'));
        assert_eq!(key_to_app_event(key(KeyCode::Char(','))), AppEvent::InsertChar(','));
    }

    #[test]
    fn test_enter_inserts_newline() {
        assert_eq!(key_to_app_event(key(KeyCode::Enter)), AppEvent::Newline);
    }

    #[test]
    fn test_page_keys_scroll_results() {
        assert_eq!(
            key_to_app_event(key(KeyCode::PageDown)),
            AppEvent::ScrollResults(RESULTS_PAGE)
        );
        assert_eq!(
            key_to_app_event(key(KeyCode::PageUp)),
            AppEvent::ScrollResults(-RESULTS_PAGE)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(key_to_app_event(ctrl('z')), AppEvent::None);
        assert_eq!(key_to_app_event(key(KeyCode::Tab)), AppEvent::None);
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(key_to_app_event(alt), AppEvent::None);
    }
}

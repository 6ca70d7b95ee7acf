//! Single-line query editor shown at the top of the screen.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "search apps by name";

/// Thin wrapper around a one-line [`TextArea`] that exposes just the pieces
/// the application needs: the current text, key routing, and rendering.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::from([initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Route a key event into the editor. Returns `true` when the text
    /// changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Render the editor into `area`.
    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_with_the_provided_text() {
        let input = SearchInput::new("hello");
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = SearchInput::new("alp");
        assert!(input.input(key(KeyCode::Char('h'))));
        assert_eq!(input.text(), "alph");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut input = SearchInput::new("ab");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "a");
    }
}

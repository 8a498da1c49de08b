//! Query bar widget: single-line text input at the bottom of the projects view.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`TextInputState`] is shared with the greeting title on the home view.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
}

impl TextInputState {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Apply an editing event. Returns `true` when `text` changed, which is
    /// the caller's cue to forward it to the pipeline.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, cursor = self.cursor, "input: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.text.remove(prev);
                self.cursor = prev;
                tracing::debug!(text = %self.text, cursor = self.cursor, "input: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.prev_boundary();
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Column of the cursor in characters, for terminal cursor placement.
    pub fn cursor_col(&self) -> u16 {
        self.text[..self.cursor].chars().count() as u16
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a TextInputState,
    /// Number of projects in the last emitted result, if any arrived yet.
    matches: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a TextInputState, matches: Option<usize>, focused: bool, theme: &'a Theme) -> Self {
        Self { state, matches, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let x = (area.x + 1 + self.state.cursor_col()).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(14)])
            .split(inner);

        let query_line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let count = match self.matches {
            Some(1) => "1 match".to_string(),
            Some(n) => format!("{n} matches"),
            None => String::new(),
        };
        Paragraph::new(Line::from(Span::styled(count, self.theme.status_info)))
            .right_aligned()
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> TextInputState {
        let mut state = TextInputState::default();
        for c in s.chars() {
            state.handle(&AppEvent::Char(c));
        }
        state
    }

    #[test]
    fn typing_appends_and_reports_change() {
        let mut state = typed("cl");
        assert!(state.handle(&AppEvent::Char('i')));
        assert_eq!(state.text, "cli");
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn backspace_at_start_is_no_change() {
        let mut state = TextInputState::default();
        assert!(!state.handle(&AppEvent::Backspace));
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut state = typed("añb");
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(state.cursor_col(), 1);
        assert!(state.handle(&AppEvent::Backspace));
        assert_eq!(state.text, "ñb");
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(state.cursor, "ñ".len());
    }

    #[test]
    fn cursor_moves_do_not_report_change() {
        let mut state = typed("x");
        assert!(!state.handle(&AppEvent::Nav(Direction::Left)));
        assert!(!state.handle(&AppEvent::Nav(Direction::Right)));
    }

    #[test]
    fn with_text_places_cursor_at_end() {
        let state = TextInputState::with_text("Welcome");
        assert_eq!(state.cursor, 7);
    }
}

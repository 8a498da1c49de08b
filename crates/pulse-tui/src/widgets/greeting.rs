//! Greeting widget for the home view: a heading bound to an editable title.

use crate::theme::Theme;
use crate::widgets::query_bar::TextInputState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub struct Greeting<'a> {
    title: &'a TextInputState,
    editing: bool,
    theme: &'a Theme,
}

impl<'a> Greeting<'a> {
    pub fn new(title: &'a TextInputState, editing: bool, theme: &'a Theme) -> Self {
        Self { title, editing, theme }
    }

    /// Area of the input box inside `area`, for cursor placement.
    pub fn input_area(area: Rect) -> Rect {
        Self::split(area)[1]
    }

    fn split(area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Fill(1)])
            .margin(1)
            .split(area)
    }
}

impl Widget for Greeting<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Self::split(area);

        Paragraph::new(Line::from(Span::styled(
            self.title.text.as_str(),
            self.theme.greeting_title,
        )))
        .render(chunks[0], buf);

        let input = Block::bordered()
            .title("Greeting")
            .border_style(self.theme.border(self.editing));
        let inner = input.inner(chunks[1]);
        input.render(chunks[1], buf);
        Paragraph::new(self.title.text.as_str()).render(inner, buf);

        let hint = if self.editing { "Esc: done" } else { "/: edit greeting   Tab: projects" };
        Paragraph::new(Line::from(Span::styled(hint, self.theme.border_unfocused)))
            .render(chunks[2], buf);
    }
}

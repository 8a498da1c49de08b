//! Keybinding overlay, toggled with `?`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Clear, Row, Table, Widget},
};

const BINDINGS: [(&str, &str); 7] = [
    ("Tab", "home / projects"),
    ("/", "edit the search or greeting"),
    ("Esc, Enter", "stop editing"),
    ("j k, ↓ ↑", "move the selection"),
    ("← →", "move the text cursor"),
    ("?", "close this help"),
    ("q, Ctrl+c", "quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [popup] = Layout::vertical([Constraint::Length(BINDINGS.len() as u16 + 2)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(48)])
            .flex(Flex::Center)
            .areas(popup);
        Clear.render(popup, buf);

        let keys = Style::default().add_modifier(Modifier::BOLD);
        let rows = BINDINGS
            .iter()
            .map(|(key, action)| Row::new([Cell::from(*key).style(keys), Cell::from(*action)]));

        Table::new(rows, [Constraint::Length(12), Constraint::Fill(1)])
            .block(
                Block::bordered()
                    .title(" keys ")
                    .border_style(self.theme.border_focused),
            )
            .render(popup, buf);
    }
}

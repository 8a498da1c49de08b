//! One-line strip naming the views, active one highlighted.

use crate::app::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Tabs, Widget},
};

pub struct TabBar<'a> {
    active: Route,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Route, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tabs_area, hint_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(18)]).areas(area);

        let selected = Route::ALL.iter().position(|r| *r == self.active);
        Tabs::new(Route::ALL.iter().map(|r| r.label()))
            .select(selected)
            .highlight_style(self.theme.project_selected)
            .divider("|")
            .render(tabs_area, buf);

        Paragraph::new("q quit  ? help")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Right)
            .render(hint_area, buf);
    }
}

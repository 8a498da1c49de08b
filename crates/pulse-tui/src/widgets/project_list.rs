//! Project list widget: the filtered results on the projects view.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select previous project |
//! | `↓` / `j` | Select next project |
//!
//! The selection follows the project, not the row: when a new result list
//! arrives the same project id stays selected if it is still present.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use pulse_core::{Project, ProjectId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ProjectListState {
    pub projects: Vec<Project>,
    /// Index into `projects` of the highlighted row.
    pub selected: usize,
    /// False until the pipeline has emitted its first value.
    pub loaded: bool,
    /// First visible row, cached from the last render.
    offset: Cell<usize>,
}

impl ProjectListState {
    /// Swap in a freshly emitted result list, keeping the selection on the
    /// same project when it survived the filter.
    pub fn replace(&mut self, projects: Vec<Project>) {
        let keep: Option<ProjectId> = self.selected_project().map(|p| p.id);
        self.selected = keep
            .and_then(|id| projects.iter().position(|p| p.id == id))
            .unwrap_or(0);
        self.projects = projects;
        self.loaded = true;
        tracing::debug!(count = self.projects.len(), selected = self.selected, "list: replaced");
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < self.projects.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Scroll so the selected row is inside a window of `height` rows.
    fn window(&self, height: usize) -> usize {
        let height = height.max(1);
        let mut offset = self.offset.get();
        if self.selected < offset {
            offset = self.selected;
        } else if self.selected >= offset + height {
            offset = self.selected + 1 - height;
        }
        self.offset.set(offset);
        offset
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ProjectList<'a> {
    state: &'a ProjectListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProjectList<'a> {
    pub fn new(state: &'a ProjectListState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for ProjectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Projects")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.projects.is_empty() {
            let placeholder = if self.state.loaded { "No projects match." } else { "Loading…" };
            Paragraph::new(Line::from(Span::styled(placeholder, self.theme.list_empty)))
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let start = self.state.window(height);

        let lines: Vec<Line> = self
            .state
            .projects
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(i, project)| {
                let mut spans = vec![
                    Span::raw(format!("{:>4} ", project.id.0)),
                    Span::styled(project.name.clone(), self.theme.project_name),
                ];
                for tag in &project.tags {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!("[{tag}]"), self.theme.project_tag));
                }
                let line = Line::from(spans);
                if i == self.state.selected {
                    line.style(self.theme.project_selected)
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

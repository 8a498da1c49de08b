//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The search pipeline runs
//! on a separate tokio runtime; the loop only pushes query text into it and
//! drains whatever it emitted since the last frame.

use crate::{
    event::{self, AppEvent, KeyMode},
    theme::Theme,
    widgets::{
        greeting::Greeting,
        help::HelpPopup,
        project_list::{ProjectList, ProjectListState},
        query_bar::{QueryBar, TextInputState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pulse_core::{config::Config, QueryInput, ResultStream, SearchPipeline};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::runtime::Handle;

// ---------------------------------------------------------------------------
// Routing + focus
// ---------------------------------------------------------------------------

/// Top-level views. Routing never touches pipeline state directly; leaving
/// the projects view simply drops its activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Projects];

    /// Resolve a path. Anything unrecognised lands on [`Route::Home`].
    pub fn parse(path: &str) -> Route {
        match path.trim().trim_start_matches('/') {
            "" | "home" => Route::Home,
            "projects" => Route::Projects,
            other => {
                tracing::debug!(path = other, "route: unknown path, redirecting home");
                Route::Home
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Projects => "projects",
        }
    }

    pub fn next(self) -> Route {
        match self {
            Route::Home => Route::Projects,
            Route::Projects => Route::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys navigate (list selection, view switching).
    Browse,
    /// Keys edit the text input of the current view.
    Editing,
}

/// The two ends of a live pipeline activation.
struct ActiveSearch {
    input: QueryInput,
    results: ResultStream,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub route: Route,
    pub focus: Focus,
    /// Home view heading, edited in place.
    pub greeting: TextInputState,
    pub query: TextInputState,
    pub list: ProjectListState,
    /// Terminal pipeline error, shown until the view is re-entered.
    pub status: Option<String>,
    pub theme: Theme,
    pub show_help: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    pipeline: SearchPipeline,
    runtime: Handle,
    search: Option<ActiveSearch>,
}

impl App {
    pub fn new(config: &Config, theme: Theme, pipeline: SearchPipeline, runtime: Handle, route: Route) -> Self {
        let state = AppState {
            route: Route::Home,
            focus: Focus::Browse,
            greeting: TextInputState::with_text(config.ui.greeting.clone()),
            query: TextInputState::default(),
            list: ProjectListState::default(),
            status: None,
            theme,
            show_help: false,
            quit: false,
        };

        let mut app = App {
            state,
            pipeline,
            runtime,
            search: None,
        };
        app.navigate(route);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.pump_results();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if !ct_event::poll(Duration::from_millis(16))? {
                continue;
            }
            let raw = ct_event::read()?;
            if matches!(&raw, Event::Key(key) if key.kind != KeyEventKind::Press) {
                continue;
            }
            let mode = match self.state.focus {
                Focus::Editing => KeyMode::Insert,
                Focus::Browse => KeyMode::Browse,
            };
            if let Some(ev) = event::translate(raw, mode) {
                tracing::debug!(route = ?self.state.route, ?mode, event = ?ev, "key event");
                self.handle(ev);
            }
        }
        Ok(())
    }

    /// Switch views. Entering the projects view starts a fresh activation;
    /// leaving it drops the old one.
    pub fn navigate(&mut self, route: Route) {
        if route == self.state.route && (route != Route::Projects || self.search.is_some()) {
            return;
        }
        tracing::debug!(from = ?self.state.route, to = ?route, "navigate");

        if self.search.take().is_some() {
            tracing::debug!("projects view left, activation dropped");
        }
        self.state.route = route;
        self.state.focus = Focus::Browse;

        if route == Route::Projects {
            self.state.query = TextInputState::default();
            self.state.list = ProjectListState::default();
            self.state.status = None;

            let _guard = self.runtime.enter();
            let (input, results) = self.pipeline.activate();
            self.search = Some(ActiveSearch { input, results });
        }
    }

    /// Drain every value the pipeline emitted since the last call.
    pub fn pump_results(&mut self) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        while let Some(update) = search.results.try_next() {
            match update {
                Ok(projects) => self.state.list.replace(projects),
                Err(err) => {
                    tracing::warn!(error = %err, "search ended with an error");
                    self.state.status = Some(err.to_string());
                }
            }
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                self.state.show_help = false;
            }
            return;
        }

        match event {
            AppEvent::Char('?') if self.state.focus == Focus::Browse => {
                self.state.show_help = true;
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.state.quit = true;
            }
            AppEvent::NextView => self.navigate(self.state.route.next()),
            AppEvent::QueryFocus => self.state.focus = Focus::Editing,
            AppEvent::Escape | AppEvent::Enter if self.state.focus == Focus::Editing => {
                self.state.focus = Focus::Browse;
            }
            AppEvent::Resize(_, _) => {}
            other => self.dispatch(other),
        }
    }

    /// Route an event to whatever owns the current route and focus.
    fn dispatch(&mut self, event: AppEvent) {
        let s = &mut self.state;
        match (s.route, s.focus) {
            (Route::Home, Focus::Editing) => {
                s.greeting.handle(&event);
            }
            (Route::Projects, Focus::Editing) => {
                if s.query.handle(&event) {
                    if let Some(search) = &self.search {
                        search.input.push(s.query.text.clone());
                    }
                }
            }
            (Route::Projects, Focus::Browse) => s.list.handle(&event),
            (Route::Home, Focus::Browse) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let editing = state.focus == Focus::Editing;

    // Vertical: 1-line tab bar | body | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(TabBar::new(state.route, &state.theme), vert[0]);

    match state.route {
        Route::Home => {
            frame.render_widget(Greeting::new(&state.greeting, editing, &state.theme), vert[1]);
            if editing {
                let input = Greeting::input_area(vert[1]);
                let x = (input.x + 1 + state.greeting.cursor_col()).min(input.right().saturating_sub(1));
                frame.set_cursor_position((x, input.y + 1));
            }
        }
        Route::Projects => {
            let body = Layout::default()
                .direction(LayoutDir::Vertical)
                .constraints([Constraint::Fill(1), Constraint::Length(3)])
                .split(vert[1]);

            let matches = state.list.loaded.then(|| state.list.projects.len());
            frame.render_widget(ProjectList::new(&state.list, !editing, &state.theme), body[0]);
            let bar = QueryBar::new(&state.query, matches, editing, &state.theme);
            let cursor = bar.cursor_position(body[1]);
            frame.render_widget(bar, body[1]);
            if editing {
                frame.set_cursor_position(cursor);
            }
        }
    }

    let status = match &state.status {
        Some(err) => Line::from(Span::styled(err.as_str(), state.theme.status_error)),
        None => Line::from(Span::styled(
            "Tab: switch view   /: edit   ?: help",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    frame.render_widget(Paragraph::new(status), vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Key translation: crossterm events become [`AppEvent`]s, so widgets and
//! app state never see crossterm types.
//!
//! Two keymaps exist. [`KeyMode::Browse`] gives letters their shortcut
//! meaning (`q`, `/`, `hjkl`); [`KeyMode::Insert`] is used while a text input
//! has focus and turns every printable key into [`AppEvent::Char`].
//!
//! | Key(s)         | Browse            | Insert      |
//! |----------------|-------------------|-------------|
//! | `Ctrl+c`       | `Quit`            | `Quit`      |
//! | `q`            | `Quit`            | `Char('q')` |
//! | `/`            | `QueryFocus`      | `Char('/')` |
//! | `h j k l`      | `Nav(..)`         | `Char(..)`  |
//! | arrows         | `Nav(..)`         | `Nav(..)`   |
//! | `Tab`          | `NextView`        | `NextView`  |
//! | `Enter`, `Esc` | `Enter`, `Escape` | same        |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Browse,
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Cycle to the next top-level view.
    NextView,
    /// Start editing the current view's text input.
    QueryFocus,
    Nav(Direction),
    Char(char),
    Backspace,
    Enter,
    Escape,
    Resize(u16, u16),
}

/// Translate one terminal event under the given keymap. Events with no
/// meaning in that keymap yield `None`.
pub fn translate(event: Event, mode: KeyMode) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => translate_key(key, mode),
        _ => None,
    }
}

fn translate_key(key: KeyEvent, mode: KeyMode) -> Option<AppEvent> {
    let plain = key.modifiers == KeyModifiers::NONE;
    let typed = plain || key.modifiers == KeyModifiers::SHIFT;

    let shared = match key.code {
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => Some(AppEvent::Quit),
        KeyCode::Up => Some(AppEvent::Nav(Direction::Up)),
        KeyCode::Down => Some(AppEvent::Nav(Direction::Down)),
        KeyCode::Left => Some(AppEvent::Nav(Direction::Left)),
        KeyCode::Right => Some(AppEvent::Nav(Direction::Right)),
        KeyCode::Tab if plain => Some(AppEvent::NextView),
        KeyCode::Backspace if plain => Some(AppEvent::Backspace),
        KeyCode::Enter if plain => Some(AppEvent::Enter),
        KeyCode::Esc => Some(AppEvent::Escape),
        _ => None,
    };
    if shared.is_some() {
        return shared;
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };
    if !typed {
        return None;
    }
    match (mode, c) {
        (KeyMode::Insert, c) => Some(AppEvent::Char(c)),
        (KeyMode::Browse, 'q') if plain => Some(AppEvent::Quit),
        (KeyMode::Browse, '/') if plain => Some(AppEvent::QueryFocus),
        (KeyMode::Browse, 'k') if plain => Some(AppEvent::Nav(Direction::Up)),
        (KeyMode::Browse, 'j') if plain => Some(AppEvent::Nav(Direction::Down)),
        (KeyMode::Browse, 'h') if plain => Some(AppEvent::Nav(Direction::Left)),
        (KeyMode::Browse, 'l') if plain => Some(AppEvent::Nav(Direction::Right)),
        (KeyMode::Browse, c) => Some(AppEvent::Char(c)),
    }
}

//! Colour theme for the pulse TUI.
//!
//! The default theme is embedded with [`include_str!`]; each entry is a short
//! style spec such as `"cyan bold"` or `"on darkgray"`, resolved once at
//! startup into ratatui [`Style`]s.

use std::str::FromStr;

use anyhow::{bail, Context};
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

#[derive(Debug, Deserialize)]
struct Specs {
    border: BorderSpecs,
    list: ListSpecs,
    status: StatusSpecs,
    greeting: GreetingSpecs,
}

#[derive(Debug, Deserialize)]
struct BorderSpecs {
    focused: String,
    unfocused: String,
}

#[derive(Debug, Deserialize)]
struct ListSpecs {
    name: String,
    tag: String,
    selected: String,
    empty: String,
}

#[derive(Debug, Deserialize)]
struct StatusSpecs {
    info: String,
    error: String,
}

#[derive(Debug, Deserialize)]
struct GreetingSpecs {
    title: String,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    pub project_name: Style,
    pub project_tag: Style,
    /// Row highlight for the selected project, also used for the active tab.
    pub project_selected: Style,
    pub list_empty: Style,
    /// Match counter in the query bar.
    pub status_info: Style,
    pub status_error: Style,
    pub greeting_title: Style,
}

impl Theme {
    /// # Panics
    ///
    /// Panics if the embedded theme is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid")
    }

    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let specs: Specs = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: parse_style(&specs.border.focused)?,
            border_unfocused: parse_style(&specs.border.unfocused)?,
            project_name: parse_style(&specs.list.name)?,
            project_tag: parse_style(&specs.list.tag)?,
            project_selected: parse_style(&specs.list.selected)?,
            list_empty: parse_style(&specs.list.empty)?,
            status_info: parse_style(&specs.status.info)?,
            status_error: parse_style(&specs.status.error)?,
            greeting_title: parse_style(&specs.greeting.title)?,
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

/// Resolve a spec like `"lightred on black bold"`.
fn parse_style(spec: &str) -> anyhow::Result<Style> {
    let mut style = Style::default();
    let mut words = spec.split_whitespace();
    while let Some(word) = words.next() {
        style = match word {
            "bold" => style.add_modifier(Modifier::BOLD),
            "dim" => style.add_modifier(Modifier::DIM),
            "italic" => style.add_modifier(Modifier::ITALIC),
            "on" => {
                let Some(bg) = words.next() else {
                    bail!("style {spec:?}: `on` needs a colour");
                };
                style.bg(parse_color(bg, spec)?)
            }
            fg => style.fg(parse_color(fg, spec)?),
        };
    }
    Ok(style)
}

fn parse_color(word: &str, spec: &str) -> anyhow::Result<Color> {
    Color::from_str(word).ok().with_context(|| format!("style {spec:?}: unknown colour {word:?}"))
}

//! Ratatui widgets for the pulse TUI.

pub mod greeting;
pub mod help;
pub mod project_list;
pub mod query_bar;
pub mod tab_bar;

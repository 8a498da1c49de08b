//! pulse TUI: ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

use std::path::PathBuf;

use pulse_core::{config::Config, SearchPipeline};

pub use app::{App, Route};

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Serve projects from this JSON file instead of the built-in sample.
    pub projects: Option<PathBuf>,
    /// Simulated retrieval latency for the built-in sample.
    pub latency_ms: Option<u64>,
    /// Initial view path, e.g. `/projects`.
    pub route: Option<String>,
}

/// Load config, build the store and pipeline, and run the TUI until quit.
pub fn run(options: Options) -> anyhow::Result<()> {
    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config: falling back to defaults");
        Config::defaults()
    });
    if let Some(path) = options.projects {
        config.store.path = Some(path);
    }
    if let Some(ms) = options.latency_ms {
        config.store.latency_ms = ms;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("pulse-search")
        .enable_all()
        .build()?;

    let store = pulse_stores::from_config(&config.store);
    let pipeline = SearchPipeline::new(store, config.search.clone());
    let route = options.route.as_deref().map(Route::parse).unwrap_or(Route::Home);
    tracing::info!(?route, store = ?config.store, "pulse starting");

    App::new(&config, theme::Theme::load_default(), pipeline, runtime.handle().clone(), route).run()
}

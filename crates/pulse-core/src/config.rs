//! Configuration types for pulse.
//!
//! [`Config::load`] reads `~/.config/pulse/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
quiescence_ms  = 300
on_store_error = "terminate"

[store]
latency_ms = 0

[ui]
greeting = "Welcome to Project Pulse"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/pulse/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// What the executor does when a current retrieval fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Deliver the error and end the result stream.
    #[default]
    Terminate,
    /// Log the error, emit nothing for that term, keep serving later terms.
    Recover,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Idle time after the last keystroke before a term is considered stable.
    #[serde(default = "default_quiescence_ms")]
    pub quiescence_ms: u64,
    #[serde(default)]
    pub on_store_error: FailurePolicy,
}

fn default_quiescence_ms() -> u64 { 300 }

impl SearchConfig {
    pub fn quiescence(&self) -> Duration {
        Duration::from_millis(self.quiescence_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiescence_ms: default_quiescence_ms(),
            on_store_error: FailurePolicy::default(),
        }
    }
}

/// `[store]` section of `config.toml`.
///
/// With no `path` the built-in sample projects are served from memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding an array of projects.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Artificial delay added to every in-memory fetch.
    #[serde(default)]
    pub latency_ms: u64,
}

impl StoreConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_greeting() -> String { "Welcome to Project Pulse".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Read the user's config file, writing the defaults there first if it is
    /// missing.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if !path.exists() {
            write_defaults(&path)?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }
        Self::load_from(&path)
    }

    /// Layer `path` over the built-in defaults. A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        layered(Some(path))
            .and_then(config::Config::try_deserialize)
            .with_context(|| format!("invalid config in {}", path.display()))
    }

    /// The built-in defaults alone.
    pub fn defaults() -> Self {
        layered(None)
            .and_then(config::Config::try_deserialize)
            .expect("embedded defaults must deserialize")
    }
}

fn layered(user: Option<&Path>) -> Result<config::Config, config::ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
    if let Some(path) = user {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    builder.build()
}

fn write_defaults(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
        .with_context(|| format!("writing {}", path.display()))
}

/// `$XDG_CONFIG_HOME/pulse/config.toml`, else `~/.config/pulse/config.toml`.
fn config_path() -> PathBuf {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".config"),
    };
    base.join("pulse").join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pulse", about = "Project Pulse: live project search in the terminal")]
struct Cli {
    /// Write debug logs to /tmp/pulse-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Serve projects from a JSON file instead of the built-in sample.
    #[arg(long, value_name = "PATH")]
    projects: Option<PathBuf>,

    /// Simulated retrieval latency for the built-in sample, in milliseconds.
    #[arg(long, value_name = "N")]
    latency_ms: Option<u64>,

    /// Initial view (`/` or `/projects`). Unknown paths open the home view.
    #[arg(long, value_name = "PATH")]
    view: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/pulse-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("pulse debug log started, tail -f /tmp/pulse-debug.log");
    }

    pulse_tui::run(pulse_tui::Options {
        projects: cli.projects,
        latency_ms: cli.latency_ms,
        route: cli.view,
    })
}

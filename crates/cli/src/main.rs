mod clipboard;
mod console;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rarsift_core::{
    load_config_or_default, validate_config, Presenter, Session, SessionOutcome, SqliteCatalog,
};

use clipboard::SystemClipboard;
use console::StdinConsole;
use render::TerminalSink;

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs on stderr, prompts and tables on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::var("RARSIFT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("rarsift.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Catalog path: {:?}", config.catalog.path);
    let catalog = SqliteCatalog::open(&config.catalog.path)
        .with_context(|| format!("Failed to open catalog {:?}", config.catalog.path))?
        .with_namespace(config.catalog.namespace.clone());

    let console = StdinConsole;
    let sink = TerminalSink::new(config.report.path.clone());
    let clipboard = SystemClipboard;

    let outcome = Session::new(&catalog, &console, &sink, &clipboard)
        .with_presenter(Presenter::new(config.report.margin))
        .with_minimal_filters(config.filters.minimal)
        .run()
        .context("Search session failed")?;

    match outcome {
        SessionOutcome::NoResults { term } => info!(term = %term, "Session ended without results"),
        SessionOutcome::Selected { record, copied, .. } => {
            info!(id = record.id, copied, "Session ended with a selection")
        }
    }

    Ok(())
}

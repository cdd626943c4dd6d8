//! Elidune Shelf - personal library catalog for the console

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use elidune_shelf::{
    config::{AppConfig, LoggingConfig},
    console::Console,
    repository::Repository,
    services::Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Elidune Shelf v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Catalog file: {}", config.storage.path.display());

    let repository = Repository::new(config.storage.path.clone());
    let mut services = Services::new(repository, &config.catalog);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = console.run(&mut services.catalog) {
        tracing::error!("Session aborted ({:?}): {}", e.code(), e);
        return Err(e.into());
    }

    tracing::info!("Session finished with {} books", services.catalog.len());
    Ok(())
}

/// Logs go to stderr, or to `logging.file` when set, so they never mix
/// with the menu on stdout.
fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_shelf={}", config.level).into());

    let (writer, guard, ansi) = match &config.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path.file_name().unwrap_or_else(|| "shelf.log".as_ref());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard), false)
        }
        None => (BoxMakeWriter::new(io::stderr), None, true),
    };

    let (json, pretty) = if config.is_json() {
        (Some(fmt::layer().json().with_writer(writer)), None)
    } else {
        (None, Some(fmt::layer().with_ansi(ansi).with_writer(writer)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();

    guard
}

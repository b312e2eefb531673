//! Logging setup using the tracing ecosystem.
//!
//! The library itself only emits `tracing` events; applications embedding
//! it call [`init`] or [`init_with_file`] once to install a subscriber.
//! Levels come from `RUST_LOG`, e.g. `RUST_LOG=jira_client=debug`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "jira_client=info,warn";

/// Base name of the rolling log files.
const LOG_FILE_PREFIX: &str = "jira-client.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
///
/// # Example
///
/// ```no_run
/// jira_client::logging::init().expect("Failed to initialize logging");
/// ```
pub fn init() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(env_filter());

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Install a global subscriber writing to stderr and to a daily rotating
/// file in `log_dir`.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the program.
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be created
/// - A global subscriber is already set
pub fn init_with_file(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(env_filter());

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jira-client logging started");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(guard)
}

/// Platform-specific default log directory, e.g.
/// `~/.local/share/jira-client/logs` on Linux.
pub fn default_log_directory() -> Option<std::path::PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("jira-client").join("logs"))
}

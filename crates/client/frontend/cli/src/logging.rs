//! File-only tracing setup; the terminal belongs to the UI.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "wheel.log";

/// Install the global subscriber writing to `<log dir>/wheel.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the program. `RUST_LOG` adds directives on top of INFO.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // ANSI kept on so `tail -f` shows colours
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    // No stderr layer: it would tear the TUI
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Platform cache directory, e.g. `~/.cache/wheel/logs` on Linux.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "wheel")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("wheel").join("logs"))
}

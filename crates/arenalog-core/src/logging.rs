//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to the user data dir under `arenalog/logs/`.
/// Log level is controlled by the `ARENALOG_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ARENALOG_LOG=debug arenalog --collection
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "arenalog.log");

    // Default to info, allow override via ARENALOG_LOG
    let env_filter = EnvFilter::try_from_env("ARENALOG_LOG").unwrap_or_else(|_| default_filter());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("arenalog starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Default filter when `ARENALOG_LOG` is unset.
///
/// Plain `info` so diagnostics from every workspace crate pass, not just
/// events with an `arenalog`-prefixed target.
fn default_filter() -> EnvFilter {
    EnvFilter::new("info")
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("arenalog").join("logs")
}

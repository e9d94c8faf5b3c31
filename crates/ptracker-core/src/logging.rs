//! Logging configuration using tracing
//!
//! The dashboard owns the terminal, so nothing is written to stdout or
//! stderr. All output goes to a daily rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the default filter
pub const LOG_ENV_VAR: &str = "PTRACKER_LOG";

const LOG_FILE_NAME: &str = "ptracker.log";
const DEFAULT_FILTER: &str = "promise_tracker=info,ptracker=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/promise-tracker/logs/`
/// Log level is controlled by the `PTRACKER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PTRACKER_LOG=debug ptracker
/// PTRACKER_LOG=ptracker_api=trace,info ptracker /politicians
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Promise Tracker starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory holding the rolling log files
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("promise-tracker").join("logs")
}

/// Base path of the current log file (the appender adds a date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

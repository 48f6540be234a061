//! Logging setup
//!
//! Human-readable logs go to stderr (stdout is reserved for tool output) and
//! to a daily-rotated file under the configured log directory.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Keeps the file writer alive; logs are flushed when it is dropped.
pub struct TelemetryGuard {
    _log_guard: WorkerGuard,
}

pub const DEFAULT_FILTER: &str = "mikoko_guardian=info,field_report=info";

pub fn init_telemetry(service_name: &str, log_dir: &Path) -> Result<TelemetryGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, format!("{}.log", service_name));
    let (non_blocking, log_guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(TelemetryGuard { _log_guard: log_guard })
}

//! Tracing setup.
//!
//! The widget owns the terminal, so log output goes to a file through a
//! non-blocking writer. Filter precedence: RUST_LOG > --log-level > info.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "passgen.log";

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<WorkerGuard> {
    let path = log_path(log_file);
    let (dir, file_name) = split_path(&path)?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("passgen={level}")))
        .unwrap_or_else(|_| EnvFilter::new("passgen=info"))
}

fn log_path(log_file: Option<&Path>) -> PathBuf {
    match log_file {
        Some(path) => path.to_path_buf(),
        None => std::env::temp_dir().join(DEFAULT_LOG_FILE),
    }
}

fn split_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path {}", path.display()))?
        .to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

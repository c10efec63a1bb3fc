//! Logging setup for the application.
//!
//! Installs a global tracing subscriber with a stdout layer and a per-launch
//! log file under the app directory. Old launch logs are pruned so the folder
//! stays bounded.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Number of launch log files kept on disk.
const KEEP_LOG_FILES: usize = 8;
const LOG_FILE_PREFIX: &str = "oncoform";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The application directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// A filesystem operation on the log directory failed.
    #[error("Log directory I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The launch timestamp could not be formatted into a filename.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Another subscriber was already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to stdout plus a per-launch log file.
///
/// Subsequent calls are no-ops. Errors are returned so the caller can keep
/// running without file logging.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    let file_name = launch_file_name(OffsetDateTime::now_local().unwrap_or_else(|_| {
        OffsetDateTime::now_utc()
    }))?;
    prune_launch_logs(&log_dir, KEEP_LOG_FILES)?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&log_dir, &file_name));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = local_timer();
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()).with_writer(std::io::stdout))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!(
        "Logging initialized; log file at {}",
        log_dir.join(file_name).display()
    );
    Ok(())
}

fn launch_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}_{}.log", now.format(NAME_FORMAT)?))
}

fn local_timer() -> fmt::time::OffsetTime<&'static [FormatItem<'static>]> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT)
}

/// Delete the oldest launch logs so at most `keep` remain.
fn prune_launch_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let io_err = |path: &Path, source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut logs: Vec<(SystemTime, PathBuf)> = fs::read_dir(dir)
        .map_err(|source| io_err(dir, source))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("log")
        })
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    if logs.len() < keep {
        return Ok(());
    }

    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() + 1 - keep;
    for (_, path) in logs.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|source| io_err(&path, source))?;
    }
    Ok(())
}

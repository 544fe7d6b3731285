use filetemplates_core::config::types::ResolvedConfig;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber: stderr at `logging.level`, plus an optional
/// log file at `logging.file_level`. `RUST_LOG` directives still apply.
///
/// Runs append to the log file, so one file can collect several invocations.
pub fn init(cfg: &ResolvedConfig) -> io::Result<()> {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::WARN);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .without_time()
        .with_filter(filter_at(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.logging.file.as_deref() else {
        registry.init();
        return Ok(());
    };

    let file_level = cfg
        .logging
        .file_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(stderr_level);

    let file_layer = fmt::layer()
        .with_writer(open_log_file(path)?)
        .with_ansi(false)
        .with_filter(filter_at(file_level));

    registry.with(file_layer).init();
    Ok(())
}

fn filter_at(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Open `path` for appending and park the writer guard until [`flush`].
fn open_log_file(path: &Path) -> io::Result<NonBlocking> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }
    Ok(writer)
}

/// Flush the file logger; `process::exit` skips destructors.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        drop(g.take());
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

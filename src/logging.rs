//! Structured JSONL logging to a file and terse warnings on stderr.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (`<cache dir>/wmenu/wmenu.jsonl`) - every event at the `RUST_LOG` level
//! - **Compact to stderr** - warnings and errors only, so the menu drawn on the
//!   alternate screen is not overwritten
//!
//! # Usage
//!
//! ```rust,ignore
//! use wmenu::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "items_loaded", count = 42, "Items loaded");
//! ```
//!
//! # JSONL Output Format
//!
//! Each line is a valid JSON object:
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"wmenu::picker","fields":{"message":"Picker ready","event_type":"session_start","items":6}}
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "wmenu.jsonl";
const DEFAULT_FILTER: &str = "info";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// If the log file cannot be opened only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    let log_path = log_path();
    let file = match open_log_file(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("wmenu: cannot open log file {}: {}", log_path.display(), e);
            None
        }
    };

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (json_layer, file_guard) = match file {
        Some(file) => {
            // Non-blocking writer for the file
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .with_filter(env_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .without_time()
        .compact()
        .with_filter(LevelFilter::WARN);

    let installed = tracing_subscriber::registry()
        .with(json_layer)
        .with(stderr_layer)
        .try_init();
    if installed.is_err() {
        eprintln!("wmenu: a global tracing subscriber is already installed");
    }

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Get the log directory path (`<cache dir>/wmenu`)
fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("wmenu"))
        .unwrap_or_else(|| std::env::temp_dir().join("wmenu-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

use thiserror::Error;
use tracing::warn;

/// How a failure should be reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,  // nothing to do, e.g. an empty input
    Error,    // operation failed
    Critical, // the session cannot run at all
}

/// Domain-specific errors for wmenu
#[derive(Error, Debug)]
pub enum WmenuError {
    #[error("No items passed to wmenu")]
    EmptyStore,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read items from {origin}: {source}")]
    ItemsRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stderr is not an interactive terminal")]
    NotATerminal,

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl WmenuError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyStore => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Error,
            Self::ConfigParse { .. } => ErrorSeverity::Error,
            Self::ConfigRead { .. } => ErrorSeverity::Error,
            Self::ItemsRead { .. } => ErrorSeverity::Critical,
            Self::NotATerminal => ErrorSeverity::Critical,
            Self::Terminal(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyStore => "Nothing to pick from: no items were loaded".to_string(),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::ConfigParse { path, source } => {
                format!("Config file {} is not valid JSON: {}", path, source)
            }
            Self::ConfigRead { path, .. } => format!("Could not read config file {}", path),
            Self::ItemsRead { origin, .. } => format!("Could not read items from {}", origin),
            Self::NotATerminal => "wmenu must be run from an interactive terminal".to_string(),
            Self::Terminal(e) => format!("Terminal unavailable: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, WmenuError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use wmenu::error::ResultExt;
///
/// // Terminal restore failures must not mask the selection
/// restore_terminal().warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

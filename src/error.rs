//! Error types for the container shell.
//!
//! Errors fall into two tiers:
//! - [`ShellError`] is fatal and only produced while the host starts up
//! - [`ActionError`] is recoverable and never escapes an action handler

use std::path::PathBuf;
use thiserror::Error;

use crate::features::FeatureKind;

/// Fatal startup failure. The process cannot run without logging or a window.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The log directory could not be created.
    #[error("failed to create log directory {}: {source}", .path.display())]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rolling file appender rejected its configuration.
    #[error("failed to initialise log appender: {0}")]
    LogAppender(#[from] tracing_appender::rolling::InitError),

    /// The host was asked for a window after it had been stopped.
    #[error("application host is not running")]
    HostStopped,
}

/// Failure inside a single action handler.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The feature has no handler bound in this build.
    #[error("{0} is not available in this build")]
    NotImplemented(FeatureKind),

    /// Building the summary text failed.
    #[error("failed to format {what}: {source}")]
    Format {
        what: &'static str,
        #[source]
        source: std::fmt::Error,
    },

    /// The handler reported a failure of its own.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    /// Convenience constructor for handler-reported failures.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

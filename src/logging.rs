//! Explicit logging handle.
//!
//! The shell never installs a global subscriber. A [`Logger`] owns a
//! `tracing::Dispatch` and, for file sinks, the non-blocking worker guard. It is
//! built once by the host and handed to every component as `Arc<Logger>`;
//! components emit events with the regular `tracing` macros inside
//! [`Logger::scope`].

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogConfig;
use crate::error::ShellError;

/// Process-wide logging handle with single-sink semantics.
pub struct Logger {
    dispatch: Dispatch,
    /// Present for file sinks until the logger is shut down
    guard: Mutex<Option<WorkerGuard>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("file_sink_open", &!self.is_shut_down())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger writing to a daily-rolled file under `config.directory`.
    ///
    /// One file is produced per calendar day, named `<prefix>.<YYYY-MM-DD>.log`.
    pub fn to_daily_file(config: &LogConfig) -> Result<Self, ShellError> {
        std::fs::create_dir_all(&config.directory).map_err(|source| ShellError::LogDirectory {
            path: config.directory.clone(),
            source,
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(config.file_prefix.as_str())
            .filename_suffix("log")
            .build(&config.directory)?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let mut logger = Self::with_writer(writer, config.level);
        logger.guard = Mutex::new(Some(guard));
        Ok(logger)
    }

    /// Creates a logger over any writer factory. Used for in-memory sinks.
    pub fn with_writer<W>(make_writer: W, level: tracing::Level) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .with_ansi(false)
            .with_target(true)
            .with_max_level(level)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
            guard: Mutex::new(None),
        }
    }

    /// Runs `f` with this logger as the current subscriber.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Flushes buffered entries and closes the file sink.
    ///
    /// Safe to call more than once. Events emitted afterwards are discarded.
    pub fn shutdown(&self) {
        let guard = match self.guard.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        // Dropping the guard blocks until the worker has drained its queue.
        drop(guard);
    }

    fn is_shut_down(&self) -> bool {
        self.guard
            .lock()
            .map(|slot| slot.is_none())
            .unwrap_or(true)
    }
}

/// In-memory log sink. Every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as text.
    pub fn contents(&self) -> String {
        let buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Builds a logger that writes into this sink.
    pub fn logger(&self, level: tracing::Level) -> Logger {
        let sink = self.clone();
        Logger::with_writer(move || sink.clone(), level)
    }
}

impl io::Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
        buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_routes_events_to_handle() {
        let sink = MemorySink::new();
        let logger = sink.logger(tracing::Level::INFO);

        logger.scope(|| tracing::info!(component = "test", "hello from the shell"));

        let contents = sink.contents();
        assert!(contents.contains("hello from the shell"));
        assert!(contents.contains("INFO"));
    }

    #[test]
    fn test_events_outside_scope_are_not_captured() {
        let sink = MemorySink::new();
        let _logger = sink.logger(tracing::Level::INFO);

        tracing::info!("nobody is listening");

        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_level_filter() {
        let sink = MemorySink::new();
        let logger = sink.logger(tracing::Level::WARN);

        logger.scope(|| {
            tracing::info!("filtered out");
            tracing::warn!("kept");
        });

        let contents = sink.contents();
        assert!(!contents.contains("filtered out"));
        assert!(contents.contains("kept"));
    }

    #[test]
    fn test_daily_file_is_flushed_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            directory: dir.path().join("logs"),
            file_prefix: "unit".to_string(),
            level: tracing::Level::INFO,
        };

        let logger = Logger::to_daily_file(&config).unwrap();
        logger.scope(|| tracing::info!("written to disk"));
        logger.shutdown();
        logger.shutdown();

        let entries: Vec<_> = std::fs::read_dir(&config.directory)
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(entries.len(), 1);

        let name = entries[0].file_name().to_string_lossy().into_owned();
        assert!(name.starts_with("unit."));
        assert!(name.ends_with(".log"));

        let text = std::fs::read_to_string(entries[0].path()).unwrap();
        assert!(text.contains("written to disk"));
    }
}

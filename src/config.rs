//! Startup configuration for the container shell.
//!
//! There is no configuration file. Defaults are fixed in code and only the
//! log level can be overridden through the `AIENV_LOG` environment variable.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable selecting the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "AIENV_LOG";

/// Logger sink configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rolled log files, relative to the working directory
    pub directory: PathBuf,
    /// File name prefix; the appender adds the date and `.log`
    pub file_prefix: String,
    /// Maximum level written to the sink
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_prefix: "aienv-container".to_string(),
            level: tracing::Level::INFO,
        }
    }
}

/// Top-level window settings.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "AIEnv Integrated Container".to_string(),
            inner_size: [1200.0, 800.0],
        }
    }
}

/// Complete shell configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub log: LogConfig,
    pub window: WindowConfig,
    /// Period of the clock refresh timer
    pub clock_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            window: WindowConfig::default(),
            clock_interval: Duration::from_secs(1),
        }
    }
}

impl ShellConfig {
    /// Builds the default configuration, taking the log level from `AIENV_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(level) = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref()) {
            config.log.level = level;
        }
        config
    }
}

/// Parses a log level name case-insensitively. Unknown or missing values yield `None`.
pub fn parse_level(value: Option<&str>) -> Option<tracing::Level> {
    value.and_then(|v| v.trim().parse::<tracing::Level>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.log.directory, PathBuf::from("logs"));
        assert_eq!(config.log.file_prefix, "aienv-container");
        assert_eq!(config.log.level, tracing::Level::INFO);
        assert_eq!(config.clock_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Some(tracing::Level::DEBUG));
        assert_eq!(parse_level(Some("WARN")), Some(tracing::Level::WARN));
        assert_eq!(parse_level(Some("loud")), None);
        assert_eq!(parse_level(None), None);
    }
}

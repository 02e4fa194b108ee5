use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter {directive:?}: {reason}")]
    FilterError { directive: String, reason: String },
    #[error("could not install logger: {0}")]
    InstallError(String),
}

/// Where log events go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The TUI owns the terminal, so it only ever logs to a file.
    pub fn for_tui(config: &LogConfig) -> Self {
        match &config.file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Off,
        }
    }

    pub fn for_cli(config: &LogConfig) -> Self {
        match &config.file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Stderr,
        }
    }
}

/// Filter priority: `RUST_LOG`, then `-v`, then the configured level.
pub fn build_filter(config: &LogConfig, verbose: bool) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = if verbose { "debug" } else { config.level.as_str() };
    parse_filter(directive)
}

pub fn parse_filter(directive: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(directive).map_err(|e| LogError::FilterError {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
pub fn init_logging(target: LogTarget, filter: EnvFilter) -> Result<(), LogError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| LogError::OpenError { path, source: e })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| LogError::InstallError(e.to_string()))
}

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Configuration from tally.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Ask for y/n before deleting an item
    #[serde(default)]
    pub confirm_delete: bool,
    /// Hex overrides for theme slots, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            confirm_delete: false,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log file. The TUI never logs to the terminal it draws on, so without
    /// a file it does not log at all.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// A `tracing` filter directive such as `warn` or `tally=debug`
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

use crate::config::{default_log_filter, default_log_to_file};

use serde::{Deserialize, Serialize};

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Write to a daily log file instead of stderr.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,

    /// Emit JSON lines instead of plain text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            log_to_file: default_log_to_file(),
            json: false,
        }
    }
}

use crate::config::{default_confirm_power_actions, default_refresh_interval_ms};

use serde::{Deserialize, Serialize};

/// Tray behaviour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Tooltip refresh period in milliseconds.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Ask before shutdown, restart and lock.
    #[serde(default = "default_confirm_power_actions")]
    pub confirm_power_actions: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            confirm_power_actions: default_confirm_power_actions(),
        }
    }
}

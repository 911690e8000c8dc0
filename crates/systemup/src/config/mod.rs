mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod logging_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, logging_config::LoggingConfig,
};

pub(crate) const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1_000;
pub(crate) const MIN_REFRESH_INTERVAL_MS: u64 = 100;
pub(crate) const DEFAULT_CONFIRM_POWER_ACTIONS: bool = true;
pub(crate) const DEFAULT_LOG_FILTER: &str = "systemup=info,systemup_core=info";
pub(crate) const DEFAULT_LOG_TO_FILE: bool = true;

pub(crate) fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

pub(crate) fn default_confirm_power_actions() -> bool {
    DEFAULT_CONFIRM_POWER_ACTIONS
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_to_file() -> bool {
    DEFAULT_LOG_TO_FILE
}

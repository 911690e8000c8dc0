//! SystemUP!: machine uptime in the Windows system tray, with a fast startup
//! toggle and shutdown, restart and lock actions.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

#[cfg(target_os = "windows")]
mod app;
#[cfg(target_os = "windows")]
mod clock;
mod config;
mod error;
mod icon_theme;
mod logging;
#[cfg(target_os = "windows")]
mod message_box;
#[cfg(target_os = "windows")]
mod power;
#[cfg(target_os = "windows")]
mod registry;
#[cfg(target_os = "windows")]
mod tray_manager;
#[cfg(target_os = "windows")]
mod user_event;

pub(crate) use {
    error::{AppError, Result as AppResult},
    icon_theme::IconTheme,
};

#[cfg(target_os = "windows")]
pub(crate) use {tray_manager::TrayManager, user_event::UserEvent};

use crate::config::Config;

use tracing::warn;

/// Application entry point.
fn main() {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_guard = logging::init(&config.logging);

    if let Some(e) = config_error {
        warn!(error = %e, "Invalid configuration, using defaults");
    }

    run(config, log_guard);
}

#[cfg(target_os = "windows")]
fn run(config: Config, log_guard: Option<tracing_appender::non_blocking::WorkerGuard>) {
    app::run(config, log_guard)
}

#[cfg(not(target_os = "windows"))]
fn run(_config: Config, _log_guard: Option<tracing_appender::non_blocking::WorkerGuard>) {
    tracing::error!("SystemUP! needs the Windows notification area and cannot run on this platform");
}

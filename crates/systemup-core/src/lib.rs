//! SystemUP! core library
//!
//! The tray session state machine behind the SystemUP! uptime tray utility:
//! uptime formatting, the fast startup setting, the contextual menu model and
//! the action dispatcher. Everything OS-facing sits behind the traits in
//! [`shell`] and [`PowerRegistry`], so sessions can be driven in tests
//! without a desktop.
//!
//! # Example
//!
//! ```no_run
//! use systemup_core::{PowerRegistry, PowerSettingStore, SessionEvent, TraySession, UptimeClock};
//!
//! struct Clock;
//!
//! impl UptimeClock for Clock {
//!     fn millis_since_boot(&self) -> u64 {
//!         90_061_000
//!     }
//! }
//!
//! fn tick<R: PowerRegistry>(registry: R) {
//!     let mut session = TraySession::new(PowerSettingStore::new(registry), Clock);
//!     let effect = session.handle(SessionEvent::Tick);
//!     println!("{:?}", effect);
//! }
//! ```

mod controller;
mod dispatcher;
mod error;
mod menu;
mod power_setting;
mod session;
pub mod shell;
mod uptime;

pub use {
    controller::SessionController,
    dispatcher::{ActionDispatcher, Flow},
    error::{CoreError, Result as CoreResult},
    menu::{APP_TITLE, MenuAction, MenuEntry, MenuModel, about_line},
    power_setting::{
        HIBERBOOT_VALUE, HIBERNATE_VALUE, POWER_KEY_PATH, PowerRegistry, PowerSettingStore,
    },
    session::{
        Effect, Lifecycle, MAX_TOOLTIP_CHARS, PLACEHOLDER_TOOLTIP, PointerKind, SessionEvent,
        TraySession, TraySessionState,
    },
    shell::{
        Notice, NoticeLevel, PowerControl, PrivilegeElevator, Prompter, ScreenPoint, TrayShell,
    },
    uptime::{Uptime, UptimeClock},
};

#[cfg(test)]
mod tests;

//! OS-facing collaborators of the session.
//!
//! Every call here runs on the event-loop thread. `present_menu` and the
//! prompter methods block that thread until the user responds; nothing else
//! is processed in the meantime.

use crate::{CoreResult, MenuModel};

/// Screen coordinates in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The notification-area icon owned by the session.
pub trait TrayShell {
    /// Replace the icon's tooltip.
    fn set_tooltip(&mut self, text: &str) -> CoreResult<()>;

    /// Show `model` as a popup menu anchored at `anchor`.
    ///
    /// Blocks until the user picks a line or dismisses the menu. The chosen
    /// action comes back later as a command event.
    fn present_menu(&mut self, model: &MenuModel, anchor: ScreenPoint) -> CoreResult<()>;
}

/// Severity of a modal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Something degraded but the session continues.
    Warning,
    /// An action failed.
    Error,
}

/// A single modal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity, picks the dialog icon.
    pub level: NoticeLevel,
    /// Dialog caption.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Notice {
    /// An informational notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// A warning notice.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Blocking modal dialogs.
pub trait Prompter {
    /// Ask a yes/no question. `true` only on an explicit yes.
    fn confirm(&mut self, title: &str, question: &str) -> bool;

    /// Show a message and wait for it to be acknowledged.
    fn notify(&mut self, notice: &Notice);
}

/// Machine power transitions and session lock.
pub trait PowerControl {
    /// Shut the machine down, forcing hung applications to close.
    fn power_off(&mut self) -> CoreResult<()>;

    /// Reboot the machine, forcing hung applications to close.
    fn restart(&mut self) -> CoreResult<()>;

    /// Lock the interactive session.
    fn lock(&mut self) -> CoreResult<()>;
}

/// Grants the process the right to shut the machine down.
pub trait PrivilegeElevator {
    /// Enable the shutdown privilege on the process token.
    fn enable_shutdown_privilege(&mut self) -> CoreResult<()>;
}

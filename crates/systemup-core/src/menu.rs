//! Contextual tray menu model.
//!
//! The model is rebuilt from session state each time the menu opens and is
//! dropped once the menu closes. Presenting it is the tray shell's job.

use crate::TraySessionState;

/// Application name shown in the tooltip placeholder and the menu title.
pub const APP_TITLE: &str = "SystemUP! - Uptime in Tray";

const APP_AUTHOR: &str = "h4rl";

/// Title line shared by the menu and the info dialog.
pub fn about_line() -> String {
    format!(
        "{} v{} by {}",
        APP_TITLE,
        env!("CARGO_PKG_VERSION"),
        APP_AUTHOR
    )
}

/// Selectable menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Title line; shows the info dialog.
    Info,
    /// Live uptime line; shows the info dialog.
    Uptime,
    /// Flip the fast startup setting.
    ToggleFastStartup,
    /// Power off the machine.
    Shutdown,
    /// Reboot the machine.
    Restart,
    /// Lock the user session.
    Lock,
    /// Quit the tray application.
    Exit,
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Info,
        MenuAction::Uptime,
        MenuAction::ToggleFastStartup,
        MenuAction::Shutdown,
        MenuAction::Restart,
        MenuAction::Lock,
        MenuAction::Exit,
    ];

    /// Stable identifier used to route menu selections back to the session.
    pub fn id(self) -> &'static str {
        match self {
            MenuAction::Info => "info",
            MenuAction::Uptime => "uptime",
            MenuAction::ToggleFastStartup => "toggle-fast-startup",
            MenuAction::Shutdown => "shutdown",
            MenuAction::Restart => "restart",
            MenuAction::Lock => "lock",
            MenuAction::Exit => "exit",
        }
    }

    /// Inverse of [`MenuAction::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// One line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A labelled, selectable line.
    Action {
        /// Command sent back when the line is chosen.
        action: MenuAction,
        /// Text shown to the user.
        label: String,
    },
    /// Horizontal divider.
    Separator,
}

/// Ordered menu lines for a single menu-open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    /// Build the menu for the current session state.
    pub fn build(state: &TraySessionState) -> Self {
        let toggle_label = if state.fast_startup_enabled() {
            "Fast Startup is: Enabled (click to disable)"
        } else {
            "Fast Startup is: Disabled (click to enable)"
        };

        let entries = vec![
            action(MenuAction::Info, about_line()),
            action(MenuAction::Uptime, state.tooltip()),
            MenuEntry::Separator,
            action(MenuAction::ToggleFastStartup, toggle_label),
            MenuEntry::Separator,
            action(MenuAction::Shutdown, "Shutdown Computer"),
            action(MenuAction::Restart, "Restart Computer"),
            action(MenuAction::Lock, "Lock Computer"),
            MenuEntry::Separator,
            action(MenuAction::Exit, "Exit"),
        ];

        Self { entries }
    }

    /// All lines in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The selectable actions in display order.
    pub fn actions(&self) -> impl Iterator<Item = MenuAction> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Action { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        })
    }

    /// Label of the line carrying `action`, if present.
    pub fn label_of(&self, action: MenuAction) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Action { action: a, label } if *a == action => Some(label.as_str()),
            _ => None,
        })
    }
}

fn action(action: MenuAction, label: impl Into<String>) -> MenuEntry {
    MenuEntry::Action {
        action,
        label: label.into(),
    }
}

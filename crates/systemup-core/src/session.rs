//! Tray session state machine.
//!
//! All input reaches the session as a [`SessionEvent`]. Handling an event
//! updates the owned state and returns one [`Effect`] for the caller to carry
//! out against the OS. The session never touches the tray itself.

use crate::{
    CoreResult, MenuAction, MenuModel, PowerRegistry, PowerSettingStore, ScreenPoint, Uptime,
    UptimeClock, menu::{APP_TITLE, about_line},
};

use tracing::{debug, instrument};

/// Tooltip shown before the first refresh.
pub const PLACEHOLDER_TOOLTIP: &str = APP_TITLE;

/// Longest tooltip the notification area accepts, in characters.
pub const MAX_TOOLTIP_CHARS: usize = 127;

/// Pointer activity reported by the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Cursor moved over the icon.
    Hover,
    /// Left button released on the icon.
    PrimaryClick,
    /// Right button released on the icon.
    SecondaryClick,
}

/// Process lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// The event loop is running and the tray icon exists.
    Started,
    /// The owning window was destroyed.
    Destroyed,
}

/// Everything the event loop can deliver to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Pointer activity on the tray icon.
    Pointer {
        /// What the pointer did.
        kind: PointerKind,
        /// Where it happened.
        at: ScreenPoint,
    },
    /// Periodic refresh timer fired.
    Tick,
    /// A menu line was chosen.
    Command(MenuAction),
    /// Lifecycle change.
    Lifecycle(Lifecycle),
}

/// Side effect requested by the session after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push a new tooltip to the tray icon.
    SetTooltip(String),
    /// Open the contextual menu.
    OpenMenu {
        /// Freshly built menu.
        model: MenuModel,
        /// Pointer location to anchor the menu at.
        anchor: ScreenPoint,
    },
    /// Carry out a menu command.
    Perform(MenuAction),
    /// Leave the event loop.
    Quit,
}

/// Observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraySessionState {
    tooltip: String,
    fast_startup_enabled: bool,
}

impl TraySessionState {
    /// State with the given tooltip and cached setting.
    pub fn new(tooltip: impl Into<String>, fast_startup_enabled: bool) -> Self {
        Self {
            tooltip: bound_tooltip(tooltip.into()),
            fast_startup_enabled,
        }
    }

    /// Current tooltip text.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Cached fast startup flag. The registry may differ by up to one tick.
    pub fn fast_startup_enabled(&self) -> bool {
        self.fast_startup_enabled
    }
}

/// The live tray session: tooltip, cached setting and their sources.
pub struct TraySession<R, C> {
    state: TraySessionState,
    store: PowerSettingStore<R>,
    clock: C,
}

impl<R: PowerRegistry, C: UptimeClock> TraySession<R, C> {
    /// Start a session with the placeholder tooltip and a freshly read cache.
    pub fn new(store: PowerSettingStore<R>, clock: C) -> Self {
        let fast_startup_enabled = store.is_fast_startup_enabled();
        Self {
            state: TraySessionState::new(PLACEHOLDER_TOOLTIP, fast_startup_enabled),
            store,
            clock,
        }
    }

    /// Current state.
    pub fn state(&self) -> &TraySessionState {
        &self.state
    }

    /// Borrow the power setting store.
    pub fn store(&self) -> &PowerSettingStore<R> {
        &self.store
    }

    /// Mutably borrow the power setting store. The cache catches up on the next refresh.
    pub fn store_mut(&mut self) -> &mut PowerSettingStore<R> {
        &mut self.store
    }

    /// Handle one event and return the effect to apply.
    #[instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: SessionEvent) -> Effect {
        match event {
            SessionEvent::Tick => self.on_tick(),
            SessionEvent::Pointer { kind, at } => self.on_pointer(kind, at),
            SessionEvent::Command(action) => Effect::Perform(action),
            SessionEvent::Lifecycle(Lifecycle::Started) => self.on_tick(),
            SessionEvent::Lifecycle(Lifecycle::Destroyed) => Effect::Quit,
        }
    }

    /// Recompute the tooltip and re-read the cached setting.
    pub fn on_tick(&mut self) -> Effect {
        Effect::SetTooltip(self.refresh().to_string())
    }

    /// React to pointer activity on the tray icon.
    pub fn on_pointer(&mut self, kind: PointerKind, at: ScreenPoint) -> Effect {
        match kind {
            PointerKind::Hover => self.on_tick(),
            PointerKind::PrimaryClick | PointerKind::SecondaryClick => {
                self.refresh();
                Effect::OpenMenu {
                    model: MenuModel::build(&self.state),
                    anchor: at,
                }
            }
        }
    }

    /// Bring tooltip and cache up to date and return the new tooltip.
    pub fn refresh(&mut self) -> &str {
        let uptime = Uptime::from_millis(self.clock.millis_since_boot());
        self.state.tooltip = bound_tooltip(uptime.to_string());

        let enabled = self.store.is_fast_startup_enabled();
        if enabled != self.state.fast_startup_enabled {
            debug!(enabled, "Fast startup changed outside the session");
        }
        self.state.fast_startup_enabled = enabled;

        &self.state.tooltip
    }

    /// Flip fast startup in the registry. The cache follows only on success.
    #[track_caller]
    pub fn toggle_fast_startup(&mut self) -> CoreResult<bool> {
        let enabled = self.store.toggle_fast_startup()?;
        self.state.fast_startup_enabled = enabled;
        Ok(enabled)
    }

    /// Text of the info dialog: title line plus the current tooltip.
    pub fn info_message(&self) -> String {
        format!("{}\n{}", about_line(), self.state.tooltip)
    }
}

fn bound_tooltip(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(MAX_TOOLTIP_CHARS) {
        text.truncate(cut);
    }
    text
}

//! Terminal menu actions.
//!
//! Each action is stateless given the session: destructive ones ask first,
//! failures are shown once in a modal notice and never retried.

use crate::{
    CoreError, MenuAction, Notice, PowerControl, PowerRegistry, Prompter, TraySession,
    UptimeClock, menu::APP_TITLE,
};

use tracing::{error, info, instrument, warn};

const INFO_TITLE: &str = "SystemUP Info";
const ERROR_TITLE: &str = "Error";

/// Whether the event loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Tear down the tray icon and leave the loop.
    Exit,
}

/// A confirmable power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PowerRequest {
    Shutdown,
    Restart,
    Lock,
}

impl PowerRequest {
    fn label(self) -> &'static str {
        match self {
            PowerRequest::Shutdown => "Shutdown",
            PowerRequest::Restart => "Restart",
            PowerRequest::Lock => "Lock",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PowerRequest::Shutdown => "Confirm Shutdown",
            PowerRequest::Restart => "Confirm Restart",
            PowerRequest::Lock => "Confirm Lock",
        }
    }

    fn question(self) -> &'static str {
        match self {
            PowerRequest::Shutdown => "Are you sure you want to shutdown the computer?",
            PowerRequest::Restart => "Are you sure you want to restart the computer?",
            PowerRequest::Lock => "Are you sure you want to lock the computer?",
        }
    }
}

/// Executes menu commands against the session and the OS.
pub struct ActionDispatcher<P, W> {
    prompter: P,
    power: W,
    confirm_power_actions: bool,
}

impl<P: Prompter, W: PowerControl> ActionDispatcher<P, W> {
    /// Dispatcher that confirms every power action.
    pub fn new(prompter: P, power: W) -> Self {
        Self {
            prompter,
            power,
            confirm_power_actions: true,
        }
    }

    /// Turn the shutdown/restart/lock confirmation on or off.
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_power_actions = confirm;
        self
    }

    /// Borrow the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Borrow the power control.
    pub fn power(&self) -> &W {
        &self.power
    }

    /// Carry out `action`.
    #[instrument(skip(self, session))]
    pub fn dispatch<R: PowerRegistry, C: UptimeClock>(
        &mut self,
        action: MenuAction,
        session: &mut TraySession<R, C>,
    ) -> Flow {
        match action {
            MenuAction::ToggleFastStartup => self.toggle_fast_startup(session),
            MenuAction::Shutdown => self.power_transition(PowerRequest::Shutdown),
            MenuAction::Restart => self.power_transition(PowerRequest::Restart),
            MenuAction::Lock => self.power_transition(PowerRequest::Lock),
            MenuAction::Info | MenuAction::Uptime => {
                self.prompter
                    .notify(&Notice::info(INFO_TITLE, session.info_message()));
            }
            MenuAction::Exit => {
                info!("Exit requested from tray menu");
                return Flow::Exit;
            }
        }

        Flow::Continue
    }

    /// Report a failed privilege request. Called once at launch.
    pub fn report_privilege_failure(&mut self, err: &CoreError) {
        warn!(error = %err, "Shutdown privilege not granted");
        self.prompter.notify(&Notice::error(
            ERROR_TITLE,
            "Failed to enable shutdown privileges. Some features may not work.",
        ));
    }

    fn toggle_fast_startup<R: PowerRegistry, C: UptimeClock>(
        &mut self,
        session: &mut TraySession<R, C>,
    ) {
        match session.toggle_fast_startup() {
            Ok(enabled) => info!(enabled, "Fast startup setting changed"),
            Err(e @ CoreError::PartialDisable { .. }) => {
                error!(error = %e, "Fast startup toggle partially applied");
                self.prompter.notify(&Notice::error(
                    ERROR_TITLE,
                    "Fast Startup was disabled but HibernateEnabled could not be cleared.",
                ));
            }
            Err(e) => {
                error!(error = %e, "Fast startup toggle failed");
                self.prompter.notify(&Notice::error(
                    ERROR_TITLE,
                    format!("Failed to toggle Fast Startup.\n{}", toggle_hint(&e)),
                ));
            }
        }
    }

    fn power_transition(&mut self, request: PowerRequest) {
        if self.confirm_power_actions && !self.prompter.confirm(request.title(), request.question())
        {
            info!(?request, "Power action declined");
            return;
        }

        let result = match request {
            PowerRequest::Shutdown => self.power.power_off(),
            PowerRequest::Restart => self.power.restart(),
            PowerRequest::Lock => self.power.lock(),
        };

        match result {
            Ok(()) => info!(?request, "Power action requested"),
            Err(e) => {
                error!(?request, error = %e, "Power action failed");
                self.prompter
                    .notify(&Notice::error(APP_TITLE, format!("{} failed.", request.label())));
            }
        }
    }
}

fn toggle_hint(err: &CoreError) -> &'static str {
    match err {
        CoreError::RegistryWrite { source, .. }
            if source.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            "Run SystemUP! as administrator to change this setting."
        }
        _ => "The power settings registry key could not be written.",
    }
}

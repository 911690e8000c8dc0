use crate::{
    ActionDispatcher, Effect, Flow, Lifecycle, PowerControl, PowerRegistry, PrivilegeElevator,
    Prompter, SessionEvent, TrayShell, TraySession, UptimeClock,
};

use tracing::{info, instrument, warn};

/// Routes events through the session and applies the resulting effects.
///
/// Owns the tray shell, so dropping the controller removes the icon.
pub struct SessionController<R, C, T, P, W> {
    session: TraySession<R, C>,
    shell: T,
    dispatcher: ActionDispatcher<P, W>,
}

impl<R, C, T, P, W> SessionController<R, C, T, P, W>
where
    R: PowerRegistry,
    C: UptimeClock,
    T: TrayShell,
    P: Prompter,
    W: PowerControl,
{
    /// Assemble a controller from its parts.
    pub fn new(session: TraySession<R, C>, shell: T, dispatcher: ActionDispatcher<P, W>) -> Self {
        Self {
            session,
            shell,
            dispatcher,
        }
    }

    /// First refresh, then the one-time privilege request.
    #[instrument(skip_all)]
    pub fn start(&mut self, elevator: &mut impl PrivilegeElevator) -> Flow {
        let flow = self.handle(SessionEvent::Lifecycle(Lifecycle::Started));

        if let Err(e) = elevator.enable_shutdown_privilege() {
            self.dispatcher.report_privilege_failure(&e);
        }

        info!("Tray session started");
        flow
    }

    /// Handle one event from the loop.
    pub fn handle(&mut self, event: SessionEvent) -> Flow {
        match self.session.handle(event) {
            Effect::SetTooltip(text) => {
                if let Err(e) = self.shell.set_tooltip(&text) {
                    warn!(error = %e, "Failed to update tray tooltip");
                }
                Flow::Continue
            }
            Effect::OpenMenu { model, anchor } => {
                if let Err(e) = self.shell.present_menu(&model, anchor) {
                    warn!(error = %e, "Failed to show tray menu");
                }
                Flow::Continue
            }
            Effect::Perform(action) => self.dispatcher.dispatch(action, &mut self.session),
            Effect::Quit => Flow::Exit,
        }
    }

    /// Borrow the session.
    pub fn session(&self) -> &TraySession<R, C> {
        &self.session
    }

    /// Borrow the tray shell.
    pub fn shell(&self) -> &T {
        &self.shell
    }

    /// Borrow the dispatcher.
    pub fn dispatcher(&self) -> &ActionDispatcher<P, W> {
        &self.dispatcher
    }
}

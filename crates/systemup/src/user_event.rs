use systemup_core::{MenuAction, PointerKind, ScreenPoint, SessionEvent};

use tray_icon::{
    MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent, menu::dpi::PhysicalPosition,
};

/// Events forwarded from the tray-icon handlers into the tao event loop.
///
/// The handlers fire inside the shell's window procedure; routing them
/// through the loop keeps every session mutation on one thread, in order.
#[derive(Debug)]
pub enum UserEvent {
    /// Pointer activity on the tray icon.
    Tray(TrayIconEvent),
    /// A line of the popup menu was chosen.
    Menu(MenuEvent),
}

impl UserEvent {
    /// Translate into a session event. Irrelevant pointer activity maps to `None`.
    pub fn into_session_event(self) -> Option<SessionEvent> {
        match self {
            UserEvent::Tray(event) => pointer_event(event),
            UserEvent::Menu(event) => MenuAction::from_id(&event.id.0).map(SessionEvent::Command),
        }
    }
}

fn pointer_event(event: TrayIconEvent) -> Option<SessionEvent> {
    match event {
        TrayIconEvent::Click {
            button,
            button_state: MouseButtonState::Up,
            position,
            ..
        } => {
            let kind = match button {
                MouseButton::Left => PointerKind::PrimaryClick,
                MouseButton::Right => PointerKind::SecondaryClick,
                _ => return None,
            };
            Some(SessionEvent::Pointer {
                kind,
                at: screen_point(position),
            })
        }
        TrayIconEvent::Enter { position, .. } | TrayIconEvent::Move { position, .. } => {
            Some(SessionEvent::Pointer {
                kind: PointerKind::Hover,
                at: screen_point(position),
            })
        }
        _ => None,
    }
}

fn screen_point(position: PhysicalPosition<f64>) -> ScreenPoint {
    ScreenPoint::new(position.x.round() as i32, position.y.round() as i32)
}

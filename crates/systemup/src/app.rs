//! tao event loop driving the tray session.
//!
//! Everything runs on the main thread: tray pointer events and menu picks are
//! forwarded into the loop as user events, the refresh timer is the loop's
//! own wake-up deadline. Modal dialogs and the popup menu block the loop;
//! a deadline that passes meanwhile fires once afterwards, missed ticks are
//! not replayed.

use crate::{
    AppError, AppResult, IconTheme, TrayManager, UserEvent,
    clock::TickCountClock,
    config::Config,
    message_box::MessageBoxPrompter,
    power::{TokenPrivilegeElevator, WinPowerControl},
    registry::{WinPowerRegistry, apps_use_dark_theme},
};

use systemup_core::{
    ActionDispatcher, Flow, Lifecycle, PowerSettingStore, SessionController, SessionEvent,
    TraySession,
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
    platform::windows::WindowExtWindows,
    window::{Window, WindowBuilder},
};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

type WinController = SessionController<
    WinPowerRegistry,
    TickCountClock,
    TrayManager,
    MessageBoxPrompter,
    WinPowerControl,
>;

/// Build the session and run the event loop until exit.
pub(crate) fn run(config: Config, log_guard: Option<WorkerGuard>) -> ! {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Tray(event));
    }));

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let window = match hidden_window(&event_loop) {
        Ok(window) => window,
        Err(e) => {
            error!("Failed to create event loop window: {:?}", e);
            drop(log_guard);
            std::process::exit(1);
        }
    };
    let owner = window.hwnd();

    // TrayManager lives on the main thread - TrayIcon is !Send.
    let tray_manager = match TrayManager::new(owner, IconTheme::for_taskbar(apps_use_dark_theme()))
    {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            drop(log_guard);
            std::process::exit(1);
        }
    };

    let session = TraySession::new(PowerSettingStore::new(WinPowerRegistry::new()), TickCountClock);
    let dispatcher = ActionDispatcher::new(MessageBoxPrompter::new(owner), WinPowerControl)
        .with_confirmation(config.behaviour.confirm_power_actions);

    let mut controller: Option<WinController> =
        Some(SessionController::new(session, tray_manager, dispatcher));
    let mut log_guard = log_guard;

    let interval = config.refresh_interval();
    let mut next_tick = Instant::now() + interval;

    info!(interval_ms = interval.as_millis(), "SystemUP! starting");

    event_loop.run(move |event, _, control_flow| {
        // The window must outlive the loop: it owns menus and dialogs.
        let _ = &window;

        let Some(active) = controller.as_mut() else {
            *control_flow = ControlFlow::ExitWithCode(0);
            return;
        };

        let flow = match event {
            Event::NewEvents(StartCause::Init) => active.start(&mut TokenPrivilegeElevator),
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                next_tick = Instant::now() + interval;
                active.handle(SessionEvent::Tick)
            }
            Event::UserEvent(user_event) => match user_event.into_session_event() {
                Some(session_event) => active.handle(session_event),
                None => Flow::Continue,
            },
            Event::WindowEvent {
                event: WindowEvent::CloseRequested | WindowEvent::Destroyed,
                ..
            } => active.handle(SessionEvent::Lifecycle(Lifecycle::Destroyed)),
            Event::LoopDestroyed => Flow::Exit,
            _ => Flow::Continue,
        };

        match flow {
            Flow::Continue => *control_flow = ControlFlow::WaitUntil(next_tick),
            Flow::Exit => {
                // Drop order matters: remove the icon, then flush the log writer.
                drop(controller.take());
                info!("SystemUP! shut down");
                drop(log_guard.take());
                *control_flow = ControlFlow::ExitWithCode(0);
            }
        }
    })
}

/// Hidden window owning the popup menu and the dialogs.
#[track_caller]
fn hidden_window(event_loop: &EventLoop<UserEvent>) -> AppResult<Window> {
    WindowBuilder::new()
        .with_title("SystemUP!")
        .with_visible(false)
        .build(event_loop)
        .map_err(|e| AppError::Window {
            reason: format!("Failed to create hidden window: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

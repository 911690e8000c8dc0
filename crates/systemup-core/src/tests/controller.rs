use crate::{
    ActionDispatcher, Flow, HIBERBOOT_VALUE, HIBERNATE_VALUE, Lifecycle, MenuAction, PointerKind,
    PowerSettingStore, ScreenPoint, SessionController, SessionEvent, TraySession,
    tests::fakes::{
        FakeElevator, ManualClock, MemoryRegistry, RecordingPower, RecordingShell,
        ScriptedPrompter,
    },
};

type TestController = SessionController<
    MemoryRegistry,
    ManualClock,
    RecordingShell,
    ScriptedPrompter,
    RecordingPower,
>;

fn controller(registry: MemoryRegistry, clock: &ManualClock, shell: RecordingShell) -> TestController {
    let session = TraySession::new(PowerSettingStore::new(registry), clock.clone());
    let dispatcher =
        ActionDispatcher::new(ScriptedPrompter::answering(true), RecordingPower::default());
    SessionController::new(session, shell, dispatcher)
}

/// WHAT: Start refreshes the tooltip and requests the privilege once
/// WHY: Launch replaces the placeholder and elevates before any power action
#[test]
fn given_new_controller_when_starting_then_tooltip_pushed_and_privilege_requested() {
    // Given: A controller and an elevator that succeeds
    let clock = ManualClock::at(4_000);
    let mut controller = controller(MemoryRegistry::default(), &clock, RecordingShell::default());
    let mut elevator = FakeElevator::default();

    // When: Starting
    let flow = controller.start(&mut elevator);

    // Then: Tooltip pushed, privilege requested, no warnings
    assert_eq!(flow, Flow::Continue);
    assert_eq!(controller.shell().tooltips, vec!["Uptime: 00h 00m 04s"]);
    assert_eq!(elevator.attempts, 1);
    assert!(controller.dispatcher().prompter().notices.is_empty());
}

/// WHAT: Privilege failure warns once and the session keeps running
/// WHY: Missing privilege is non-fatal
#[test]
fn given_denied_privilege_when_starting_then_single_warning_and_continue() {
    let clock = ManualClock::at(0);
    let mut controller = controller(MemoryRegistry::default(), &clock, RecordingShell::default());
    let mut elevator = FakeElevator {
        denied: true,
        ..FakeElevator::default()
    };

    let flow = controller.start(&mut elevator);
    controller.handle(SessionEvent::Tick);

    assert_eq!(flow, Flow::Continue);
    assert_eq!(elevator.attempts, 1);
    let notices = &controller.dispatcher().prompter().notices;
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].message,
        "Failed to enable shutdown privileges. Some features may not work."
    );
}

/// WHAT: Ticks push one tooltip each, in order
/// WHY: Events are processed strictly in delivery order
#[test]
fn given_ticks_when_handling_then_tooltips_in_order() {
    let clock = ManualClock::at(1_000);
    let mut controller = controller(MemoryRegistry::default(), &clock, RecordingShell::default());

    controller.handle(SessionEvent::Tick);
    clock.set(2_000);
    controller.handle(SessionEvent::Tick);

    assert_eq!(
        controller.shell().tooltips,
        vec!["Uptime: 00h 00m 01s", "Uptime: 00h 00m 02s"]
    );
}

/// WHAT: A broken shell does not stop the loop
/// WHY: Tooltip failures are logged, not fatal
#[test]
fn given_broken_shell_when_ticking_then_continue() {
    let clock = ManualClock::at(1_000);
    let shell = RecordingShell {
        broken: true,
        ..RecordingShell::default()
    };
    let mut controller = controller(MemoryRegistry::default(), &clock, shell);

    assert_eq!(controller.handle(SessionEvent::Tick), Flow::Continue);
}

/// WHAT: Click, toggle, click shows the flipped label on the second menu
/// WHY: The cache is refreshed right after a successful toggle
#[test]
fn given_menu_toggle_when_reopening_then_label_flipped() {
    // Given: Fast startup enabled
    let clock = ManualClock::at(0);
    let registry = MemoryRegistry::default()
        .with_value(HIBERBOOT_VALUE, 1)
        .with_value(HIBERNATE_VALUE, 1);
    let mut controller = controller(registry, &clock, RecordingShell::default());
    let click = SessionEvent::Pointer {
        kind: PointerKind::SecondaryClick,
        at: ScreenPoint::new(5, 5),
    };

    // When: Open menu, pick toggle, open menu again
    controller.handle(click);
    controller.handle(SessionEvent::Command(MenuAction::ToggleFastStartup));
    controller.handle(click);

    // Then: Two menus with opposite toggle labels
    let menus = &controller.shell().menus;
    assert_eq!(menus.len(), 2);
    assert_eq!(
        menus[0].0.label_of(MenuAction::ToggleFastStartup),
        Some("Fast Startup is: Enabled (click to disable)")
    );
    assert_eq!(
        menus[1].0.label_of(MenuAction::ToggleFastStartup),
        Some("Fast Startup is: Disabled (click to enable)")
    );
    assert_eq!(menus[1].1, ScreenPoint::new(5, 5));
    assert!(!controller.session().state().fast_startup_enabled());
}

/// WHAT: Exit command and window destroy both end the loop
/// WHY: Every exit path must reach the tray teardown
#[test]
fn given_exit_paths_when_handling_then_flow_exit() {
    let clock = ManualClock::at(0);
    let mut controller = controller(MemoryRegistry::default(), &clock, RecordingShell::default());

    assert_eq!(
        controller.handle(SessionEvent::Command(MenuAction::Exit)),
        Flow::Exit
    );
    assert_eq!(
        controller.handle(SessionEvent::Lifecycle(Lifecycle::Destroyed)),
        Flow::Exit
    );
}

use crate::{
    CoreError, HIBERBOOT_VALUE, HIBERNATE_VALUE, PowerSettingStore, tests::fakes::MemoryRegistry,
};

/// WHAT: A registry without the key reads as disabled
/// WHY: Absence is the fail-safe default, not an error
#[test]
fn given_empty_registry_when_reading_then_disabled() {
    // Given: No power values at all
    let store = PowerSettingStore::new(MemoryRegistry::default());

    // When/Then: Fast startup reads as disabled
    assert!(!store.is_fast_startup_enabled());
}

/// WHAT: Unreadable registry reads as disabled
/// WHY: Read failures fall back silently instead of surfacing
#[test]
fn given_unreadable_registry_when_reading_then_disabled() {
    // Given: A registry that rejects reads but holds an enabled flag
    let registry = MemoryRegistry {
        unreadable: true,
        ..MemoryRegistry::default().with_value(HIBERBOOT_VALUE, 1)
    };
    let store = PowerSettingStore::new(registry);

    // When/Then: Fast startup reads as disabled
    assert!(!store.is_fast_startup_enabled());
}

/// WHAT: Only the value 1 counts as enabled
/// WHY: Unexpected DWORDs must not be treated as enabled
#[test]
fn given_unexpected_value_when_reading_then_disabled() {
    let store = PowerSettingStore::new(MemoryRegistry::default().with_value(HIBERBOOT_VALUE, 2));

    assert!(!store.is_fast_startup_enabled());
}

/// WHAT: Enabling writes only the fast startup flag
/// WHY: Enabling never touches the hibernation flag
#[test]
#[allow(clippy::unwrap_used)]
fn given_disabled_when_toggling_then_enabled_without_hibernate_write() {
    // Given: Fast startup explicitly disabled
    let mut store =
        PowerSettingStore::new(MemoryRegistry::default().with_value(HIBERBOOT_VALUE, 0));

    // When: Toggling
    let enabled = store.toggle_fast_startup().unwrap();

    // Then: Enabled, and only the primary flag was written
    assert!(enabled);
    assert_eq!(store.registry().value(HIBERBOOT_VALUE), Some(1));
    assert!(!store.registry().wrote(HIBERNATE_VALUE));
}

/// WHAT: Disabling clears both flags, primary first
/// WHY: Fast startup depends on hibernation; both must stay coherent
#[test]
#[allow(clippy::unwrap_used)]
fn given_enabled_when_toggling_then_both_flags_cleared_in_order() {
    // Given: Fast startup and hibernation enabled
    let registry = MemoryRegistry::default()
        .with_value(HIBERBOOT_VALUE, 1)
        .with_value(HIBERNATE_VALUE, 1);
    let mut store = PowerSettingStore::new(registry);

    // When: Toggling
    let enabled = store.toggle_fast_startup().unwrap();

    // Then: Both values are zero and were written primary-then-secondary
    assert!(!enabled);
    assert_eq!(
        store.registry().writes,
        vec![
            (HIBERBOOT_VALUE.to_string(), 0),
            (HIBERNATE_VALUE.to_string(), 0)
        ]
    );
}

/// WHAT: Failed hibernation write during disable is a partial failure
/// WHY: Half-applied changes must never be reported as success
#[test]
fn given_hibernate_write_fails_when_disabling_then_partial_disable_error() {
    // Given: Fast startup enabled and a hibernation flag that cannot be written
    let registry = MemoryRegistry::default()
        .with_value(HIBERBOOT_VALUE, 1)
        .with_value(HIBERNATE_VALUE, 1)
        .failing_write(HIBERNATE_VALUE);
    let mut store = PowerSettingStore::new(registry);

    // When: Toggling
    let result = store.toggle_fast_startup();

    // Then: Partial failure, primary already disabled, hibernation untouched
    assert!(matches!(result, Err(CoreError::PartialDisable { .. })));
    assert!(!store.is_fast_startup_enabled());
    assert_eq!(store.registry().value(HIBERNATE_VALUE), Some(1));
}

/// WHAT: Failed primary write stops the toggle
/// WHY: Nothing else may be written once the primary flag fails
#[test]
fn given_primary_write_fails_when_toggling_then_registry_write_error() {
    // Given: A primary flag that cannot be written
    let registry = MemoryRegistry::default()
        .with_value(HIBERBOOT_VALUE, 1)
        .failing_write(HIBERBOOT_VALUE);
    let mut store = PowerSettingStore::new(registry);

    // When: Toggling
    let result = store.toggle_fast_startup();

    // Then: RegistryWrite error and no writes at all
    assert!(matches!(
        result,
        Err(CoreError::RegistryWrite {
            value: HIBERBOOT_VALUE,
            ..
        })
    ));
    assert!(store.registry().writes.is_empty());
    assert!(store.is_fast_startup_enabled());
}

/// WHAT: Toggling twice returns to the starting value
/// WHY: The toggle is an involution absent outside interference
#[test]
#[allow(clippy::unwrap_used)]
fn given_known_state_when_toggling_twice_then_starting_value() {
    for start in [0, 1] {
        // Given: A known starting value
        let mut store =
            PowerSettingStore::new(MemoryRegistry::default().with_value(HIBERBOOT_VALUE, start));
        let before = store.is_fast_startup_enabled();

        // When: Toggling twice
        store.toggle_fast_startup().unwrap();
        let after = store.toggle_fast_startup().unwrap();

        // Then: Back where we started
        assert_eq!(before, after);
        assert_eq!(store.is_fast_startup_enabled(), before);
    }
}

/// WHAT: Fresh machine scenario from launch through two toggles
/// WHY: Covers default read, enable without hibernate write, disable with both writes
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_entries_when_toggling_twice_then_enable_then_disable_both() {
    // Given: No prior registry entries
    let mut store = PowerSettingStore::new(MemoryRegistry::default());
    assert!(!store.is_fast_startup_enabled());

    // When: First toggle
    assert!(store.toggle_fast_startup().unwrap());

    // Then: Enabled, no hibernation write
    assert!(store.is_fast_startup_enabled());
    assert!(!store.registry().wrote(HIBERNATE_VALUE));

    // When: Second toggle
    assert!(!store.toggle_fast_startup().unwrap());

    // Then: Both flags written disabled
    assert!(!store.is_fast_startup_enabled());
    assert_eq!(store.registry().value(HIBERBOOT_VALUE), Some(0));
    assert_eq!(store.registry().value(HIBERNATE_VALUE), Some(0));
}

/// WHAT: Toggle direction follows the registry, not an outdated view
/// WHY: Another process may have changed the value since the last read
#[test]
#[allow(clippy::unwrap_used)]
fn given_external_change_when_toggling_then_inverse_of_registry_value() {
    // Given: A store that first sees fast startup enabled
    let mut store =
        PowerSettingStore::new(MemoryRegistry::default().with_value(HIBERBOOT_VALUE, 1));
    assert!(store.is_fast_startup_enabled());

    // When: Another process disables it, then we toggle
    store
        .registry_mut()
        .values
        .insert(HIBERBOOT_VALUE.to_string(), 0);
    let enabled = store.toggle_fast_startup().unwrap();

    // Then: The toggle enables it
    assert!(enabled);
}

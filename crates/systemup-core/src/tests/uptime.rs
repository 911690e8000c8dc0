use crate::Uptime;

/// WHAT: Less than a day of uptime renders without a day field
/// WHY: The tooltip only grows a day prefix once the first day has passed
#[test]
fn given_first_day_when_formatting_then_no_day_prefix() {
    // Given: 1h 02m 03s since boot
    let ms = 3_723_000;

    // When: Formatting the uptime
    let text = Uptime::from_millis(ms).to_string();

    // Then: Fields are zero-padded and no day field is shown
    assert_eq!(text, "Uptime: 01h 02m 03s");
}

/// WHAT: Multi-day uptime renders an unpadded day count
/// WHY: Days are not zero-padded while the other fields are
#[test]
fn given_multiple_days_when_formatting_then_day_prefix_unpadded() {
    // Given: 3 days, 4 hours, 5 minutes, 6 seconds and some milliseconds
    let ms = 3 * 86_400_000 + 4 * 3_600_000 + 5 * 60_000 + 6 * 1_000 + 999;

    // When: Formatting the uptime
    let text = Uptime::from_millis(ms).to_string();

    // Then: Day prefix present, sub-second part dropped
    assert_eq!(text, "Uptime: 3d 04h 05m 06s");
}

/// WHAT: Exactly one day shows the day field with zeroed hours
/// WHY: Hours wrap modulo 24 once the day field takes over
#[test]
fn given_exactly_one_day_when_formatting_then_hours_wrap() {
    // Given: 24 hours since boot
    let uptime = Uptime::from_millis(86_400_000);

    // When/Then: One day, zero hours
    assert_eq!(uptime.days(), 1);
    assert_eq!(uptime.hours(), 0);
    assert_eq!(uptime.to_string(), "Uptime: 1d 00h 00m 00s");
}

/// WHAT: Decomposition matches the modular arithmetic across a spread of values
/// WHY: The day prefix must appear exactly when days > 0
#[test]
fn given_sampled_millis_when_decomposing_then_fields_match_moduli() {
    // Given: Values around unit boundaries
    let samples = [
        0,
        999,
        59_999,
        60_000,
        3_599_999,
        86_399_999,
        86_400_000,
        1_234_567_890,
        u64::from(u32::MAX) * 7,
    ];

    for ms in samples {
        // When: Decomposing
        let uptime = Uptime::from_millis(ms);

        // Then: Every field follows the moduli
        assert_eq!(uptime.days(), ms / 86_400_000);
        assert_eq!(u64::from(uptime.hours()), (ms / 3_600_000) % 24);
        assert_eq!(u64::from(uptime.minutes()), (ms / 60_000) % 60);
        assert_eq!(u64::from(uptime.seconds()), (ms / 1_000) % 60);
        assert_eq!(uptime.to_string().contains("d "), uptime.days() > 0);
    }
}

/// WHAT: Zero uptime renders all-zero fields
/// WHY: A freshly booted clock must still produce a valid tooltip
#[test]
fn given_zero_millis_when_formatting_then_all_zero() {
    assert_eq!(Uptime::from_millis(0).to_string(), "Uptime: 00h 00m 00s");
}

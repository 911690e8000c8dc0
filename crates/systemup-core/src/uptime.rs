use std::fmt;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Monotonic source of elapsed time since the machine booted.
pub trait UptimeClock {
    /// Milliseconds elapsed since boot.
    fn millis_since_boot(&self) -> u64;
}

/// Elapsed time since boot split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    days: u64,
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Uptime {
    /// Decompose a millisecond count into days, hours, minutes and seconds.
    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: ((ms / MS_PER_HOUR) % 24) as u8,
            minutes: ((ms / MS_PER_MINUTE) % 60) as u8,
            seconds: ((ms / MS_PER_SECOND) % 60) as u8,
        }
    }

    /// Whole days since boot.
    pub fn days(&self) -> u64 {
        self.days
    }

    /// Hours within the current day (0-23).
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes within the current hour (0-59).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds within the current minute (0-59).
    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

/// Renders `Uptime: 3d 04h 05m 06s`, dropping the day field on the first day.
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(
                f,
                "Uptime: {}d {:02}h {:02}m {:02}s",
                self.days, self.hours, self.minutes, self.seconds
            )
        } else {
            write!(
                f,
                "Uptime: {:02}h {:02}m {:02}s",
                self.hours, self.minutes, self.seconds
            )
        }
    }
}

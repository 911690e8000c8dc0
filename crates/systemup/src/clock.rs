use systemup_core::UptimeClock;

use windows::Win32::System::SystemInformation::GetTickCount64;

/// Uptime from the system tick counter, which does not wrap for 584 million years.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickCountClock;

impl UptimeClock for TickCountClock {
    fn millis_since_boot(&self) -> u64 {
        unsafe { GetTickCount64() }
    }
}

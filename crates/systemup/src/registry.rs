//! Win32 registry access for the power flags and the theme query.

use systemup_core::{POWER_KEY_PATH, PowerRegistry};

use std::io;

use tracing::debug;
use winreg::{
    RegKey,
    enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE},
};

const PERSONALIZE_KEY_PATH: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
const APPS_USE_LIGHT_THEME_VALUE: &str = "AppsUseLightTheme";

/// The power-management key under `HKEY_LOCAL_MACHINE`.
///
/// The key is opened per operation, so changes made by other processes are
/// always visible.
pub struct WinPowerRegistry {
    root: RegKey,
}

impl WinPowerRegistry {
    /// Registry rooted at `HKEY_LOCAL_MACHINE`.
    pub fn new() -> Self {
        Self {
            root: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl Default for WinPowerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerRegistry for WinPowerRegistry {
    fn read_dword(&self, name: &str) -> io::Result<Option<u32>> {
        let key = match self.root.open_subkey_with_flags(POWER_KEY_PATH, KEY_READ) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        match key.get_value::<u32, _>(name) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_dword(&mut self, name: &str, value: u32) -> io::Result<()> {
        let key = self
            .root
            .open_subkey_with_flags(POWER_KEY_PATH, KEY_SET_VALUE)?;
        key.set_value(name, &value)
    }
}

/// Whether apps use the dark theme. Any failure counts as light.
pub fn apps_use_dark_theme() -> bool {
    let light = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(PERSONALIZE_KEY_PATH, KEY_READ)
        .and_then(|key| key.get_value::<u32, _>(APPS_USE_LIGHT_THEME_VALUE));

    match light {
        Ok(value) => value == 0,
        Err(e) => {
            debug!(error = %e, "Theme preference unreadable, assuming light theme");
            false
        }
    }
}

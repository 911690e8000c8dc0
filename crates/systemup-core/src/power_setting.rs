//! Fast startup (hybrid boot) setting backed by the power-management registry key.
//!
//! Two `REG_DWORD` values live under the key: `HiberbootEnabled` is the fast
//! startup flag and `HibernateEnabled` the hibernation flag it relies on.
//! Disabling fast startup clears both; enabling only sets the first.

use crate::{CoreError, CoreResult};

use std::{io, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Registry key holding both power flags, relative to `HKEY_LOCAL_MACHINE`.
pub const POWER_KEY_PATH: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Power";

/// Fast startup flag.
pub const HIBERBOOT_VALUE: &str = "HiberbootEnabled";

/// Hibernation flag.
pub const HIBERNATE_VALUE: &str = "HibernateEnabled";

/// Access to the `DWORD` values of the power-management registry key.
pub trait PowerRegistry {
    /// Read a value. `Ok(None)` when the key or the value does not exist.
    fn read_dword(&self, name: &str) -> io::Result<Option<u32>>;

    /// Write a value, creating it if needed.
    fn write_dword(&mut self, name: &str, value: u32) -> io::Result<()>;
}

/// Reads and flips the fast startup setting.
///
/// The registry is the source of truth: nothing is cached here, every call
/// goes back to the backend.
#[derive(Debug)]
pub struct PowerSettingStore<R> {
    registry: R,
}

impl<R: PowerRegistry> PowerSettingStore<R> {
    /// Wrap a registry backend.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Borrow the registry backend.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutably borrow the registry backend.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Whether fast startup is on.
    ///
    /// A missing key, a missing value or a failed read all count as disabled.
    pub fn is_fast_startup_enabled(&self) -> bool {
        match self.registry.read_dword(HIBERBOOT_VALUE) {
            Ok(Some(value)) => value == 1,
            Ok(None) => false,
            Err(e) => {
                debug!(error = %e, "Fast startup flag unreadable, treating as disabled");
                false
            }
        }
    }

    /// Flip fast startup and return the new value.
    ///
    /// The current value is re-read from the registry first so a stale view
    /// never decides the direction of the toggle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn toggle_fast_startup(&mut self) -> CoreResult<bool> {
        let location = Location::caller();
        let enable = !self.is_fast_startup_enabled();
        let value = u32::from(enable);

        self.registry
            .write_dword(HIBERBOOT_VALUE, value)
            .map_err(|source| CoreError::RegistryWrite {
                value: HIBERBOOT_VALUE,
                source,
                location: ErrorLocation::from(location),
            })?;

        if !enable {
            self.registry
                .write_dword(HIBERNATE_VALUE, value)
                .map_err(|source| {
                    warn!(error = %source, "Hibernation flag left stale after disabling fast startup");
                    CoreError::PartialDisable {
                        source,
                        location: ErrorLocation::from(location),
                    }
                })?;
        }

        info!(enabled = enable, "Fast startup toggled");

        Ok(enable)
    }
}

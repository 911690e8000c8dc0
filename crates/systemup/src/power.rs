//! Shutdown privilege, power transitions and session lock via Win32.

use systemup_core::{CoreError, CoreResult, PowerControl, PrivilegeElevator};

use std::{io, panic::Location};

use error_location::ErrorLocation;
use tracing::{info, instrument};
use windows::{
    Win32::{
        Foundation::{CloseHandle, ERROR_NOT_ALL_ASSIGNED, FALSE, HANDLE, LUID},
        Security::{
            AdjustTokenPrivileges, LUID_AND_ATTRIBUTES, LookupPrivilegeValueW,
            SE_PRIVILEGE_ENABLED, TOKEN_ADJUST_PRIVILEGES, TOKEN_PRIVILEGES, TOKEN_QUERY,
        },
        System::{
            Shutdown::{
                EWX_FORCEIFHUNG, EWX_REBOOT, EWX_SHUTDOWN, EXIT_WINDOWS_FLAGS, ExitWindowsEx,
                LockWorkStation, SHUTDOWN_REASON,
            },
            Threading::{GetCurrentProcess, OpenProcessToken},
        },
    },
    core::{PCWSTR, w},
};

/// Enables `SeShutdownPrivilege` on the current process token.
#[derive(Debug, Default)]
pub struct TokenPrivilegeElevator;

impl PrivilegeElevator for TokenPrivilegeElevator {
    #[track_caller]
    #[instrument(skip(self))]
    fn enable_shutdown_privilege(&mut self) -> CoreResult<()> {
        let location = Location::caller();
        let failed = |reason: String| CoreError::Privilege {
            reason,
            location: ErrorLocation::from(location),
        };

        let mut handle = HANDLE::default();
        unsafe {
            OpenProcessToken(
                GetCurrentProcess(),
                TOKEN_ADJUST_PRIVILEGES | TOKEN_QUERY,
                &mut handle,
            )
        }
        .map_err(|e| failed(format!("Failed to open process token: {}", e)))?;
        let token = OwnedHandle(handle);

        let mut luid = LUID::default();
        unsafe { LookupPrivilegeValueW(PCWSTR::null(), w!("SeShutdownPrivilege"), &mut luid) }
            .map_err(|e| failed(format!("Failed to look up shutdown privilege: {}", e)))?;

        let privileges = TOKEN_PRIVILEGES {
            PrivilegeCount: 1,
            Privileges: [LUID_AND_ATTRIBUTES {
                Luid: luid,
                Attributes: SE_PRIVILEGE_ENABLED,
            }],
        };

        unsafe {
            AdjustTokenPrivileges(
                token.0,
                FALSE,
                Some(&privileges as *const TOKEN_PRIVILEGES),
                0,
                None,
                None,
            )
        }
        .map_err(|e| failed(format!("Failed to adjust token privileges: {}", e)))?;

        // AdjustTokenPrivileges reports success even when nothing was granted.
        if io::Error::last_os_error().raw_os_error() == Some(ERROR_NOT_ALL_ASSIGNED.0 as i32) {
            return Err(failed("Shutdown privilege not assigned to this user".to_string()));
        }

        info!("Shutdown privilege enabled");
        Ok(())
    }
}

struct OwnedHandle(HANDLE);

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        let _ = unsafe { CloseHandle(self.0) };
    }
}

/// Power transitions through `ExitWindowsEx` and `LockWorkStation`.
#[derive(Debug, Default)]
pub struct WinPowerControl;

impl PowerControl for WinPowerControl {
    #[track_caller]
    fn power_off(&mut self) -> CoreResult<()> {
        exit_windows(EWX_SHUTDOWN, "Shutdown")
    }

    #[track_caller]
    fn restart(&mut self) -> CoreResult<()> {
        exit_windows(EWX_REBOOT, "Restart")
    }

    #[track_caller]
    fn lock(&mut self) -> CoreResult<()> {
        let location = Location::caller();
        unsafe { LockWorkStation() }.map_err(|e| CoreError::Power {
            action: "Lock",
            reason: e.to_string(),
            location: ErrorLocation::from(location),
        })
    }
}

#[track_caller]
fn exit_windows(mode: EXIT_WINDOWS_FLAGS, action: &'static str) -> CoreResult<()> {
    let location = Location::caller();
    unsafe { ExitWindowsEx(mode | EWX_FORCEIFHUNG, SHUTDOWN_REASON(0)) }.map_err(|e| {
        CoreError::Power {
            action,
            reason: e.to_string(),
            location: ErrorLocation::from(location),
        }
    })
}

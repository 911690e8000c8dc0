use error_location::ErrorLocation;
use thiserror::Error;

/// Session-level errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Writing a power-management registry value failed.
    #[error("Failed to write registry value {value}: {source} {location}")]
    RegistryWrite {
        /// Name of the registry value being written.
        value: &'static str,
        /// The underlying registry I/O error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Fast startup was switched off but the hibernation flag kept its old value.
    #[error("Fast startup disabled but hibernation flag is stale: {source} {location}")]
    PartialDisable {
        /// The error from the hibernation flag write.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A power transition or session lock request was rejected by the OS.
    #[error("{action} failed: {reason} {location}")]
    Power {
        /// The requested transition (shutdown, restart, lock).
        action: &'static str,
        /// Description of the OS failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The shutdown privilege could not be enabled on the process token.
    #[error("Shutdown privilege unavailable: {reason} {location}")]
    Privilege {
        /// Description of the OS failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A tray shell operation (tooltip update, menu display) failed.
    #[error("Tray shell error: {reason} {location}")]
    Tray {
        /// Description of the shell failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

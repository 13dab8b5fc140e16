//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Non-volatile memory operation failed
    Nvm(NvmError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// NVM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NvmError {
    /// Address range falls outside the device
    InvalidAddress,
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
}

impl From<NvmError> for PlatformError {
    fn from(e: NvmError) -> Self {
        PlatformError::Nvm(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Nvm(e) => write!(f, "NVM error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

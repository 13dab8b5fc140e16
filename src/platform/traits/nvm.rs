//! NVM interface trait
//!
//! This module defines the byte-addressed non-volatile memory interface used
//! to persist parameter values.

use crate::platform::Result;

/// Non-volatile memory interface
///
/// Platform implementations provide byte-granular read and write access, as
/// on an EEPROM. There is no separate erase step.
///
/// # Characteristics
///
/// - Fresh or erased memory reads back as 0xFF
/// - Operations are blocking and bounded; callers never retry
/// - Only one owner per device (no concurrent access)
pub trait NvmInterface {
    /// Read `buf.len()` bytes starting at `address`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Nvm(NvmError::InvalidAddress)` if the range is out of bounds.
    /// Returns `PlatformError::Nvm(NvmError::ReadFailed)` if the device reports a failure.
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()>;

    /// Write `data` starting at `address`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Nvm(NvmError::InvalidAddress)` if the range is out of bounds.
    /// Returns `PlatformError::Nvm(NvmError::WriteFailed)` if the device reports a failure.
    fn write(&mut self, address: u32, data: &[u8]) -> Result<()>;

    /// Device size in bytes
    fn capacity(&self) -> u32;
}

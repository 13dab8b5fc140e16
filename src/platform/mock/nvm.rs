//! Mock NVM implementation for testing
//!
//! Provides in-memory EEPROM simulation for unit tests.

use crate::platform::{error::NvmError, traits::NvmInterface, Result};
use heapless::Vec;

/// Simulated device size (2 KB)
pub const MOCK_NVM_CAPACITY: usize = 2048;

/// Maximum number of injected write faults
const MAX_FAULTS: usize = 16;

/// Mock NVM implementation
///
/// Simulates a byte-addressed EEPROM in memory. Supports:
/// - Read/write operations on a 0xFF-erased array
/// - Write counting, in total and per byte
/// - Read counting per byte
/// - Write-failure injection at chosen addresses
/// - Corruption injection for testing error handling
///
/// # Example
///
/// ```
/// use cnc_config::platform::mock::MockNvm;
/// use cnc_config::platform::traits::NvmInterface;
///
/// let mut nvm = MockNvm::new();
/// nvm.write(0x10, &1.5f32.to_le_bytes()).unwrap();
///
/// let mut buf = [0u8; 4];
/// nvm.read(0x10, &mut buf).unwrap();
/// assert_eq!(f32::from_le_bytes(buf), 1.5);
/// assert_eq!(nvm.write_count(0x10), 1);
/// ```
#[derive(Debug)]
pub struct MockNvm {
    /// Storage (initialized to 0xFF - erased state)
    storage: [u8; MOCK_NVM_CAPACITY],
    /// Write count per byte
    write_counts: [u16; MOCK_NVM_CAPACITY],
    /// Read count per byte
    read_counts: [u16; MOCK_NVM_CAPACITY],
    /// Number of successful write calls
    total_writes: u32,
    /// Writes covering any of these addresses fail
    faults: Vec<u32, MAX_FAULTS>,
}

impl MockNvm {
    /// Create a new erased mock NVM
    pub fn new() -> Self {
        Self {
            storage: [0xFF; MOCK_NVM_CAPACITY],
            write_counts: [0; MOCK_NVM_CAPACITY],
            read_counts: [0; MOCK_NVM_CAPACITY],
            total_writes: 0,
            faults: Vec::new(),
        }
    }

    /// Get raw contents (for test verification)
    pub fn contents(&self, address: u32, len: usize) -> &[u8] {
        let start = (address as usize).min(MOCK_NVM_CAPACITY);
        let end = (start + len).min(MOCK_NVM_CAPACITY);
        &self.storage[start..end]
    }

    /// Inject corruption at address (for testing error recovery)
    pub fn inject_corruption(&mut self, address: u32, len: usize) {
        let start = (address as usize).min(MOCK_NVM_CAPACITY);
        let end = (start + len).min(MOCK_NVM_CAPACITY);
        for byte in &mut self.storage[start..end] {
            *byte = 0xAA; // Corrupt pattern
        }
    }

    /// Make every later write that covers `address` fail
    pub fn inject_write_failure(&mut self, address: u32) {
        let _ = self.faults.push(address);
    }

    /// Remove all injected write failures
    pub fn clear_write_failures(&mut self) {
        self.faults.clear();
    }

    /// Number of times the byte at `address` was written
    pub fn write_count(&self, address: u32) -> u16 {
        self.write_counts
            .get(address as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Number of times the byte at `address` was read
    pub fn read_count(&self, address: u32) -> u16 {
        self.read_counts
            .get(address as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Number of successful write calls
    pub fn total_writes(&self) -> u32 {
        self.total_writes
    }

    /// Reset read and write counters without touching contents
    pub fn reset_counters(&mut self) {
        self.write_counts = [0; MOCK_NVM_CAPACITY];
        self.read_counts = [0; MOCK_NVM_CAPACITY];
        self.total_writes = 0;
    }

    /// Check that `address..address + len` lies inside the device
    fn range(&self, address: u32, len: usize) -> Result<core::ops::Range<usize>> {
        let start = address as usize;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= MOCK_NVM_CAPACITY)
            .ok_or(NvmError::InvalidAddress)?;
        Ok(start..end)
    }
}

impl Default for MockNvm {
    fn default() -> Self {
        Self::new()
    }
}

impl NvmInterface for MockNvm {
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()> {
        let range = self.range(address, buf.len())?;
        buf.copy_from_slice(&self.storage[range.clone()]);
        for count in &mut self.read_counts[range] {
            *count = count.saturating_add(1);
        }
        Ok(())
    }

    fn write(&mut self, address: u32, data: &[u8]) -> Result<()> {
        let range = self.range(address, data.len())?;
        if self
            .faults
            .iter()
            .any(|&fault| range.contains(&(fault as usize)))
        {
            return Err(NvmError::WriteFailed.into());
        }

        self.storage[range.clone()].copy_from_slice(data);
        for count in &mut self.write_counts[range] {
            *count = count.saturating_add(1);
        }
        self.total_writes += 1;
        Ok(())
    }

    fn capacity(&self) -> u32 {
        MOCK_NVM_CAPACITY as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;

    #[test]
    fn test_mock_nvm_starts_erased() {
        let nvm = MockNvm::new();
        assert!(nvm.contents(0, 64).iter().all(|&b| b == 0xFF));
        assert_eq!(nvm.total_writes(), 0);
    }

    #[test]
    fn test_mock_nvm_read_write() {
        let mut nvm = MockNvm::new();
        let data = [0x50, 0x41, 0x52, 0x41];
        nvm.write(0x100, &data).unwrap();

        let mut buf = [0u8; 4];
        nvm.read(0x100, &mut buf).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn test_mock_nvm_write_counts() {
        let mut nvm = MockNvm::new();
        nvm.write(8, &[1, 2, 3, 4]).unwrap();
        nvm.write(10, &[5, 6]).unwrap();

        assert_eq!(nvm.total_writes(), 2);
        assert_eq!(nvm.write_count(8), 1);
        assert_eq!(nvm.write_count(10), 2);
        assert_eq!(nvm.write_count(12), 0);

        nvm.reset_counters();
        assert_eq!(nvm.total_writes(), 0);
        assert_eq!(nvm.contents(8, 4), &[1, 2, 5, 6]);
    }

    #[test]
    fn test_mock_nvm_read_counts() {
        let mut nvm = MockNvm::new();
        let mut buf = [0u8; 4];
        nvm.read(4, &mut buf).unwrap();
        nvm.read(6, &mut buf[..2]).unwrap();

        assert_eq!(nvm.read_count(4), 1);
        assert_eq!(nvm.read_count(6), 2);
        assert_eq!(nvm.read_count(8), 0);
        assert_eq!(nvm.write_count(4), 0);

        // failed reads are not counted
        assert!(nvm.read(MOCK_NVM_CAPACITY as u32, &mut buf).is_err());

        nvm.reset_counters();
        assert_eq!(nvm.read_count(6), 0);
    }

    #[test]
    fn test_mock_nvm_invalid_address() {
        let mut nvm = MockNvm::new();
        let mut buf = [0u8; 4];
        assert_eq!(
            nvm.read(MOCK_NVM_CAPACITY as u32 - 2, &mut buf),
            Err(PlatformError::Nvm(NvmError::InvalidAddress))
        );
        assert_eq!(
            nvm.write(u32::MAX, &[0]),
            Err(PlatformError::Nvm(NvmError::InvalidAddress))
        );
    }

    #[test]
    fn test_mock_nvm_write_failure_injection() {
        let mut nvm = MockNvm::new();
        nvm.inject_write_failure(6);

        assert_eq!(
            nvm.write(4, &[0; 4]),
            Err(PlatformError::Nvm(NvmError::WriteFailed))
        );
        assert_eq!(nvm.contents(4, 4), &[0xFF; 4]);
        assert!(nvm.write(0, &[0; 4]).is_ok());

        nvm.clear_write_failures();
        assert!(nvm.write(4, &[0; 4]).is_ok());
    }

    #[test]
    fn test_mock_nvm_corruption() {
        let mut nvm = MockNvm::new();
        nvm.write(0, &[0; 8]).unwrap();
        nvm.inject_corruption(2, 3);
        assert_eq!(nvm.contents(0, 8), &[0, 0, 0xAA, 0xAA, 0xAA, 0, 0, 0]);
    }
}

//! NVM profile layout
//!
//! One fixed-width little-endian `f32` slot per registry index, starting at a
//! base address. Slot 0 holds the config version stamp.
//!
//! ```text
//! base + 0   [fc  ] version stamp (build number)
//! base + 4   [fv  ] firmware version
//! base + 8   [fb  ] firmware build
//! ...
//! base + 4n  [n   ] value of registry index n
//! ```

use crate::platform::{NvmError, NvmInterface, PlatformError};
use cnc_config_core::registry::{self, Index, CONFIG_VERSION_INDEX, REGISTRY_LEN};
use cnc_config_core::{ConfigError, Result};
use core::fmt::Write;
use core::ops::Range;

/// Default profile base address
pub const NVM_BASE_ADDR: u32 = 0;

/// Bytes per persisted value
pub const NVM_VALUE_LEN: u32 = 4;

/// Bytes needed for a full profile
pub const NVM_PROFILE_LEN: u32 = REGISTRY_LEN as u32 * NVM_VALUE_LEN;

impl From<PlatformError> for ConfigError {
    fn from(e: PlatformError) -> Self {
        match e {
            PlatformError::Nvm(NvmError::ReadFailed) => ConfigError::PersistenceReadFailure,
            _ => ConfigError::PersistenceWriteFailure,
        }
    }
}

/// Parameter values laid out on an NVM device
#[derive(Debug)]
pub struct NvmProfile<N> {
    nvm: N,
    base: u32,
}

impl<N: NvmInterface> NvmProfile<N> {
    /// Profile at [`NVM_BASE_ADDR`]
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the device cannot hold a full profile.
    pub fn new(nvm: N) -> core::result::Result<Self, PlatformError> {
        Self::with_base(nvm, NVM_BASE_ADDR)
    }

    /// Profile at a custom base address
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the profile would run past the end of the device.
    pub fn with_base(nvm: N, base: u32) -> core::result::Result<Self, PlatformError> {
        let fits = base
            .checked_add(NVM_PROFILE_LEN)
            .is_some_and(|end| end <= nvm.capacity());
        if !fits {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(Self { nvm, base })
    }

    fn address(&self, index: Index) -> Result<u32> {
        if index >= REGISTRY_LEN {
            return Err(ConfigError::UnrecognizedCommand);
        }
        Ok(self.base + index as u32 * NVM_VALUE_LEN)
    }

    fn read_raw(&mut self, index: Index) -> Result<[u8; NVM_VALUE_LEN as usize]> {
        let address = self.address(index)?;
        let mut buf = [0u8; NVM_VALUE_LEN as usize];
        self.nvm
            .read(address, &mut buf)
            .map_err(|_| ConfigError::PersistenceReadFailure)?;
        Ok(buf)
    }

    /// Read the value persisted for `index`
    pub fn read_value(&mut self, index: Index) -> Result<f32> {
        self.read_raw(index).map(f32::from_le_bytes)
    }

    /// Persist `value` for `index`
    pub fn write_value(&mut self, index: Index, value: f32) -> Result<()> {
        let address = self.address(index)?;
        self.nvm.write(address, &value.to_le_bytes())?;
        Ok(())
    }

    /// Read the config version stamp
    pub fn read_stamp(&mut self) -> Result<f32> {
        self.read_value(CONFIG_VERSION_INDEX)
    }

    /// Write the config version stamp
    pub fn write_stamp(&mut self, stamp: f32) -> Result<()> {
        self.write_value(CONFIG_VERSION_INDEX, stamp)
    }

    /// Write one line per slot in `range`: index, token, value and raw bytes.
    ///
    /// ```text
    ///    0 fc        331.020 [8f 82 a5 43]
    /// ```
    pub fn dump(&mut self, range: Range<Index>, out: &mut dyn Write) -> Result<()> {
        for index in range.start..range.end.min(REGISTRY_LEN) {
            let raw = self.read_raw(index)?;
            let token = registry::token(index).unwrap_or("");
            writeln!(
                out,
                "{:>4} {:<5}{:>12.3} [{:02x} {:02x} {:02x} {:02x}]",
                index,
                token,
                f32::from_le_bytes(raw),
                raw[0],
                raw[1],
                raw[2],
                raw[3]
            )?;
        }
        Ok(())
    }

    /// Underlying device
    pub fn device(&self) -> &N {
        &self.nvm
    }

    /// Underlying device, mutable
    pub fn device_mut(&mut self) -> &mut N {
        &mut self.nvm
    }

    /// Give the device back
    pub fn into_device(self) -> N {
        self.nvm
    }
}

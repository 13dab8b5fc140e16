//! Configuration subsystem
//!
//! [`Config`] owns the live parameter state, the command pool and the NVM
//! profile, and exposes the entry points the rest of the firmware calls:
//! resolve, get, set, print, the text command parser and boot-time init.
//!
//! The machine collaborators are passed into each call rather than stored,
//! so the caller keeps ownership of the motion, stepper and serial layers.
//!
//! # Example
//!
//! ```
//! use cnc_config::config::{build_info, Config, InitState};
//! use cnc_config::platform::mock::MockNvm;
//! use cnc_config_core::traits::MockMachine;
//!
//! let mut machine = MockMachine::new();
//! let mut config = Config::new(MockNvm::new(), build_info()).unwrap();
//! assert_eq!(config.bulk_init(&mut machine), InitState::DefaultsWritten);
//!
//! let mut out = String::new();
//! config.config_parser(&mut machine, "$xfr=1200", &mut out).unwrap();
//! assert!(out.contains("1200.000 mm/min"));
//! ```

pub mod init;
pub mod profile;

pub use init::InitState;
pub use profile::{NvmProfile, NVM_BASE_ADDR, NVM_PROFILE_LEN, NVM_VALUE_LEN};

use crate::platform::{NvmInterface, PlatformError};
use crate::{log_debug, log_warn};
use cnc_config_core::cmd::{CmdObject, CmdPool};
use cnc_config_core::dispatch::{self, persisted_value, Context};
use cnc_config_core::registry::{
    descriptor, Index, Setter, CONFIG_VERSION_INDEX, GCODE_INDEX, START_GROUPS,
    START_STATUS_SLOTS,
};
use cnc_config_core::state::{BuildInfo, ConfigState};
use cnc_config_core::traits::Machine;
use cnc_config_core::{parser, print, resolver, ConfigError, Result};
use core::fmt::Write;
use core::ops::Range;

/// Firmware version used when the build environment does not provide one
pub const DEFAULT_FIRMWARE_VERSION: f32 = 0.93;

/// Build number used when the build environment does not provide one
pub const DEFAULT_BUILD_NUMBER: f32 = 331.02;

/// Firmware identification baked in by `build.rs`
pub fn build_info() -> BuildInfo {
    BuildInfo {
        firmware_version: env!("CNC_FIRMWARE_VERSION")
            .parse()
            .unwrap_or(DEFAULT_FIRMWARE_VERSION),
        build_number: env!("CNC_BUILD_NUMBER")
            .parse()
            .unwrap_or(DEFAULT_BUILD_NUMBER),
    }
}

/// Configuration subsystem
pub struct Config<N> {
    state: ConfigState,
    pool: CmdPool,
    profile: NvmProfile<N>,
    init_state: InitState,
}

/// Write the value just applied by `cmd` to its slot.
///
/// Actions, groups, the version stamp and commands that failed or carried no
/// value are skipped.
fn persist<N: NvmInterface>(
    state: &ConfigState,
    profile: &mut NvmProfile<N>,
    index: Index,
    cmd: &CmdObject,
) -> Result<()> {
    let Some(d) = descriptor(index) else {
        return Err(ConfigError::UnrecognizedCommand);
    };
    if index == CONFIG_VERSION_INDEX
        || !d.is_persisted()
        || cmd.status.is_err()
        || !cmd.has_value()
    {
        return Ok(());
    }
    let value = persisted_value(state, index, cmd);
    profile.write_value(index, value).inspect_err(|_| {
        log_warn!("NVM write failed for {} ({})", d.token, index);
    })
}

/// Write every status report slot
fn persist_status_spec<N: NvmInterface>(
    state: &ConfigState,
    profile: &mut NvmProfile<N>,
) -> Result<()> {
    let mut result = Ok(());
    for index in START_STATUS_SLOTS..START_GROUPS {
        let Some(d) = descriptor(index) else {
            continue;
        };
        if let Err(e) = profile.write_value(index, state.load(d.target)) {
            log_warn!("NVM write failed for {} ({})", d.token, index);
            result = Err(e);
        }
    }
    result
}

impl<N: NvmInterface> Config<N> {
    /// Create an uninitialized configuration on `nvm`.
    ///
    /// Call [`Config::bulk_init`] (or [`Config::apply_defaults`]) before use.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if `nvm` cannot hold a full profile.
    pub fn new(nvm: N, build: BuildInfo) -> core::result::Result<Self, PlatformError> {
        Ok(Self::with_profile(NvmProfile::new(nvm)?, build))
    }

    /// Create an uninitialized configuration on an existing profile
    pub fn with_profile(profile: NvmProfile<N>, build: BuildInfo) -> Self {
        Self {
            state: ConfigState::new(build),
            pool: CmdPool::new(),
            profile,
            init_state: InitState::Uninitialized,
        }
    }

    /// Live parameter state
    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Outcome of the last init
    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    /// NVM profile
    pub fn profile(&self) -> &NvmProfile<N> {
        &self.profile
    }

    /// NVM profile, mutable
    pub fn profile_mut(&mut self) -> &mut NvmProfile<N> {
        &mut self.profile
    }

    /// Command pool, for building structured requests before [`Config::set_object`]
    pub fn pool_mut(&mut self) -> &mut CmdPool {
        &mut self.pool
    }

    /// Resolve a token or friendly name
    pub fn resolve(&self, name: &str) -> Result<Index> {
        resolver::resolve(name)
    }

    /// Current value of a single parameter, in the active units.
    ///
    /// Groups and text-only parameters read as 0; use [`Config::get_object`]
    /// for those.
    pub fn get(&mut self, machine: &mut dyn Machine, index: Index) -> Result<f32> {
        let mut ctx = Context::new(&mut self.state, machine);
        dispatch::get_cmd(&mut ctx, index).map(|cmd| cmd.value)
    }

    /// Read `index` into the pool; groups and the status report expand into
    /// children of the returned root.
    pub fn get_object(&mut self, machine: &mut dyn Machine, index: Index) -> Result<&CmdPool> {
        self.pool.reset_to(index)?;
        let mut ctx = Context::new(&mut self.state, machine);
        dispatch::get(&mut ctx, &mut self.pool)?;
        Ok(&self.pool)
    }

    /// Set a single parameter and persist it.
    ///
    /// Returns the value as applied, which differs from `value` when the
    /// parameter clamps its input.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnrecognizedCommand`] for an out-of-range index
    /// - [`ConfigError::PersistenceWriteFailure`] if the NVM write fails; the
    ///   new value stays live
    pub fn set(&mut self, machine: &mut dyn Machine, index: Index, value: f32) -> Result<f32> {
        let mut cmd = CmdObject::for_index(index)?;
        cmd.set_float(value);
        let mut ctx = Context::new(&mut self.state, machine);
        dispatch::set_value(&mut ctx, index, &mut cmd)?;
        persist(&self.state, &mut self.profile, index, &cmd)?;
        Ok(cmd.value)
    }

    /// Hand a gcode block to the interpreter through the `gc` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Interpreter`] with the interpreter's status if the
    /// block is rejected.
    pub fn run_gcode(&mut self, machine: &mut dyn Machine, block: &str) -> Result<()> {
        let mut cmd = CmdObject::for_index(GCODE_INDEX)?;
        cmd.set_string(block);
        let mut ctx = Context::new(&mut self.state, machine);
        dispatch::set_value(&mut ctx, GCODE_INDEX, &mut cmd)
    }

    /// Apply the structured request built in the pool and persist the result.
    ///
    /// Group children each keep their own status; the call succeeds once
    /// every child has been tried. A status report request replaces the
    /// report specification and persists all report slots.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnrecognizedCommand`] if the root is unbound
    /// - [`ConfigError::PersistenceWriteFailure`] if any NVM write fails
    pub fn set_object(&mut self, machine: &mut dyn Machine) -> Result<()> {
        let index = self.pool.root().index.ok_or(ConfigError::UnrecognizedCommand)?;
        let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
        let mut ctx = Context::new(&mut self.state, machine);
        dispatch::set(&mut ctx, &mut self.pool)?;

        match d.setter {
            Setter::StatusReport => persist_status_spec(&self.state, &mut self.profile),
            Setter::Group => {
                let mut result = Ok(());
                for slot in self.pool.children() {
                    let Some(child) = self.pool.get(slot) else {
                        continue;
                    };
                    let Some(child_index) = child.index else {
                        continue;
                    };
                    if let Err(e) = persist(&self.state, &mut self.profile, child_index, child) {
                        result = Err(e);
                    }
                }
                result
            }
            _ => persist(&self.state, &mut self.profile, index, self.pool.root()),
        }
    }

    /// Print the current value(s) of `index`
    pub fn print(
        &mut self,
        machine: &mut dyn Machine,
        index: Index,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut ctx = Context::new(&mut self.state, machine);
        print::print(&mut ctx, &mut self.pool, index, out)
    }

    /// Handle one line of text configuration input.
    ///
    /// - `$xfr=1200` sets, persists and prints the parameter
    /// - `$xfr` prints the parameter
    /// - `$x` prints every member of the group
    ///
    /// An unknown name is echoed back with an `[unrecognized command]` marker
    /// and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnrecognizedCommand`] if the name does not resolve
    /// - [`ConfigError::PersistenceWriteFailure`] if the NVM write fails; the
    ///   value is still applied and printed
    /// - [`ConfigError::OutputFailure`] if `out` rejects a write
    pub fn config_parser(
        &mut self,
        machine: &mut dyn Machine,
        line: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut cmd = CmdObject::new();
        let index = match parser::parse(line, &mut cmd) {
            Ok(index) => index,
            Err(e) => {
                writeln!(out, "{} [unrecognized command]", line.trim())?;
                return Err(e);
            }
        };

        let mut persisted = Ok(());
        if cmd.has_value() {
            log_debug!("set {} = {}", cmd.token.as_str(), cmd.value);
            let mut ctx = Context::new(&mut self.state, &mut *machine);
            dispatch::set_value(&mut ctx, index, &mut cmd)?;
            persisted = persist(&self.state, &mut self.profile, index, &cmd);
        }
        self.print(machine, index, out)?;
        persisted
    }

    /// Write the raw NVM contents for `range` to `out`
    pub fn nvm_dump(&mut self, range: Range<Index>, out: &mut dyn Write) -> Result<()> {
        self.profile.dump(range, out)
    }

    /// Value persisted for `index`
    pub fn read_persisted(&mut self, index: Index) -> Result<f32> {
        self.profile.read_value(index)
    }
}

//! Boot-time initialization
//!
//! Runs once at power-up. The version stamp in slot 0 decides what happens:
//!
//! - stamp equals the build number: every persisted value is loaded from NVM
//!   and applied through its setter (`Loaded`)
//! - anything else, including erased memory: every compiled default is
//!   applied and written, the default status report is installed, and the
//!   stamp is written last (`DefaultsWritten`)
//!
//! Units are forced to millimeters first so stored values are canonical.
//! NVM failures are logged and never abort the pass.

use super::{persist_status_spec, Config};
use crate::platform::NvmInterface;
use crate::{log_info, log_warn};
use cnc_config_core::cmd::CmdObject;
use cnc_config_core::dispatch::{persisted_value, set_value, Context};
use cnc_config_core::registry::{
    descriptor, Descriptor, Index, CONFIG_VERSION_INDEX, START_GROUPS, START_STATUS_SLOTS,
};
use cnc_config_core::report::init_status_report;
use cnc_config_core::traits::Machine;
use cnc_config_core::UnitsMode;

/// Outcome of boot-time initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    /// Init has not run
    Uninitialized,
    /// Values were loaded from NVM
    Loaded,
    /// NVM was missing or out of date; defaults were applied and written
    DefaultsWritten,
}

/// Entries loaded at boot, in registry order
fn persisted_entries() -> impl Iterator<Item = (Index, &'static Descriptor)> {
    (0..START_GROUPS)
        .filter(|&i| i != CONFIG_VERSION_INDEX)
        .filter_map(|i| descriptor(i).map(|d| (i, d)))
        .filter(|(_, d)| d.is_persisted())
}

fn is_status_slot(index: Index) -> bool {
    (START_STATUS_SLOTS..START_GROUPS).contains(&index)
}

impl<N: NvmInterface> Config<N> {
    /// Load configuration from NVM, or populate RAM and NVM with defaults
    /// when the stored stamp does not match this build.
    pub fn bulk_init(&mut self, machine: &mut dyn Machine) -> InitState {
        machine.set_units_mode(UnitsMode::Millimeters);

        let stamp = self.state.version;
        let stored = match self.profile.read_stamp() {
            Ok(stored) => Some(stored),
            Err(_) => {
                log_warn!("NVM stamp unreadable");
                None
            }
        };

        self.init_state = if stored == Some(stamp) {
            log_info!("Loading configs from NVM (version {})", stamp);
            self.load_all(machine);
            InitState::Loaded
        } else {
            log_info!("Initializing configs to default values (version {})", stamp);
            self.write_defaults(machine);
            InitState::DefaultsWritten
        };
        self.init_state
    }

    /// Apply compiled defaults without touching NVM.
    ///
    /// Used where no NVM is available, such as in simulation. The init state
    /// is left unchanged.
    pub fn apply_defaults(&mut self, machine: &mut dyn Machine) {
        machine.set_units_mode(UnitsMode::Millimeters);
        for (index, d) in persisted_entries() {
            self.apply_default(&mut *machine, index, d);
        }
        init_status_report(&mut self.state);
    }

    fn apply_default(
        &mut self,
        machine: &mut dyn Machine,
        index: Index,
        d: &Descriptor,
    ) -> CmdObject {
        let mut cmd = CmdObject::new();
        cmd.index = Some(index);
        cmd.set_float(d.default);
        let mut ctx = Context::new(&mut self.state, machine);
        if set_value(&mut ctx, index, &mut cmd).is_err() {
            log_warn!("Default rejected for {} ({})", d.token, index);
        }
        cmd
    }

    fn load_all(&mut self, machine: &mut dyn Machine) {
        let mut skipped = 0u32;
        for (index, d) in persisted_entries() {
            let value = match self.profile.read_value(index) {
                Ok(value) if value.is_finite() => value,
                _ => {
                    log_warn!("NVM slot unusable for {} ({})", d.token, index);
                    skipped += 1;
                    continue;
                }
            };
            let mut cmd = CmdObject::new();
            cmd.index = Some(index);
            cmd.set_float(value);
            let mut ctx = Context::new(&mut self.state, &mut *machine);
            if set_value(&mut ctx, index, &mut cmd).is_err() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log_warn!("{} NVM slots skipped", skipped);
        }
    }

    fn write_defaults(&mut self, machine: &mut dyn Machine) {
        let mut failures = 0u32;
        for (index, d) in persisted_entries().filter(|&(i, _)| !is_status_slot(i)) {
            let cmd = self.apply_default(&mut *machine, index, d);
            let value = persisted_value(&self.state, index, &cmd);
            if self.profile.write_value(index, value).is_err() {
                log_warn!("Failed to update NVM for {} ({})", d.token, index);
                failures += 1;
            }
        }

        init_status_report(&mut self.state);
        if persist_status_spec(&self.state, &mut self.profile).is_err() {
            failures += 1;
        }

        if self.profile.write_stamp(self.state.version).is_err() {
            log_warn!("Failed to write NVM version stamp");
            failures += 1;
        }
        if failures > 0 {
            log_warn!("{} NVM writes failed during init", failures);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NVM_VALUE_LEN;
    use crate::platform::mock::MockNvm;
    use cnc_config_core::registry::{defaults, index_of, GCODE_INDEX, STATUS_REPORT_INDEX};
    use cnc_config_core::report::spec_indices;
    use cnc_config_core::state::BuildInfo;
    use cnc_config_core::traits::{MachineCall, MockMachine};

    const BUILD: BuildInfo = BuildInfo {
        firmware_version: 0.93,
        build_number: 331.02,
    };

    fn eligible_count() -> u32 {
        persisted_entries().count() as u32
    }

    fn slot_address(index: Index) -> u32 {
        index as u32 * NVM_VALUE_LEN
    }

    #[test]
    fn test_eligible_entries_exclude_actions() {
        assert!(persisted_entries().all(|(i, _)| i != GCODE_INDEX && i != STATUS_REPORT_INDEX));
        assert!(persisted_entries().any(|(i, _)| i == index_of("xfr")));
        assert!(persisted_entries().any(|(i, _)| i == index_of("sr19")));
        assert!(persisted_entries().all(|(i, _)| i < START_GROUPS));
    }

    #[test]
    fn test_erased_nvm_writes_defaults() {
        let mut machine = MockMachine::new();
        let mut config = Config::new(MockNvm::new(), BUILD).unwrap();

        assert_eq!(config.init_state(), InitState::Uninitialized);
        assert_eq!(config.bulk_init(&mut machine), InitState::DefaultsWritten);

        let nvm = config.profile().device();
        // every eligible slot plus the stamp
        assert_eq!(nvm.total_writes(), eligible_count() + 1);
        assert_eq!(nvm.write_count(slot_address(GCODE_INDEX)), 0);
        assert_eq!(nvm.write_count(slot_address(STATUS_REPORT_INDEX)), 0);
        assert_eq!(config.read_persisted(CONFIG_VERSION_INDEX).unwrap(), 331.02);
        assert_eq!(
            config.read_persisted(index_of("xvm")).unwrap(),
            defaults::XY_VELOCITY_MAX
        );
        assert_eq!(
            config.state().axes[0].velocity_max,
            defaults::XY_VELOCITY_MAX
        );
        assert_eq!(
            spec_indices(config.state()).count(),
            defaults::STATUS_REPORT_DEFAULTS.len()
        );
        assert_eq!(
            config.read_persisted(index_of("sr00")).unwrap(),
            index_of("line") as f32
        );
    }

    #[test]
    fn test_matching_stamp_loads_without_writing() {
        let mut machine = MockMachine::new();
        let mut config = Config::new(MockNvm::new(), BUILD).unwrap();
        config.bulk_init(&mut machine);
        config.set(&mut machine, index_of("xvm"), 4321.0).unwrap();
        let nvm = config.profile_mut().device_mut();
        nvm.reset_counters();
        let nvm = core::mem::take(nvm);

        let mut machine = MockMachine::new();
        let mut config = Config::new(nvm, BUILD).unwrap();
        assert_eq!(config.bulk_init(&mut machine), InitState::Loaded);

        let nvm = config.profile().device();
        assert_eq!(nvm.total_writes(), 0);
        for index in [GCODE_INDEX, STATUS_REPORT_INDEX] {
            assert_eq!(nvm.read_count(slot_address(index)), 0);
        }
        assert_eq!(config.state().axes[0].velocity_max, 4321.0);
        assert_eq!(
            spec_indices(config.state()).count(),
            defaults::STATUS_REPORT_DEFAULTS.len()
        );
        // loaded motor settings reach the stepper driver
        assert!(machine.calls.contains(&MachineCall::Microsteps {
            motor: 0,
            microsteps: defaults::MOTOR_MICROSTEPS as u8
        }));
    }

    #[test]
    fn test_stale_stamp_rewrites_defaults() {
        let mut nvm = MockNvm::new();
        nvm.write(0, &330.0f32.to_le_bytes()).unwrap();
        nvm.write(slot_address(index_of("xvm")), &1.0f32.to_le_bytes())
            .unwrap();
        nvm.reset_counters();

        let mut machine = MockMachine::new();
        let mut config = Config::new(nvm, BUILD).unwrap();
        assert_eq!(config.bulk_init(&mut machine), InitState::DefaultsWritten);

        assert_eq!(
            config.profile().device().total_writes(),
            eligible_count() + 1
        );
        assert_eq!(
            config.read_persisted(index_of("xvm")).unwrap(),
            defaults::XY_VELOCITY_MAX
        );
        assert_eq!(config.read_persisted(CONFIG_VERSION_INDEX).unwrap(), 331.02);
    }

    #[test]
    fn test_write_failure_does_not_abort_init() {
        let mut nvm = MockNvm::new();
        nvm.inject_write_failure(slot_address(index_of("xvm")));

        let mut machine = MockMachine::new();
        let mut config = Config::new(nvm, BUILD).unwrap();
        assert_eq!(config.bulk_init(&mut machine), InitState::DefaultsWritten);

        assert_eq!(
            config.profile().device().total_writes(),
            eligible_count()
        );
        assert_eq!(
            config.state().axes[0].velocity_max,
            defaults::XY_VELOCITY_MAX
        );
        assert_eq!(config.read_persisted(CONFIG_VERSION_INDEX).unwrap(), 331.02);
    }

    #[test]
    fn test_init_forces_millimeters() {
        let mut machine = MockMachine::new();
        machine.units = UnitsMode::Inches;
        let mut config = Config::new(MockNvm::new(), BUILD).unwrap();
        config.bulk_init(&mut machine);

        assert_eq!(machine.calls[0], MachineCall::Units(UnitsMode::Millimeters));
        assert_eq!(
            config.read_persisted(index_of("xvm")).unwrap(),
            defaults::XY_VELOCITY_MAX
        );
    }

    #[test]
    fn test_corrupted_slot_is_skipped_on_load() {
        let mut machine = MockMachine::new();
        let mut config = Config::new(MockNvm::new(), BUILD).unwrap();
        config.bulk_init(&mut machine);
        let address = slot_address(index_of("yvm"));
        config
            .profile_mut()
            .device_mut()
            .write(address, &f32::NAN.to_le_bytes())
            .unwrap();
        let nvm = core::mem::take(config.profile_mut().device_mut());

        let mut config = Config::new(nvm, BUILD).unwrap();
        assert_eq!(config.bulk_init(&mut machine), InitState::Loaded);
        assert_eq!(config.state().axes[1].velocity_max, 0.0);
        assert_eq!(
            config.state().axes[0].velocity_max,
            defaults::XY_VELOCITY_MAX
        );
    }

    #[test]
    fn test_apply_defaults_leaves_nvm_alone() {
        let mut machine = MockMachine::new();
        let mut config = Config::new(MockNvm::new(), BUILD).unwrap();
        config.apply_defaults(&mut machine);

        assert_eq!(config.profile().device().total_writes(), 0);
        assert_eq!(config.init_state(), InitState::Uninitialized);
        assert_eq!(
            config.state().axes[0].velocity_max,
            defaults::XY_VELOCITY_MAX
        );
        assert_eq!(
            spec_indices(config.state()).count(),
            defaults::STATUS_REPORT_DEFAULTS.len()
        );
    }
}

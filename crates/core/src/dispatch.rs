//! Accessor dispatch
//!
//! Every read and write of a parameter goes through [`get_value`] /
//! [`set_value`], which select behavior from the descriptor's [`Getter`] and
//! [`Setter`]. Group and status report entries need a whole chain and are
//! reached through the pool-level [`get`] / [`set`].
//!
//! State and collaborators are passed in a [`Context`]; nothing here owns
//! global state.

use crate::cmd::{CmdObject, CmdPool, ValueType};
use crate::error::{ConfigError, Result};
use crate::registry::{defaults, descriptor, Descriptor, Getter, GroupTag, Index, Setter, ValueKind};
use crate::state::{AxisMode, ConfigState, Target};
use crate::traits::Machine;
use crate::units::UnitsMode;
use crate::{group, report};

/// Everything an accessor may touch
pub struct Context<'a> {
    pub cfg: &'a mut ConfigState,
    pub machine: &'a mut dyn Machine,
}

impl<'a> Context<'a> {
    pub fn new(cfg: &'a mut ConfigState, machine: &'a mut dyn Machine) -> Self {
        Self { cfg, machine }
    }

    /// Units applied to linear values; rotary-only modes count as millimeters
    pub fn linear_units(&self) -> UnitsMode {
        match self.machine.units_mode() {
            UnitsMode::Inches => UnitsMode::Inches,
            _ => UnitsMode::Millimeters,
        }
    }
}

/// Segment time in ms used to express the status interval
fn segment_ms() -> f32 {
    defaults::ESTD_SEGMENT_USEC / 1000.0
}

fn axis_of(d: &Descriptor) -> Option<usize> {
    match d.group {
        GroupTag::Axis(a) => Some(a as usize),
        _ => None,
    }
}

fn motor_of(d: &Descriptor) -> Option<usize> {
    match d.group {
        GroupTag::Motor(m) => Some(m as usize),
        _ => None,
    }
}

/// Read one value into `cmd`.
///
/// Group-class entries only mark `cmd` as a parent; use [`get`] to expand them.
///
/// # Errors
///
/// Returns [`ConfigError::UnrecognizedCommand`] for an out-of-range index.
pub fn get_value(ctx: &mut Context<'_>, index: Index, cmd: &mut CmdObject) -> Result<()> {
    let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
    cmd.index = Some(index);
    match d.getter {
        Getter::Nul => cmd.value_type = ValueType::Null,
        Getter::Byte | Getter::Int => cmd.set_int(ctx.cfg.load(d.target)),
        Getter::Float => cmd.set_float(ctx.cfg.load(d.target)),
        Getter::FloatUnits => {
            let units = ctx.linear_units();
            cmd.set_float(units.from_mm(ctx.cfg.load(d.target)));
        }
        Getter::MachineState => {
            let state = ctx.machine.machine_state();
            cmd.set_string(state.name());
            cmd.value = state.code() as f32;
        }
        Getter::Units => {
            let units = ctx.machine.units_mode();
            cmd.set_string(units.name());
            cmd.value = units.code() as f32;
        }
        Getter::AxisMode => {
            let code = ctx.cfg.load(d.target);
            let label = AxisMode::from_code(code as u8).map_or("", AxisMode::label);
            cmd.set_string(label);
            cmd.set_int(code);
        }
        Getter::StatusInterval => {
            cmd.set_float(ctx.cfg.load(d.target) * segment_ms());
        }
        Getter::Gcode => cmd.set_string(&ctx.cfg.gcode_block),
        Getter::Velocity => {
            let units = ctx.linear_units();
            cmd.set_float(units.from_mm(ctx.machine.runtime_velocity()));
        }
        Getter::MachinePosition | Getter::WorkPosition => {
            let axis = axis_of(d).ok_or(ConfigError::UnrecognizedCommand)?;
            let raw = if d.getter == Getter::MachinePosition {
                ctx.machine.machine_position(axis)
            } else {
                ctx.machine.work_position(axis)
            };
            let value = if d.kind == ValueKind::FloatUnits {
                ctx.linear_units().from_mm(raw)
            } else {
                raw
            };
            cmd.set_float(value);
        }
        Getter::StatusReport | Getter::Group | Getter::System | Getter::Query => {
            cmd.value_type = ValueType::Parent;
        }
    }
    Ok(())
}

/// Fresh command object for `index`, filled by [`get_value`]
pub fn get_cmd(ctx: &mut Context<'_>, index: Index) -> Result<CmdObject> {
    let mut cmd = CmdObject::for_index(index)?;
    get_value(ctx, index, &mut cmd)?;
    Ok(cmd)
}

fn is_numeric(cmd: &CmdObject) -> bool {
    matches!(
        cmd.value_type,
        ValueType::Bool | ValueType::Int32 | ValueType::Float
    )
}

/// Apply the value in `cmd`.
///
/// A command carrying no value (a query) is accepted and changes nothing.
/// The outcome is also recorded in `cmd.status`. Group-class setters act on
/// a chain; use [`set`] for them.
///
/// # Errors
///
/// - [`ConfigError::UnrecognizedCommand`] for an out-of-range index
/// - [`ConfigError::Interpreter`] when a gcode block is rejected
pub fn set_value(ctx: &mut Context<'_>, index: Index, cmd: &mut CmdObject) -> Result<()> {
    let result = apply(ctx, index, cmd);
    cmd.status = result;
    result
}

fn apply(ctx: &mut Context<'_>, index: Index, cmd: &mut CmdObject) -> Result<()> {
    let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
    cmd.index = Some(index);

    if d.setter == Setter::RunGcode {
        if cmd.value_type != ValueType::String {
            return Ok(());
        }
        ctx.cfg.gcode_block.clear();
        crate::cmd::push_truncated(&mut ctx.cfg.gcode_block, &cmd.string);
        return ctx
            .machine
            .execute_gcode(&ctx.cfg.gcode_block)
            .map_err(ConfigError::Interpreter);
    }
    if !is_numeric(cmd) {
        return Ok(());
    }

    let value = cmd.value;
    match d.setter {
        Setter::Nul | Setter::RunGcode | Setter::StatusReport | Setter::Group => {}
        Setter::Byte | Setter::Int | Setter::Float => ctx.cfg.store(d.target, value),
        Setter::FloatUnits => {
            let units = ctx.linear_units();
            ctx.cfg.store(d.target, units.to_mm(value));
        }
        Setter::StatusInterval => {
            let ms = value.clamp(
                defaults::STATUS_REPORT_MIN_MS,
                defaults::STATUS_REPORT_MAX_MS,
            );
            ctx.cfg.store(d.target, libm::ceilf(ms / segment_ms()));
            cmd.value = ms;
        }
        Setter::StepAngle | Setter::TravelPerRev => {
            let stored = if d.setter == Setter::TravelPerRev {
                ctx.linear_units().to_mm(value)
            } else {
                value
            };
            ctx.cfg.store(d.target, stored);
            if let Some(m) = motor_of(d) {
                ctx.cfg.motors[m].recompute_steps_per_unit();
            }
        }
        Setter::Microsteps => {
            ctx.cfg.store(d.target, value);
            if let Some(m) = motor_of(d) {
                ctx.cfg.motors[m].recompute_steps_per_unit();
                let microsteps = ctx.cfg.motors[m].microsteps;
                ctx.machine.set_microsteps(m, microsteps);
            }
        }
        Setter::Polarity => {
            ctx.cfg.store(d.target, value);
            if let Some(m) = motor_of(d) {
                let polarity = ctx.cfg.motors[m].polarity;
                ctx.machine.set_polarity(m, polarity);
            }
        }
        Setter::Serial(flag) => {
            ctx.cfg.store(d.target, value);
            ctx.machine.set_control(flag, value != 0.0);
        }
    }
    Ok(())
}

/// Read the entry bound to the pool root, expanding groups and the status
/// report into child objects.
pub fn get(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    let index = pool.root().index.ok_or(ConfigError::UnrecognizedCommand)?;
    let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
    match d.getter {
        Getter::Group | Getter::System | Getter::Query => group::get_group(ctx, pool),
        Getter::StatusReport => report::get_report(ctx, pool),
        _ => get_value(ctx, index, pool.root_mut()),
    }
}

/// Apply the chain rooted in the pool.
pub fn set(ctx: &mut Context<'_>, pool: &mut CmdPool) -> Result<()> {
    let index = pool.root().index.ok_or(ConfigError::UnrecognizedCommand)?;
    let d = descriptor(index).ok_or(ConfigError::UnrecognizedCommand)?;
    match d.setter {
        Setter::Group => group::set_group(ctx, pool),
        Setter::StatusReport => report::set_report(ctx, pool),
        _ => set_value(ctx, index, pool.root_mut()),
    }
}

/// Value to write to NVM after a set.
///
/// Stored fields are persisted in their canonical form (millimeters), so a
/// value set in inch mode loads correctly at boot. The status interval is
/// persisted in ms, the unit its setter takes.
pub fn persisted_value(cfg: &ConfigState, index: Index, cmd: &CmdObject) -> f32 {
    match descriptor(index) {
        Some(d) if d.setter == Setter::StatusInterval => cmd.value,
        Some(d) if d.target != Target::None => cfg.load(d.target),
        _ => cmd.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::index_of;
    use crate::state::BuildInfo;
    use crate::traits::{MachineCall, MockMachine, SerialFlags};

    const BUILD: BuildInfo = BuildInfo {
        firmware_version: 0.93,
        build_number: 331.02,
    };

    fn set_number(ctx: &mut Context<'_>, token: &str, value: f32) -> CmdObject {
        let index = index_of(token);
        let mut cmd = CmdObject::for_index(index).unwrap();
        cmd.set_float(value);
        set_value(ctx, index, &mut cmd).unwrap();
        cmd
    }

    fn read(ctx: &mut Context<'_>, token: &str) -> CmdObject {
        get_cmd(ctx, index_of(token)).unwrap()
    }

    #[test]
    fn test_set_get_identity_mm() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);

        set_number(&mut ctx, "xfr", 1200.0);
        let cmd = read(&mut ctx, "xfr");
        assert_eq!(cmd.value, 1200.0);
        assert_eq!(cmd.value_type, ValueType::Float);
    }

    #[test]
    fn test_inch_mode_converts_linear_values() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.units = UnitsMode::Inches;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        set_number(&mut ctx, "xtm", 10.0);
        assert!((ctx.cfg.axes[0].travel_max - 254.0).abs() < 1e-3);
        let cmd = read(&mut ctx, "xtm");
        assert!((cmd.value - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotary_never_converted() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.units = UnitsMode::Inches;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        set_number(&mut ctx, "afr", 3600.0);
        assert_eq!(ctx.cfg.axes[3].feedrate_max, 3600.0);
        assert_eq!(read(&mut ctx, "afr").value, 3600.0);
    }

    #[test]
    fn test_microsteps_recompute_and_notify() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        {
            let mut ctx = Context::new(&mut cfg, &mut machine);
            set_number(&mut ctx, "2sa", 1.8);
            set_number(&mut ctx, "2tr", 1.25);
            set_number(&mut ctx, "2mi", 8.0);
        }
        assert_eq!(cfg.motors[1].microsteps, 8);
        assert!((cfg.motors[1].steps_per_unit.get() - 1280.0).abs() < 1e-2);
        assert_eq!(
            machine.calls.last(),
            Some(&MachineCall::Microsteps {
                motor: 1,
                microsteps: 8
            })
        );
    }

    #[test]
    fn test_polarity_notifies_stepper() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        {
            let mut ctx = Context::new(&mut cfg, &mut machine);
            set_number(&mut ctx, "4po", 1.0);
        }
        assert_eq!(
            machine.calls.as_slice(),
            &[MachineCall::Polarity {
                motor: 3,
                polarity: 1
            }]
        );
    }

    #[test]
    fn test_serial_flag_issues_control_call() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        {
            let mut ctx = Context::new(&mut cfg, &mut machine);
            set_number(&mut ctx, "ex", 0.0);
            set_number(&mut ctx, "ic", 1.0);
        }
        assert_eq!(cfg.enable_xon, 0);
        assert_eq!(cfg.ignore_cr, 1);
        assert_eq!(
            machine.calls.as_slice(),
            &[
                MachineCall::Serial {
                    flag: SerialFlags::XON_XOFF,
                    enabled: false
                },
                MachineCall::Serial {
                    flag: SerialFlags::IGNORE_CR,
                    enabled: true
                },
            ]
        );
    }

    #[test]
    fn test_status_interval_clamps_and_converts() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);

        let cmd = set_number(&mut ctx, "si", 205.0);
        assert_eq!(cmd.value, 205.0);
        // 205 ms over 10 ms segments rounds up to 21
        assert_eq!(ctx.cfg.status_report_interval, 21);
        assert_eq!(read(&mut ctx, "si").value, 210.0);

        let cmd = set_number(&mut ctx, "si", 1.0);
        assert_eq!(cmd.value, defaults::STATUS_REPORT_MIN_MS);
        assert_eq!(ctx.cfg.status_report_interval, 5);
    }

    #[test]
    fn test_read_only_entries_ignore_set() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);

        set_number(&mut ctx, "fv", 9.0);
        set_number(&mut ctx, "xpos", 9.0);
        assert_eq!(read(&mut ctx, "fv").value, 0.93);
    }

    #[test]
    fn test_live_values() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.positions[1] = 25.4;
        machine.machine_positions[3] = 90.0;
        machine.velocity = 254.0;
        machine.units = UnitsMode::Inches;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        assert!((read(&mut ctx, "ypos").value - 1.0).abs() < 1e-5);
        assert_eq!(read(&mut ctx, "aabs").value, 90.0);
        assert!((read(&mut ctx, "vel").value - 10.0).abs() < 1e-4);
        let unit = read(&mut ctx, "unit");
        assert_eq!(unit.string.as_str(), "inch");
        assert_eq!(unit.value, 0.0);
    }

    #[test]
    fn test_machine_state_and_axis_mode_strings() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.state = crate::state::MachineState::Hold;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        assert_eq!(read(&mut ctx, "stat").string.as_str(), "hold");
        set_number(&mut ctx, "yam", 7.0);
        let cmd = read(&mut ctx, "yam");
        assert_eq!(cmd.value, 7.0);
        assert_eq!(cmd.string.as_str(), "[slave XY]");
    }

    #[test]
    fn test_run_gcode_forwards_status() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.gcode_status = 12;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        let index = index_of("gc");
        let mut cmd = CmdObject::for_index(index).unwrap();
        cmd.set_string("g0 x10");
        assert_eq!(
            set_value(&mut ctx, index, &mut cmd),
            Err(ConfigError::Interpreter(12))
        );
        assert_eq!(cmd.status, Err(ConfigError::Interpreter(12)));
        assert_eq!(read(&mut ctx, "gc").string.as_str(), "g0 x10");
    }

    #[test]
    fn test_query_changes_nothing() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);

        set_number(&mut ctx, "ja", 1000.0);
        let index = index_of("ja");
        let mut cmd = CmdObject::for_index(index).unwrap();
        set_value(&mut ctx, index, &mut cmd).unwrap();
        assert_eq!(ctx.cfg.junction_acceleration, 1000.0);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        let mut ctx = Context::new(&mut cfg, &mut machine);
        let mut cmd = CmdObject::new();
        assert_eq!(
            get_value(&mut ctx, crate::registry::REGISTRY_LEN, &mut cmd),
            Err(ConfigError::UnrecognizedCommand)
        );
    }

    #[test]
    fn test_persisted_value_is_canonical() {
        let mut cfg = ConfigState::new(BUILD);
        let mut machine = MockMachine::new();
        machine.units = UnitsMode::Inches;
        let mut ctx = Context::new(&mut cfg, &mut machine);

        let cmd = set_number(&mut ctx, "xvm", 100.0);
        let persisted = persisted_value(ctx.cfg, index_of("xvm"), &cmd);
        assert!((persisted - 2540.0).abs() < 1e-2);
    }
}

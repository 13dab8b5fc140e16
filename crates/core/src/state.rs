//! Configuration state
//!
//! [`ConfigState`] holds every value the registry binds to. Descriptors name
//! their backing field through a [`Target`], and all reads and writes go
//! through [`ConfigState::load`] / [`ConfigState::store`], which convert
//! between the dispatch value type (`f32`) and each field's native type.

use core::sync::atomic::{AtomicU32, Ordering};
use heapless::String;

/// Number of axes (X, Y, Z, A, B, C)
pub const AXES: usize = 6;

/// Number of stepper motors
pub const MOTORS: usize = 4;

/// Number of coordinate systems (G54..G59)
pub const COORDS: usize = 6;

/// Number of status report slots
pub const STATUS_REPORT_LEN: usize = 20;

/// Capacity of the stored gcode block
pub const GCODE_BLOCK_LEN: usize = 80;

/// Axis letters in axis-index order
pub const AXIS_LETTERS: [char; AXES] = ['x', 'y', 'z', 'a', 'b', 'c'];

/// First rotary axis index (A)
pub const FIRST_ROTARY_AXIS: u8 = 3;

/// Firmware identification compiled into the build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildInfo {
    /// Firmware version number
    pub firmware_version: f32,
    /// Firmware build number, also the persisted config version stamp
    pub build_number: f32,
}

/// Axis operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    Disabled = 0,
    Standard,
    Inhibited,
    Radius,
    SlaveX,
    SlaveY,
    SlaveZ,
    SlaveXY,
    SlaveXZ,
    SlaveYZ,
    SlaveXYZ,
}

impl AxisMode {
    /// Decode a stored mode byte
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => AxisMode::Disabled,
            1 => AxisMode::Standard,
            2 => AxisMode::Inhibited,
            3 => AxisMode::Radius,
            4 => AxisMode::SlaveX,
            5 => AxisMode::SlaveY,
            6 => AxisMode::SlaveZ,
            7 => AxisMode::SlaveXY,
            8 => AxisMode::SlaveXZ,
            9 => AxisMode::SlaveYZ,
            10 => AxisMode::SlaveXYZ,
            _ => return None,
        })
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            AxisMode::Disabled => "[disabled]",
            AxisMode::Standard => "[standard]",
            AxisMode::Inhibited => "[inhibited]",
            AxisMode::Radius => "[radius]",
            AxisMode::SlaveX => "[slave X]",
            AxisMode::SlaveY => "[slave Y]",
            AxisMode::SlaveZ => "[slave Z]",
            AxisMode::SlaveXY => "[slave XY]",
            AxisMode::SlaveXZ => "[slave XZ]",
            AxisMode::SlaveYZ => "[slave YZ]",
            AxisMode::SlaveXYZ => "[slave XYZ]",
        }
    }
}

/// Machine state as reported by the motion subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Reset = 0,
    Run,
    Stop,
    Hold,
    Resume,
    Homing,
}

impl MachineState {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            MachineState::Reset => "reset",
            MachineState::Run => "run",
            MachineState::Stop => "stop",
            MachineState::Hold => "hold",
            MachineState::Resume => "resume",
            MachineState::Homing => "homing",
        }
    }
}

/// `f32` published with a single atomic store
///
/// The step generator reads steps-per-unit from interrupt context; storing
/// the bit pattern in one `AtomicU32` means the reader never sees a torn
/// value. Only `load`/`store` are used, so this works on cores without
/// atomic read-modify-write.
#[derive(Debug, Default)]
pub struct SharedF32(AtomicU32);

impl SharedF32 {
    pub const fn zero() -> Self {
        Self(AtomicU32::new(0))
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// Per-motor settings
#[derive(Debug, Default)]
pub struct MotorConfig {
    pub motor_map: u8,
    pub step_angle: f32,
    pub travel_rev: f32,
    pub microsteps: u8,
    pub polarity: u8,
    pub power_mode: u8,
    /// Derived from step angle, microsteps and travel per revolution
    pub steps_per_unit: SharedF32,
}

impl MotorConfig {
    /// Recompute steps per unit and publish it to the step generator.
    ///
    /// Leaves the previous value in place while the inputs are incomplete
    /// (zero microsteps or zero travel), which happens transiently during
    /// bulk load.
    pub fn recompute_steps_per_unit(&self) {
        let steps = 360.0 / (self.step_angle / self.microsteps as f32) / self.travel_rev;
        if steps.is_finite() && steps > 0.0 {
            self.steps_per_unit.set(steps);
        }
    }
}

/// Per-axis settings
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisConfig {
    pub axis_mode: u8,
    pub feedrate_max: f32,
    pub velocity_max: f32,
    pub travel_max: f32,
    pub jerk_max: f32,
    pub junction_dev: f32,
    pub radius: f32,
    pub switch_mode: u8,
    pub search_velocity: f32,
    pub latch_velocity: f32,
    pub zero_offset: f32,
}

/// Motor field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorField {
    MotorMap,
    StepAngle,
    TravelPerRev,
    Microsteps,
    Polarity,
    PowerMode,
}

/// Axis field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisField {
    AxisMode,
    FeedrateMax,
    VelocityMax,
    TravelMax,
    JerkMax,
    JunctionDeviation,
    Radius,
    SwitchMode,
    SearchVelocity,
    LatchVelocity,
    ZeroOffset,
}

/// Backing field of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Action or derived entry with no stored value
    None,
    ConfigVersion,
    FirmwareVersion,
    FirmwareBuild,
    LineNumber,
    StatusInterval,
    SelectPlane,
    UnitsMode,
    CoordSystem,
    PathControl,
    DistanceMode,
    EnableAcceleration,
    JunctionAcceleration,
    MinLineSegment,
    MinArcSegment,
    MinSegmentTime,
    IgnoreCr,
    IgnoreLf,
    EnableCr,
    EnableEcho,
    EnableXon,
    Motor(u8, MotorField),
    Axis(u8, AxisField),
    Offset(u8, u8),
    StatusSlot(u8),
}

/// All configuration values the registry binds to
#[derive(Debug)]
pub struct ConfigState {
    /// Config version; set to the build number at boot
    pub version: f32,
    pub firmware_version: f32,
    pub firmware_build: f32,
    pub line_number: u32,
    /// Status report interval in segment counts
    pub status_report_interval: u8,

    // gcode power-on defaults
    pub select_plane: u8,
    pub units_mode: u8,
    pub coord_system: u8,
    pub path_control: u8,
    pub distance_mode: u8,

    pub enable_acceleration: u8,
    pub junction_acceleration: f32,
    pub min_segment_len: f32,
    pub arc_segment_len: f32,
    pub estd_segment_usec: f32,

    pub ignore_cr: u8,
    pub ignore_lf: u8,
    pub enable_cr: u8,
    pub enable_echo: u8,
    pub enable_xon: u8,

    pub motors: [MotorConfig; MOTORS],
    pub axes: [AxisConfig; AXES],
    pub offsets: [[f32; AXES]; COORDS],
    /// Registry indices included in a status report; 0 marks an unused slot
    pub status_report_spec: [u32; STATUS_REPORT_LEN],
    /// Last block handed to the gcode interpreter
    pub gcode_block: String<GCODE_BLOCK_LEN>,
}

impl ConfigState {
    /// Create a zeroed state stamped with the given build
    pub fn new(build: BuildInfo) -> Self {
        Self {
            version: build.build_number,
            firmware_version: build.firmware_version,
            firmware_build: build.build_number,
            line_number: 0,
            status_report_interval: 0,
            select_plane: 0,
            units_mode: 0,
            coord_system: 0,
            path_control: 0,
            distance_mode: 0,
            enable_acceleration: 0,
            junction_acceleration: 0.0,
            min_segment_len: 0.0,
            arc_segment_len: 0.0,
            estd_segment_usec: 0.0,
            ignore_cr: 0,
            ignore_lf: 0,
            enable_cr: 0,
            enable_echo: 0,
            enable_xon: 0,
            motors: Default::default(),
            axes: [AxisConfig::default(); AXES],
            offsets: [[0.0; AXES]; COORDS],
            status_report_spec: [0; STATUS_REPORT_LEN],
            gcode_block: String::new(),
        }
    }

    /// Read a backing field as `f32`
    pub fn load(&self, target: Target) -> f32 {
        match target {
            Target::None => 0.0,
            Target::ConfigVersion => self.version,
            Target::FirmwareVersion => self.firmware_version,
            Target::FirmwareBuild => self.firmware_build,
            Target::LineNumber => self.line_number as f32,
            Target::StatusInterval => self.status_report_interval as f32,
            Target::SelectPlane => self.select_plane as f32,
            Target::UnitsMode => self.units_mode as f32,
            Target::CoordSystem => self.coord_system as f32,
            Target::PathControl => self.path_control as f32,
            Target::DistanceMode => self.distance_mode as f32,
            Target::EnableAcceleration => self.enable_acceleration as f32,
            Target::JunctionAcceleration => self.junction_acceleration,
            Target::MinLineSegment => self.min_segment_len,
            Target::MinArcSegment => self.arc_segment_len,
            Target::MinSegmentTime => self.estd_segment_usec,
            Target::IgnoreCr => self.ignore_cr as f32,
            Target::IgnoreLf => self.ignore_lf as f32,
            Target::EnableCr => self.enable_cr as f32,
            Target::EnableEcho => self.enable_echo as f32,
            Target::EnableXon => self.enable_xon as f32,
            Target::Motor(m, field) => {
                let motor = &self.motors[m as usize];
                match field {
                    MotorField::MotorMap => motor.motor_map as f32,
                    MotorField::StepAngle => motor.step_angle,
                    MotorField::TravelPerRev => motor.travel_rev,
                    MotorField::Microsteps => motor.microsteps as f32,
                    MotorField::Polarity => motor.polarity as f32,
                    MotorField::PowerMode => motor.power_mode as f32,
                }
            }
            Target::Axis(a, field) => {
                let axis = &self.axes[a as usize];
                match field {
                    AxisField::AxisMode => axis.axis_mode as f32,
                    AxisField::FeedrateMax => axis.feedrate_max,
                    AxisField::VelocityMax => axis.velocity_max,
                    AxisField::TravelMax => axis.travel_max,
                    AxisField::JerkMax => axis.jerk_max,
                    AxisField::JunctionDeviation => axis.junction_dev,
                    AxisField::Radius => axis.radius,
                    AxisField::SwitchMode => axis.switch_mode as f32,
                    AxisField::SearchVelocity => axis.search_velocity,
                    AxisField::LatchVelocity => axis.latch_velocity,
                    AxisField::ZeroOffset => axis.zero_offset,
                }
            }
            Target::Offset(coord, axis) => self.offsets[coord as usize][axis as usize],
            Target::StatusSlot(slot) => self.status_report_spec[slot as usize] as f32,
        }
    }

    /// Write a backing field from `f32`
    ///
    /// Byte and integer fields take the saturating conversion (`NaN` becomes 0).
    pub fn store(&mut self, target: Target, value: f32) {
        let byte = value as u8;
        match target {
            Target::None => {}
            Target::ConfigVersion => self.version = value,
            Target::FirmwareVersion => self.firmware_version = value,
            Target::FirmwareBuild => self.firmware_build = value,
            Target::LineNumber => self.line_number = value as u32,
            Target::StatusInterval => self.status_report_interval = byte,
            Target::SelectPlane => self.select_plane = byte,
            Target::UnitsMode => self.units_mode = byte,
            Target::CoordSystem => self.coord_system = byte,
            Target::PathControl => self.path_control = byte,
            Target::DistanceMode => self.distance_mode = byte,
            Target::EnableAcceleration => self.enable_acceleration = byte,
            Target::JunctionAcceleration => self.junction_acceleration = value,
            Target::MinLineSegment => self.min_segment_len = value,
            Target::MinArcSegment => self.arc_segment_len = value,
            Target::MinSegmentTime => self.estd_segment_usec = value,
            Target::IgnoreCr => self.ignore_cr = byte,
            Target::IgnoreLf => self.ignore_lf = byte,
            Target::EnableCr => self.enable_cr = byte,
            Target::EnableEcho => self.enable_echo = byte,
            Target::EnableXon => self.enable_xon = byte,
            Target::Motor(m, field) => {
                let motor = &mut self.motors[m as usize];
                match field {
                    MotorField::MotorMap => motor.motor_map = byte,
                    MotorField::StepAngle => motor.step_angle = value,
                    MotorField::TravelPerRev => motor.travel_rev = value,
                    MotorField::Microsteps => motor.microsteps = byte,
                    MotorField::Polarity => motor.polarity = byte,
                    MotorField::PowerMode => motor.power_mode = byte,
                }
            }
            Target::Axis(a, field) => {
                let axis = &mut self.axes[a as usize];
                match field {
                    AxisField::AxisMode => axis.axis_mode = byte,
                    AxisField::FeedrateMax => axis.feedrate_max = value,
                    AxisField::VelocityMax => axis.velocity_max = value,
                    AxisField::TravelMax => axis.travel_max = value,
                    AxisField::JerkMax => axis.jerk_max = value,
                    AxisField::JunctionDeviation => axis.junction_dev = value,
                    AxisField::Radius => axis.radius = value,
                    AxisField::SwitchMode => axis.switch_mode = byte,
                    AxisField::SearchVelocity => axis.search_velocity = value,
                    AxisField::LatchVelocity => axis.latch_velocity = value,
                    AxisField::ZeroOffset => axis.zero_offset = value,
                }
            }
            Target::Offset(coord, axis) => self.offsets[coord as usize][axis as usize] = value,
            Target::StatusSlot(slot) => self.status_report_spec[slot as usize] = value as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILD: BuildInfo = BuildInfo {
        firmware_version: 0.93,
        build_number: 331.02,
    };

    #[test]
    fn test_new_state_is_stamped() {
        let state = ConfigState::new(BUILD);
        assert_eq!(state.version, 331.02);
        assert_eq!(state.firmware_build, 331.02);
        assert_eq!(state.firmware_version, 0.93);
    }

    #[test]
    fn test_byte_store_saturates() {
        let mut state = ConfigState::new(BUILD);
        state.store(Target::Motor(0, MotorField::Microsteps), 300.0);
        assert_eq!(state.motors[0].microsteps, 255);
        state.store(Target::Motor(0, MotorField::Microsteps), -4.0);
        assert_eq!(state.motors[0].microsteps, 0);
    }

    #[test]
    fn test_axis_and_offset_round_trip() {
        let mut state = ConfigState::new(BUILD);
        state.store(Target::Axis(2, AxisField::FeedrateMax), 1200.5);
        state.store(Target::Offset(1, 4), -3.25);
        assert_eq!(state.load(Target::Axis(2, AxisField::FeedrateMax)), 1200.5);
        assert_eq!(state.axes[2].feedrate_max, 1200.5);
        assert_eq!(state.offsets[1][4], -3.25);
    }

    #[test]
    fn test_steps_per_unit() {
        let mut state = ConfigState::new(BUILD);
        let motor = &mut state.motors[1];
        motor.step_angle = 1.8;
        motor.travel_rev = 1.25;
        motor.microsteps = 8;
        motor.recompute_steps_per_unit();
        assert!((motor.steps_per_unit.get() - 1280.0).abs() < 1e-2);
    }

    #[test]
    fn test_steps_per_unit_keeps_previous_on_incomplete_inputs() {
        let mut state = ConfigState::new(BUILD);
        let motor = &mut state.motors[0];
        motor.steps_per_unit.set(42.0);
        motor.step_angle = 1.8;
        motor.travel_rev = 0.0;
        motor.microsteps = 8;
        motor.recompute_steps_per_unit();
        assert_eq!(motor.steps_per_unit.get(), 42.0);
    }

    #[test]
    fn test_axis_mode_labels() {
        assert_eq!(AxisMode::from_code(1).map(AxisMode::label), Some("[standard]"));
        assert_eq!(AxisMode::from_code(10).map(AxisMode::label), Some("[slave XYZ]"));
        assert_eq!(AxisMode::from_code(11), None);
    }
}

//! Descriptor table
//!
//! Order matters: indices key the NVM slots, singles precede groups, and
//! groups only gather entries below themselves.

use super::defaults::*;
use super::{Descriptor as D, Getter, GroupTag, Printer, Setter, ValueKind};
use crate::state::{AxisField as A, MotorField as M, Target as T};
use crate::traits::SerialFlags;

pub(crate) const TABLE_LEN: usize = 198;

#[rustfmt::skip]
pub const TABLE: [D; TABLE_LEN] = [
    // system identification; fc must stay at index 0 (NVM version stamp)
    D::float("fc", "config_version", T::ConfigVersion, 0.0, 2).read_only(),
    D::float("fv", "firmware_version", T::FirmwareVersion, 0.0, 2).read_only(),
    D::float("fb", "firmware_build", T::FirmwareBuild, 0.0, 2).read_only(),
    // runtime status
    D::int("line", "line_number", T::LineNumber, 0.0),
    D::derived("stat", "machine_state", ValueKind::String, Getter::MachineState, Printer::Int),
    D::derived("vel", "velocity", ValueKind::FloatUnits, Getter::Velocity, Printer::Linear).suffix("/min"),
    D::derived("unit", "units_mode", ValueKind::String, Getter::Units, Printer::Text),
    D::derived("sr", "status_report", ValueKind::Null, Getter::StatusReport, Printer::Report)
        .with_setter(Setter::StatusReport)
        .action(),
    D::float("si", "status_interval", T::StatusInterval, STATUS_REPORT_INTERVAL_MS, 0)
        .with_getter(Getter::StatusInterval)
        .with_setter(Setter::StatusInterval)
        .suffix(" ms"),
    // gcode block and power-on defaults
    D::derived("gc", "gcode_block", ValueKind::String, Getter::Gcode, Printer::Text)
        .with_setter(Setter::RunGcode)
        .action(),
    D::byte("gpl", "gcode_select_plane", T::SelectPlane, GCODE_DEFAULT_PLANE).suffix(" [G17,G18,G19]"),
    D::byte("gun", "gcode_units_mode", T::UnitsMode, GCODE_DEFAULT_UNITS).suffix(" [G20,G21]"),
    D::byte("gco", "gcode_coord_system", T::CoordSystem, GCODE_DEFAULT_COORD_SYSTEM).suffix(" [G54-G59]"),
    D::byte("gpa", "gcode_path_control", T::PathControl, GCODE_DEFAULT_PATH_CONTROL).suffix(" [G61,G61.1,G64]"),
    D::byte("gdi", "gcode_distance_mode", T::DistanceMode, GCODE_DEFAULT_DISTANCE_MODE).suffix(" [G90,G91]"),
    // planner
    D::byte("ea", "enable_acceleration", T::EnableAcceleration, ENABLE_ACCELERATION).suffix(" [0,1]"),
    D::linear("ja", "junction_acceleration", T::JunctionAcceleration, JUNCTION_ACCELERATION).precision(0),
    D::linear("ml", "min_line_segment", T::MinLineSegment, MIN_LINE_LENGTH),
    D::linear("ma", "min_arc_segment", T::MinArcSegment, MM_PER_ARC_SEGMENT),
    D::float("mt", "min_segment_time", T::MinSegmentTime, ESTD_SEGMENT_USEC, 0).suffix(" uSec"),
    // serial
    D::byte("ic", "ignore_cr", T::IgnoreCr, COM_IGNORE_RX_CR)
        .with_setter(Setter::Serial(SerialFlags::IGNORE_CR))
        .suffix(" [0,1]"),
    D::byte("il", "ignore_lf", T::IgnoreLf, COM_IGNORE_RX_LF)
        .with_setter(Setter::Serial(SerialFlags::IGNORE_LF))
        .suffix(" [0,1]"),
    D::byte("ec", "enable_cr", T::EnableCr, COM_APPEND_TX_CR)
        .with_setter(Setter::Serial(SerialFlags::APPEND_CR))
        .suffix(" [0,1]"),
    D::byte("ee", "enable_echo", T::EnableEcho, COM_ENABLE_ECHO)
        .with_setter(Setter::Serial(SerialFlags::ECHO))
        .suffix(" [0,1]"),
    D::byte("ex", "enable_xon_xoff", T::EnableXon, COM_ENABLE_XON)
        .with_setter(Setter::Serial(SerialFlags::XON_XOFF))
        .suffix(" [0,1]"),
    // motor 1
    D::byte("1ma", "m1_map_to_axis", T::Motor(0, M::MotorMap), 0.0).in_group(GroupTag::Motor(0)).suffix(" [0=X,1=Y...]"),
    D::rotary("1sa", "m1_step_angle", T::Motor(0, M::StepAngle), MOTOR_STEP_ANGLE)
        .with_setter(Setter::StepAngle)
        .in_group(GroupTag::Motor(0)),
    D::linear("1tr", "m1_travel_per_revolution", T::Motor(0, M::TravelPerRev), MOTOR_TRAVEL_PER_REV)
        .with_setter(Setter::TravelPerRev)
        .in_group(GroupTag::Motor(0)),
    D::byte("1mi", "m1_microsteps", T::Motor(0, M::Microsteps), MOTOR_MICROSTEPS)
        .with_setter(Setter::Microsteps)
        .in_group(GroupTag::Motor(0))
        .suffix(" [1,2,4,8]"),
    D::byte("1po", "m1_polarity", T::Motor(0, M::Polarity), MOTOR_POLARITY)
        .with_setter(Setter::Polarity)
        .in_group(GroupTag::Motor(0))
        .suffix(" [0,1]"),
    D::byte("1pm", "m1_power_management", T::Motor(0, M::PowerMode), MOTOR_POWER_MODE).in_group(GroupTag::Motor(0)).suffix(" [0,1]"),
    // motor 2
    D::byte("2ma", "m2_map_to_axis", T::Motor(1, M::MotorMap), 1.0).in_group(GroupTag::Motor(1)).suffix(" [0=X,1=Y...]"),
    D::rotary("2sa", "m2_step_angle", T::Motor(1, M::StepAngle), MOTOR_STEP_ANGLE)
        .with_setter(Setter::StepAngle)
        .in_group(GroupTag::Motor(1)),
    D::linear("2tr", "m2_travel_per_revolution", T::Motor(1, M::TravelPerRev), MOTOR_TRAVEL_PER_REV)
        .with_setter(Setter::TravelPerRev)
        .in_group(GroupTag::Motor(1)),
    D::byte("2mi", "m2_microsteps", T::Motor(1, M::Microsteps), MOTOR_MICROSTEPS)
        .with_setter(Setter::Microsteps)
        .in_group(GroupTag::Motor(1))
        .suffix(" [1,2,4,8]"),
    D::byte("2po", "m2_polarity", T::Motor(1, M::Polarity), MOTOR_POLARITY)
        .with_setter(Setter::Polarity)
        .in_group(GroupTag::Motor(1))
        .suffix(" [0,1]"),
    D::byte("2pm", "m2_power_management", T::Motor(1, M::PowerMode), MOTOR_POWER_MODE).in_group(GroupTag::Motor(1)).suffix(" [0,1]"),
    // motor 3
    D::byte("3ma", "m3_map_to_axis", T::Motor(2, M::MotorMap), 2.0).in_group(GroupTag::Motor(2)).suffix(" [0=X,1=Y...]"),
    D::rotary("3sa", "m3_step_angle", T::Motor(2, M::StepAngle), MOTOR_STEP_ANGLE)
        .with_setter(Setter::StepAngle)
        .in_group(GroupTag::Motor(2)),
    D::linear("3tr", "m3_travel_per_revolution", T::Motor(2, M::TravelPerRev), MOTOR_TRAVEL_PER_REV)
        .with_setter(Setter::TravelPerRev)
        .in_group(GroupTag::Motor(2)),
    D::byte("3mi", "m3_microsteps", T::Motor(2, M::Microsteps), MOTOR_MICROSTEPS)
        .with_setter(Setter::Microsteps)
        .in_group(GroupTag::Motor(2))
        .suffix(" [1,2,4,8]"),
    D::byte("3po", "m3_polarity", T::Motor(2, M::Polarity), MOTOR_POLARITY)
        .with_setter(Setter::Polarity)
        .in_group(GroupTag::Motor(2))
        .suffix(" [0,1]"),
    D::byte("3pm", "m3_power_management", T::Motor(2, M::PowerMode), MOTOR_POWER_MODE).in_group(GroupTag::Motor(2)).suffix(" [0,1]"),
    // motor 4
    D::byte("4ma", "m4_map_to_axis", T::Motor(3, M::MotorMap), 3.0).in_group(GroupTag::Motor(3)).suffix(" [0=X,1=Y...]"),
    D::rotary("4sa", "m4_step_angle", T::Motor(3, M::StepAngle), MOTOR_STEP_ANGLE)
        .with_setter(Setter::StepAngle)
        .in_group(GroupTag::Motor(3)),
    D::linear("4tr", "m4_travel_per_revolution", T::Motor(3, M::TravelPerRev), MOTOR_TRAVEL_PER_REV)
        .with_setter(Setter::TravelPerRev)
        .in_group(GroupTag::Motor(3)),
    D::byte("4mi", "m4_microsteps", T::Motor(3, M::Microsteps), MOTOR_MICROSTEPS)
        .with_setter(Setter::Microsteps)
        .in_group(GroupTag::Motor(3))
        .suffix(" [1,2,4,8]"),
    D::byte("4po", "m4_polarity", T::Motor(3, M::Polarity), MOTOR_POLARITY)
        .with_setter(Setter::Polarity)
        .in_group(GroupTag::Motor(3))
        .suffix(" [0,1]"),
    D::byte("4pm", "m4_power_management", T::Motor(3, M::PowerMode), MOTOR_POWER_MODE).in_group(GroupTag::Motor(3)).suffix(" [0,1]"),
    // X axis
    D::byte("xam", "x_axis_mode", T::Axis(0, A::AxisMode), AXIS_MODE_STANDARD)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(0)),
    D::axis_value(0, "xfr", "x_feedrate_maximum", T::Axis(0, A::FeedrateMax), XY_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(0, "xvm", "x_velocity_maximum", T::Axis(0, A::VelocityMax), XY_VELOCITY_MAX).suffix("/min"),
    D::axis_value(0, "xtm", "x_travel_maximum", T::Axis(0, A::TravelMax), XY_TRAVEL_MAX),
    D::axis_value(0, "xjm", "x_jerk_maximum", T::Axis(0, A::JerkMax), LINEAR_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(0, "xjd", "x_junction_deviation", T::Axis(0, A::JunctionDeviation), LINEAR_JUNCTION_DEVIATION).precision(4),
    D::byte("xsm", "x_switch_mode", T::Axis(0, A::SwitchMode), LINEAR_SWITCH_MODE).in_group(GroupTag::Axis(0)).suffix(" [0,1]"),
    D::axis_value(0, "xsv", "x_search_velocity", T::Axis(0, A::SearchVelocity), LINEAR_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(0, "xlv", "x_latch_velocity", T::Axis(0, A::LatchVelocity), LINEAR_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(0, "xzo", "x_zero_offset", T::Axis(0, A::ZeroOffset), LINEAR_ZERO_OFFSET),
    D::derived("xabs", "x_absolute_position", ValueKind::FloatUnits, Getter::MachinePosition, Printer::Linear).in_group(GroupTag::Axis(0)),
    D::derived("xpos", "x_position", ValueKind::FloatUnits, Getter::WorkPosition, Printer::Linear).in_group(GroupTag::Axis(0)),
    // Y axis
    D::byte("yam", "y_axis_mode", T::Axis(1, A::AxisMode), AXIS_MODE_STANDARD)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(1)),
    D::axis_value(1, "yfr", "y_feedrate_maximum", T::Axis(1, A::FeedrateMax), XY_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(1, "yvm", "y_velocity_maximum", T::Axis(1, A::VelocityMax), XY_VELOCITY_MAX).suffix("/min"),
    D::axis_value(1, "ytm", "y_travel_maximum", T::Axis(1, A::TravelMax), XY_TRAVEL_MAX),
    D::axis_value(1, "yjm", "y_jerk_maximum", T::Axis(1, A::JerkMax), LINEAR_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(1, "yjd", "y_junction_deviation", T::Axis(1, A::JunctionDeviation), LINEAR_JUNCTION_DEVIATION).precision(4),
    D::byte("ysm", "y_switch_mode", T::Axis(1, A::SwitchMode), LINEAR_SWITCH_MODE).in_group(GroupTag::Axis(1)).suffix(" [0,1]"),
    D::axis_value(1, "ysv", "y_search_velocity", T::Axis(1, A::SearchVelocity), LINEAR_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(1, "ylv", "y_latch_velocity", T::Axis(1, A::LatchVelocity), LINEAR_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(1, "yzo", "y_zero_offset", T::Axis(1, A::ZeroOffset), LINEAR_ZERO_OFFSET),
    D::derived("yabs", "y_absolute_position", ValueKind::FloatUnits, Getter::MachinePosition, Printer::Linear).in_group(GroupTag::Axis(1)),
    D::derived("ypos", "y_position", ValueKind::FloatUnits, Getter::WorkPosition, Printer::Linear).in_group(GroupTag::Axis(1)),
    // Z axis
    D::byte("zam", "z_axis_mode", T::Axis(2, A::AxisMode), AXIS_MODE_STANDARD)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(2)),
    D::axis_value(2, "zfr", "z_feedrate_maximum", T::Axis(2, A::FeedrateMax), Z_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(2, "zvm", "z_velocity_maximum", T::Axis(2, A::VelocityMax), Z_VELOCITY_MAX).suffix("/min"),
    D::axis_value(2, "ztm", "z_travel_maximum", T::Axis(2, A::TravelMax), Z_TRAVEL_MAX),
    D::axis_value(2, "zjm", "z_jerk_maximum", T::Axis(2, A::JerkMax), LINEAR_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(2, "zjd", "z_junction_deviation", T::Axis(2, A::JunctionDeviation), LINEAR_JUNCTION_DEVIATION).precision(4),
    D::byte("zsm", "z_switch_mode", T::Axis(2, A::SwitchMode), LINEAR_SWITCH_MODE).in_group(GroupTag::Axis(2)).suffix(" [0,1]"),
    D::axis_value(2, "zsv", "z_search_velocity", T::Axis(2, A::SearchVelocity), LINEAR_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(2, "zlv", "z_latch_velocity", T::Axis(2, A::LatchVelocity), LINEAR_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(2, "zzo", "z_zero_offset", T::Axis(2, A::ZeroOffset), LINEAR_ZERO_OFFSET),
    D::derived("zabs", "z_absolute_position", ValueKind::FloatUnits, Getter::MachinePosition, Printer::Linear).in_group(GroupTag::Axis(2)),
    D::derived("zpos", "z_position", ValueKind::FloatUnits, Getter::WorkPosition, Printer::Linear).in_group(GroupTag::Axis(2)),
    // A axis
    D::byte("aam", "a_axis_mode", T::Axis(3, A::AxisMode), AXIS_MODE_STANDARD)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(3)),
    D::axis_value(3, "afr", "a_feedrate_maximum", T::Axis(3, A::FeedrateMax), ROTARY_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(3, "avm", "a_velocity_maximum", T::Axis(3, A::VelocityMax), ROTARY_VELOCITY_MAX).suffix("/min"),
    D::axis_value(3, "atm", "a_travel_maximum", T::Axis(3, A::TravelMax), ROTARY_TRAVEL_MAX),
    D::axis_value(3, "ajm", "a_jerk_maximum", T::Axis(3, A::JerkMax), ROTARY_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(3, "ajd", "a_junction_deviation", T::Axis(3, A::JunctionDeviation), ROTARY_JUNCTION_DEVIATION).precision(4),
    D::axis_value(3, "ara", "a_radius_value", T::Axis(3, A::Radius), ROTARY_RADIUS).precision(4),
    D::byte("asm", "a_switch_mode", T::Axis(3, A::SwitchMode), ROTARY_SWITCH_MODE).in_group(GroupTag::Axis(3)).suffix(" [0,1]"),
    D::axis_value(3, "asv", "a_search_velocity", T::Axis(3, A::SearchVelocity), ROTARY_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(3, "alv", "a_latch_velocity", T::Axis(3, A::LatchVelocity), ROTARY_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(3, "azo", "a_zero_offset", T::Axis(3, A::ZeroOffset), ROTARY_ZERO_OFFSET),
    D::derived("aabs", "a_absolute_position", ValueKind::Float, Getter::MachinePosition, Printer::Rotary).in_group(GroupTag::Axis(3)),
    D::derived("apos", "a_position", ValueKind::Float, Getter::WorkPosition, Printer::Rotary).in_group(GroupTag::Axis(3)),
    // B axis
    D::byte("bam", "b_axis_mode", T::Axis(4, A::AxisMode), AXIS_MODE_DISABLED)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(4)),
    D::axis_value(4, "bfr", "b_feedrate_maximum", T::Axis(4, A::FeedrateMax), ROTARY_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(4, "bvm", "b_velocity_maximum", T::Axis(4, A::VelocityMax), ROTARY_VELOCITY_MAX).suffix("/min"),
    D::axis_value(4, "btm", "b_travel_maximum", T::Axis(4, A::TravelMax), ROTARY_TRAVEL_MAX),
    D::axis_value(4, "bjm", "b_jerk_maximum", T::Axis(4, A::JerkMax), ROTARY_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(4, "bjd", "b_junction_deviation", T::Axis(4, A::JunctionDeviation), ROTARY_JUNCTION_DEVIATION).precision(4),
    D::axis_value(4, "bra", "b_radius_value", T::Axis(4, A::Radius), ROTARY_RADIUS).precision(4),
    D::byte("bsm", "b_switch_mode", T::Axis(4, A::SwitchMode), ROTARY_SWITCH_MODE).in_group(GroupTag::Axis(4)).suffix(" [0,1]"),
    D::axis_value(4, "bsv", "b_search_velocity", T::Axis(4, A::SearchVelocity), ROTARY_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(4, "blv", "b_latch_velocity", T::Axis(4, A::LatchVelocity), ROTARY_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(4, "bzo", "b_zero_offset", T::Axis(4, A::ZeroOffset), ROTARY_ZERO_OFFSET),
    D::derived("babs", "b_absolute_position", ValueKind::Float, Getter::MachinePosition, Printer::Rotary).in_group(GroupTag::Axis(4)),
    D::derived("bpos", "b_position", ValueKind::Float, Getter::WorkPosition, Printer::Rotary).in_group(GroupTag::Axis(4)),
    // C axis
    D::byte("cam", "c_axis_mode", T::Axis(5, A::AxisMode), AXIS_MODE_DISABLED)
        .with_getter(Getter::AxisMode)
        .with_printer(Printer::AxisMode)
        .in_group(GroupTag::Axis(5)),
    D::axis_value(5, "cfr", "c_feedrate_maximum", T::Axis(5, A::FeedrateMax), ROTARY_FEEDRATE_MAX).suffix("/min"),
    D::axis_value(5, "cvm", "c_velocity_maximum", T::Axis(5, A::VelocityMax), ROTARY_VELOCITY_MAX).suffix("/min"),
    D::axis_value(5, "ctm", "c_travel_maximum", T::Axis(5, A::TravelMax), ROTARY_TRAVEL_MAX),
    D::axis_value(5, "cjm", "c_jerk_maximum", T::Axis(5, A::JerkMax), ROTARY_JERK_MAX)
        .precision(0)
        .suffix("/min^3"),
    D::axis_value(5, "cjd", "c_junction_deviation", T::Axis(5, A::JunctionDeviation), ROTARY_JUNCTION_DEVIATION).precision(4),
    D::axis_value(5, "cra", "c_radius_value", T::Axis(5, A::Radius), ROTARY_RADIUS).precision(4),
    D::byte("csm", "c_switch_mode", T::Axis(5, A::SwitchMode), ROTARY_SWITCH_MODE).in_group(GroupTag::Axis(5)).suffix(" [0,1]"),
    D::axis_value(5, "csv", "c_search_velocity", T::Axis(5, A::SearchVelocity), ROTARY_SEARCH_VELOCITY).suffix("/min"),
    D::axis_value(5, "clv", "c_latch_velocity", T::Axis(5, A::LatchVelocity), ROTARY_LATCH_VELOCITY).suffix("/min"),
    D::axis_value(5, "czo", "c_zero_offset", T::Axis(5, A::ZeroOffset), ROTARY_ZERO_OFFSET),
    D::derived("cabs", "c_absolute_position", ValueKind::Float, Getter::MachinePosition, Printer::Rotary).in_group(GroupTag::Axis(5)),
    D::derived("cpos", "c_position", ValueKind::Float, Getter::WorkPosition, Printer::Rotary).in_group(GroupTag::Axis(5)),
    // G54 offsets
    D::linear("g54x", "g54_x_offset", T::Offset(0, 0), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    D::linear("g54y", "g54_y_offset", T::Offset(0, 1), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    D::linear("g54z", "g54_z_offset", T::Offset(0, 2), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    D::linear("g54a", "g54_a_offset", T::Offset(0, 3), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    D::linear("g54b", "g54_b_offset", T::Offset(0, 4), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    D::linear("g54c", "g54_c_offset", T::Offset(0, 5), COORD_OFFSET).in_group(GroupTag::Offset(0)),
    // G55 offsets
    D::linear("g55x", "g55_x_offset", T::Offset(1, 0), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    D::linear("g55y", "g55_y_offset", T::Offset(1, 1), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    D::linear("g55z", "g55_z_offset", T::Offset(1, 2), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    D::linear("g55a", "g55_a_offset", T::Offset(1, 3), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    D::linear("g55b", "g55_b_offset", T::Offset(1, 4), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    D::linear("g55c", "g55_c_offset", T::Offset(1, 5), COORD_OFFSET).in_group(GroupTag::Offset(1)),
    // G56 offsets
    D::linear("g56x", "g56_x_offset", T::Offset(2, 0), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    D::linear("g56y", "g56_y_offset", T::Offset(2, 1), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    D::linear("g56z", "g56_z_offset", T::Offset(2, 2), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    D::linear("g56a", "g56_a_offset", T::Offset(2, 3), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    D::linear("g56b", "g56_b_offset", T::Offset(2, 4), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    D::linear("g56c", "g56_c_offset", T::Offset(2, 5), COORD_OFFSET).in_group(GroupTag::Offset(2)),
    // G57 offsets
    D::linear("g57x", "g57_x_offset", T::Offset(3, 0), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    D::linear("g57y", "g57_y_offset", T::Offset(3, 1), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    D::linear("g57z", "g57_z_offset", T::Offset(3, 2), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    D::linear("g57a", "g57_a_offset", T::Offset(3, 3), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    D::linear("g57b", "g57_b_offset", T::Offset(3, 4), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    D::linear("g57c", "g57_c_offset", T::Offset(3, 5), COORD_OFFSET).in_group(GroupTag::Offset(3)),
    // G58 offsets
    D::linear("g58x", "g58_x_offset", T::Offset(4, 0), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    D::linear("g58y", "g58_y_offset", T::Offset(4, 1), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    D::linear("g58z", "g58_z_offset", T::Offset(4, 2), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    D::linear("g58a", "g58_a_offset", T::Offset(4, 3), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    D::linear("g58b", "g58_b_offset", T::Offset(4, 4), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    D::linear("g58c", "g58_c_offset", T::Offset(4, 5), COORD_OFFSET).in_group(GroupTag::Offset(4)),
    // G59 offsets
    D::linear("g59x", "g59_x_offset", T::Offset(5, 0), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    D::linear("g59y", "g59_y_offset", T::Offset(5, 1), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    D::linear("g59z", "g59_z_offset", T::Offset(5, 2), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    D::linear("g59a", "g59_a_offset", T::Offset(5, 3), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    D::linear("g59b", "g59_b_offset", T::Offset(5, 4), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    D::linear("g59c", "g59_c_offset", T::Offset(5, 5), COORD_OFFSET).in_group(GroupTag::Offset(5)),
    // status report slots; registry indices, restored from NVM
    D::int("sr00", "sr00", T::StatusSlot(0), 0.0).with_printer(Printer::Nul),
    D::int("sr01", "sr01", T::StatusSlot(1), 0.0).with_printer(Printer::Nul),
    D::int("sr02", "sr02", T::StatusSlot(2), 0.0).with_printer(Printer::Nul),
    D::int("sr03", "sr03", T::StatusSlot(3), 0.0).with_printer(Printer::Nul),
    D::int("sr04", "sr04", T::StatusSlot(4), 0.0).with_printer(Printer::Nul),
    D::int("sr05", "sr05", T::StatusSlot(5), 0.0).with_printer(Printer::Nul),
    D::int("sr06", "sr06", T::StatusSlot(6), 0.0).with_printer(Printer::Nul),
    D::int("sr07", "sr07", T::StatusSlot(7), 0.0).with_printer(Printer::Nul),
    D::int("sr08", "sr08", T::StatusSlot(8), 0.0).with_printer(Printer::Nul),
    D::int("sr09", "sr09", T::StatusSlot(9), 0.0).with_printer(Printer::Nul),
    D::int("sr10", "sr10", T::StatusSlot(10), 0.0).with_printer(Printer::Nul),
    D::int("sr11", "sr11", T::StatusSlot(11), 0.0).with_printer(Printer::Nul),
    D::int("sr12", "sr12", T::StatusSlot(12), 0.0).with_printer(Printer::Nul),
    D::int("sr13", "sr13", T::StatusSlot(13), 0.0).with_printer(Printer::Nul),
    D::int("sr14", "sr14", T::StatusSlot(14), 0.0).with_printer(Printer::Nul),
    D::int("sr15", "sr15", T::StatusSlot(15), 0.0).with_printer(Printer::Nul),
    D::int("sr16", "sr16", T::StatusSlot(16), 0.0).with_printer(Printer::Nul),
    D::int("sr17", "sr17", T::StatusSlot(17), 0.0).with_printer(Printer::Nul),
    D::int("sr18", "sr18", T::StatusSlot(18), 0.0).with_printer(Printer::Nul),
    D::int("sr19", "sr19", T::StatusSlot(19), 0.0).with_printer(Printer::Nul),
    // groups
    D::group("g54", "g54", GroupTag::Offset(0)),
    D::group("g55", "g55", GroupTag::Offset(1)),
    D::group("g56", "g56", GroupTag::Offset(2)),
    D::group("g57", "g57", GroupTag::Offset(3)),
    D::group("g58", "g58", GroupTag::Offset(4)),
    D::group("g59", "g59", GroupTag::Offset(5)),
    D::group("sys", "sys", GroupTag::None).with_getter(Getter::System),
    D::group("?", "qm", GroupTag::None)
        .with_getter(Getter::Query)
        .with_setter(Setter::Nul),
    D::group("x", "x", GroupTag::Axis(0)),
    D::group("y", "y", GroupTag::Axis(1)),
    D::group("z", "z", GroupTag::Axis(2)),
    D::group("a", "a", GroupTag::Axis(3)),
    D::group("b", "b", GroupTag::Axis(4)),
    D::group("c", "c", GroupTag::Axis(5)),
    D::group("1", "m1", GroupTag::Motor(0)),
    D::group("2", "m2", GroupTag::Motor(1)),
    D::group("3", "m3", GroupTag::Motor(2)),
    D::group("4", "m4", GroupTag::Motor(3)),
];

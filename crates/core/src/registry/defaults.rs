//! Compiled machine defaults
//!
//! Applied at first boot, and whenever the persisted version stamp does not
//! match the running build. Linear values are millimeters, rotary values are
//! degrees.

// Status reporting
pub const STATUS_REPORT_INTERVAL_MS: f32 = 200.0;
pub const STATUS_REPORT_MIN_MS: f32 = 50.0;
pub const STATUS_REPORT_MAX_MS: f32 = 2000.0;
/// Estimated segment time used to express the status interval in segments
pub const ESTD_SEGMENT_USEC: f32 = 10_000.0;

// Gcode power-on defaults
pub const GCODE_DEFAULT_PLANE: f32 = 0.0; // G17
pub const GCODE_DEFAULT_UNITS: f32 = 1.0; // G21
pub const GCODE_DEFAULT_COORD_SYSTEM: f32 = 1.0; // G54
pub const GCODE_DEFAULT_PATH_CONTROL: f32 = 2.0; // G64
pub const GCODE_DEFAULT_DISTANCE_MODE: f32 = 0.0; // G90

// Planner
pub const ENABLE_ACCELERATION: f32 = 1.0;
pub const JUNCTION_ACCELERATION: f32 = 200_000.0;
pub const MIN_LINE_LENGTH: f32 = 0.08;
pub const MM_PER_ARC_SEGMENT: f32 = 0.1;

// Serial
pub const COM_IGNORE_RX_CR: f32 = 0.0;
pub const COM_IGNORE_RX_LF: f32 = 0.0;
pub const COM_APPEND_TX_CR: f32 = 0.0;
pub const COM_ENABLE_ECHO: f32 = 1.0;
pub const COM_ENABLE_XON: f32 = 1.0;

// Motors (same drive train on all four)
pub const MOTOR_STEP_ANGLE: f32 = 1.8;
pub const MOTOR_TRAVEL_PER_REV: f32 = 1.25;
pub const MOTOR_MICROSTEPS: f32 = 8.0;
pub const MOTOR_POLARITY: f32 = 0.0;
pub const MOTOR_POWER_MODE: f32 = 1.0;

// Linear axes
pub const AXIS_MODE_STANDARD: f32 = 1.0;
pub const AXIS_MODE_DISABLED: f32 = 0.0;
pub const XY_FEEDRATE_MAX: f32 = 2400.0;
pub const XY_VELOCITY_MAX: f32 = 2400.0;
pub const XY_TRAVEL_MAX: f32 = 400.0;
pub const Z_FEEDRATE_MAX: f32 = 1200.0;
pub const Z_VELOCITY_MAX: f32 = 1200.0;
pub const Z_TRAVEL_MAX: f32 = 100.0;
pub const LINEAR_JERK_MAX: f32 = 100_000_000.0;
pub const LINEAR_JUNCTION_DEVIATION: f32 = 0.05;
pub const LINEAR_SWITCH_MODE: f32 = 1.0;
pub const LINEAR_SEARCH_VELOCITY: f32 = 500.0;
pub const LINEAR_LATCH_VELOCITY: f32 = 100.0;
pub const LINEAR_ZERO_OFFSET: f32 = 3.0;

// Rotary axes
pub const ROTARY_FEEDRATE_MAX: f32 = 36_000.0;
pub const ROTARY_VELOCITY_MAX: f32 = 36_000.0;
pub const ROTARY_TRAVEL_MAX: f32 = -1.0;
pub const ROTARY_JERK_MAX: f32 = 100_000_000.0;
pub const ROTARY_JUNCTION_DEVIATION: f32 = 0.05;
pub const ROTARY_RADIUS: f32 = 1.0;
pub const ROTARY_SWITCH_MODE: f32 = 0.0;
pub const ROTARY_SEARCH_VELOCITY: f32 = 600.0;
pub const ROTARY_LATCH_VELOCITY: f32 = 100.0;
pub const ROTARY_ZERO_OFFSET: f32 = 0.0;

// Coordinate offsets
pub const COORD_OFFSET: f32 = 0.0;

/// Tokens in the status report a fresh profile starts with
pub const STATUS_REPORT_DEFAULTS: [&str; 8] =
    ["line", "xpos", "ypos", "zpos", "apos", "vel", "unit", "stat"];

//! Machine collaborator traits and mock.

use crate::state::{MachineState, AXES};
use crate::units::UnitsMode;
use bitflags::bitflags;
use heapless::{String, Vec};

bitflags! {
    /// Serial transport controls driven by the `ic`/`il`/`ec`/`ee`/`ex` parameters
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SerialFlags: u8 {
        /// Drop CR on receive
        const IGNORE_CR = 0b0000_0001;
        /// Drop LF on receive
        const IGNORE_LF = 0b0000_0010;
        /// Append CR to LF on transmit
        const APPEND_CR = 0b0000_0100;
        /// Echo received characters
        const ECHO      = 0b0000_1000;
        /// XON/XOFF flow control
        const XON_XOFF  = 0b0001_0000;
    }
}

/// Motion and gcode subsystem
pub trait MotionControl {
    /// Absolute machine position of an axis, in mm (degrees for rotary axes)
    fn machine_position(&self, axis: usize) -> f32;

    /// Work position of an axis, in mm (degrees for rotary axes)
    fn work_position(&self, axis: usize) -> f32;

    /// Current runtime velocity in mm/min
    fn runtime_velocity(&self) -> f32;

    fn units_mode(&self) -> UnitsMode;

    fn set_units_mode(&mut self, mode: UnitsMode);

    fn machine_state(&self) -> MachineState;

    /// Run one block of gcode text.
    ///
    /// # Errors
    ///
    /// Returns the interpreter's own status code on failure.
    fn execute_gcode(&mut self, block: &str) -> Result<(), u8>;
}

/// Stepper pulse generator
pub trait StepperDriver {
    /// `motor` is zero-based
    fn set_microsteps(&mut self, motor: usize, microsteps: u8);

    fn set_polarity(&mut self, motor: usize, polarity: u8);
}

/// Active serial transport
pub trait SerialControl {
    fn set_control(&mut self, flag: SerialFlags, enabled: bool);
}

/// Everything the dispatch path needs from the rest of the firmware
pub trait Machine: MotionControl + StepperDriver + SerialControl {}

impl<T: MotionControl + StepperDriver + SerialControl> Machine for T {}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Side effect recorded by [`MockMachine`]
#[derive(Debug, Clone, PartialEq)]
pub enum MachineCall {
    Microsteps { motor: usize, microsteps: u8 },
    Polarity { motor: usize, polarity: u8 },
    Serial { flag: SerialFlags, enabled: bool },
    Gcode(String<80>),
    Units(UnitsMode),
}

/// Mock machine with settable live values and a call log.
///
/// # Example
///
/// ```
/// use cnc_config_core::traits::{MockMachine, MotionControl, StepperDriver, MachineCall};
///
/// let mut machine = MockMachine::new();
/// machine.positions[0] = 12.5;
/// assert_eq!(machine.work_position(0), 12.5);
///
/// machine.set_microsteps(1, 8);
/// assert_eq!(machine.calls[0], MachineCall::Microsteps { motor: 1, microsteps: 8 });
/// ```
#[derive(Debug)]
pub struct MockMachine {
    pub units: UnitsMode,
    pub state: MachineState,
    pub velocity: f32,
    pub machine_positions: [f32; AXES],
    pub positions: [f32; AXES],
    /// Status returned by `execute_gcode`; 0 is success
    pub gcode_status: u8,
    pub calls: Vec<MachineCall, 64>,
}

impl MockMachine {
    pub fn new() -> Self {
        Self {
            units: UnitsMode::Millimeters,
            state: MachineState::Reset,
            velocity: 0.0,
            machine_positions: [0.0; AXES],
            positions: [0.0; AXES],
            gcode_status: 0,
            calls: Vec::new(),
        }
    }

    fn record(&mut self, call: MachineCall) {
        // Oldest calls are kept; tests never need more than the log holds
        let _ = self.calls.push(call);
    }
}

impl Default for MockMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionControl for MockMachine {
    fn machine_position(&self, axis: usize) -> f32 {
        self.machine_positions[axis]
    }

    fn work_position(&self, axis: usize) -> f32 {
        self.positions[axis]
    }

    fn runtime_velocity(&self) -> f32 {
        self.velocity
    }

    fn units_mode(&self) -> UnitsMode {
        self.units
    }

    fn set_units_mode(&mut self, mode: UnitsMode) {
        self.units = mode;
        self.record(MachineCall::Units(mode));
    }

    fn machine_state(&self) -> MachineState {
        self.state
    }

    fn execute_gcode(&mut self, block: &str) -> Result<(), u8> {
        let mut text = String::new();
        let _ = text.push_str(block);
        self.record(MachineCall::Gcode(text));
        match self.gcode_status {
            0 => Ok(()),
            code => Err(code),
        }
    }
}

impl StepperDriver for MockMachine {
    fn set_microsteps(&mut self, motor: usize, microsteps: u8) {
        self.record(MachineCall::Microsteps { motor, microsteps });
    }

    fn set_polarity(&mut self, motor: usize, polarity: u8) {
        self.record(MachineCall::Polarity { motor, polarity });
    }
}

impl SerialControl for MockMachine {
    fn set_control(&mut self, flag: SerialFlags, enabled: bool) {
        self.record(MachineCall::Serial { flag, enabled });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gcode_status() {
        let mut machine = MockMachine::new();
        assert_eq!(machine.execute_gcode("g0 x10"), Ok(()));
        machine.gcode_status = 7;
        assert_eq!(machine.execute_gcode("g1 x5"), Err(7));
        assert_eq!(machine.calls.len(), 2);
    }

    #[test]
    fn test_mock_is_machine() {
        fn takes_machine(m: &mut dyn Machine) -> UnitsMode {
            m.set_units_mode(UnitsMode::Inches);
            m.units_mode()
        }
        let mut machine = MockMachine::new();
        assert_eq!(takes_machine(&mut machine), UnitsMode::Inches);
    }
}

//! Collaborator traits
//!
//! The configuration subsystem reads live machine data from, and pushes
//! side effects into, subsystems it does not own: the motion planner and
//! gcode interpreter, the stepper driver, and the serial transport.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Firmware implementations live with the subsystems they wrap

pub mod machine;

pub use machine::{
    Machine, MachineCall, MockMachine, MotionControl, SerialControl, SerialFlags, StepperDriver,
};

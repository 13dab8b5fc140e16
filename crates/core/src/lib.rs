//! cnc_config_core - Pure no_std configuration engine for a CNC motion controller
//!
//! This crate contains the parameter registry and everything that operates on
//! it: name resolution, the command object chain, typed accessors, group
//! expansion, status reports and the text command parser. It can be tested on
//! host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Motion, stepper and serial services injected via traits
//!
//! # Modules
//!
//! - [`registry`]: Static parameter table and descriptor types
//! - [`resolver`]: Token and friendly-name lookup
//! - [`cmd`]: Command objects and the bounded command pool
//! - [`dispatch`]: Getter and setter dispatch
//! - [`group`]: Group expansion for reads and writes
//! - [`report`]: Status report specification and output
//! - [`print`]: Human-readable parameter listing
//! - [`parser`]: Text command line parser
//! - [`state`]: Configuration state the registry reads and writes
//! - [`traits`]: Machine abstractions (motion, steppers, serial)
//! - [`units`]: Units modes and conversions
//! - [`error`]: Error type

#![no_std]

pub mod cmd;
pub mod dispatch;
pub mod error;
pub mod group;
pub mod parser;
pub mod print;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod state;
pub mod traits;
pub mod units;

pub use cmd::{CmdObject, CmdPool, ValueType};
pub use dispatch::Context;
pub use error::{ConfigError, Result};
pub use registry::{Descriptor, Index};
pub use state::{BuildInfo, ConfigState};
pub use traits::Machine;
pub use units::UnitsMode;

#![cfg_attr(not(test), no_std)]

//! cnc_config - Configuration and live-parameter subsystem for a CNC motion controller
//!
//! This library owns every machine parameter: it resolves names, reads and
//! writes values through typed accessors, expands groups, persists values to
//! NVM with version-gated migration, and parses the `$name=value` text syntax.
//! The platform-independent engine lives in [`cnc_config_core`].

// Platform abstraction layer (NVM access)
pub mod platform;

// Logging
pub mod core;

// Configuration facade, persistence and boot-time init
pub mod config;

pub use cnc_config_core as engine;
pub use config::{build_info, Config, InitState};

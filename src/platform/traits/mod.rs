//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod nvm;

pub use nvm::NvmInterface;

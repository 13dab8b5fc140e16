//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use cnc_config::platform::mock::MockNvm;
//! use cnc_config::platform::traits::NvmInterface;
//!
//! let mut nvm = MockNvm::new();
//! nvm.write(0, &[1, 2, 3, 4]).unwrap();
//! assert_eq!(nvm.total_writes(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod nvm;

pub use nvm::{MockNvm, MOCK_NVM_CAPACITY};

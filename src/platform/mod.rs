//! Platform abstraction layer
//!
//! Hardware access needed by the configuration subsystem. Everything that
//! touches a device goes through the traits defined here.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{NvmError, PlatformError, Result};
pub use traits::NvmInterface;

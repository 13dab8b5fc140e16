//! Configuration error types
//!
//! Provides the error type shared by resolution, dispatch and persistence.

/// Errors from configuration operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Name did not resolve, or index is outside the registry
    UnrecognizedCommand,
    /// Command pool has no free object for another chain entry
    PoolExhausted,
    /// Gcode interpreter rejected a block; carries its status code unmodified
    Interpreter(u8),
    /// Non-volatile write did not complete
    PersistenceWriteFailure,
    /// Non-volatile read did not complete
    PersistenceReadFailure,
    /// Print sink rejected output
    OutputFailure,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnrecognizedCommand => write!(f, "unrecognized command"),
            ConfigError::PoolExhausted => write!(f, "command pool exhausted"),
            ConfigError::Interpreter(code) => write!(f, "gcode interpreter status {}", code),
            ConfigError::PersistenceWriteFailure => write!(f, "nvm write failed"),
            ConfigError::PersistenceReadFailure => write!(f, "nvm read failed"),
            ConfigError::OutputFailure => write!(f, "output failed"),
        }
    }
}

impl From<core::fmt::Error> for ConfigError {
    fn from(_: core::fmt::Error) -> Self {
        ConfigError::OutputFailure
    }
}

/// Result type for configuration operations
pub type Result<T> = core::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_display_interpreter_status() {
        let mut s: String<48> = String::new();
        write!(s, "{}", ConfigError::Interpreter(42)).unwrap();
        assert_eq!(s.as_str(), "gcode interpreter status 42");
    }

    #[test]
    fn test_display_unrecognized() {
        let mut s: String<48> = String::new();
        write!(s, "{}", ConfigError::UnrecognizedCommand).unwrap();
        assert_eq!(s.as_str(), "unrecognized command");
    }
}

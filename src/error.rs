use thiserror::Error;

/// Errors raised when a gesture configuration is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A distance or angle threshold was negative or not a number
    #[error("{field} must be a finite, non-negative value (got {value})")]
    InvalidThreshold { field: &'static str, value: f32 },

    /// The long press would fire the instant the pointer goes down
    #[error("long press duration must be greater than zero (got {0}s)")]
    ZeroLongPress(f32),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

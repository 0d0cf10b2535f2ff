//! Error types for Another Hour clocks

use thiserror::Error;

/// Core Another Hour errors
///
/// Scalers never fail: every variant here is raised before a scaler runs,
/// while the caller is still turning its inputs into a [`crate::WallClockSample`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AhError {
    // Time resolution errors
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid wall-clock sample: {field} = {value}")]
    InvalidSample { field: &'static str, value: u32 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Another Hour operations
pub type AhResult<T> = Result<T, AhError>;

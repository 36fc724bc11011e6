//! Error types for date construction and parsing.

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Examples
/// ```
/// use recur_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date or weekday string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Weekday index outside 0-6.
    #[error("Invalid weekday index: {index} (expected 0-6)")]
    InvalidWeekday {
        /// The out-of-range index
        index: u32,
    },
}

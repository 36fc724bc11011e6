//! Pattern validation error types.

use recur_core::types::Date;
use thiserror::Error;

/// Errors raised when a recurrence pattern violates an invariant.
///
/// Every variant is detected before expansion begins; expansion never fails
/// mid-sequence. Calendar edge cases (a short month, a non-leap year) are
/// silent skips, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Interval below 1.
    #[error("Recurrence interval must be at least 1, got {interval}")]
    InvalidInterval {
        /// The rejected interval.
        interval: u32,
    },

    /// Required frequency-specific field absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Weekly pattern with an empty weekday set.
    #[error("Weekly pattern requires a non-empty weekday set")]
    EmptyWeekdaySet,

    /// Monthly pattern with both day-of-month and Nth-weekday modes set.
    #[error("Monthly pattern must use exactly one of month_day or nth_weekday, both are set")]
    MonthlyModeConflict,

    /// Monthly pattern with neither mode set.
    #[error("Monthly pattern must set one of month_day or nth_weekday")]
    MissingMonthlyMode,

    /// Day of month outside 1-31.
    #[error("Day of month {day} is outside the valid range 1-31")]
    DayOfMonthOutOfRange {
        /// The rejected day.
        day: u32,
    },

    /// Month week outside 1-5.
    #[error("Month week {week} is outside the valid range 1-5")]
    MonthWeekOutOfRange {
        /// The rejected week ordinal.
        week: u32,
    },

    /// Month outside 1-12.
    #[error("Month {month} is outside the valid range 1-12")]
    MonthOutOfRange {
        /// The rejected month.
        month: u32,
    },

    /// Occurrence count of zero.
    #[error("Occurrence count must be at least 1")]
    InvalidCount,

    /// End date before the anchor date.
    #[error("End date {end} is earlier than anchor date {anchor}")]
    EndBeforeAnchor {
        /// The pattern's anchor date.
        anchor: Date,
        /// The rejected end date.
        end: Date,
    },
}

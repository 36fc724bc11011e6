//! Recurrence pattern expansion.
//!
//! This module provides:
//! - [`RecurrencePattern`]: A declarative repeating-schedule description
//! - [`PatternBuilder`]: Builder pattern for constructing validated patterns
//! - [`Frequency`]: Recurrence unit enumeration (Daily, Weekly, Monthly, Yearly)
//! - [`Termination`]: End-date, occurrence-count, or unbounded termination
//! - [`ExpansionLimits`]: Safety cap bounding every expansion
//! - [`expand`]: The pure expansion function
//!
//! # Examples
//!
//! ```
//! use recur_core::types::Date;
//! use recur_engine::recurrence::{expand, PatternBuilder};
//!
//! // Every second day, three occurrences
//! let pattern = PatternBuilder::daily(Date::from_ymd(2024, 1, 1).unwrap())
//!     .interval(2)
//!     .count(3)
//!     .build()
//!     .unwrap();
//!
//! let dates = expand(&pattern).unwrap();
//! assert_eq!(dates.len(), 3);
//! assert_eq!(dates[2], Date::from_ymd(2024, 1, 5).unwrap());
//! ```

mod error;
mod expand;
mod frequency;
mod limits;
mod pattern;

pub use error::PatternError;
pub use expand::{expand, expand_with_limits};
pub use frequency::Frequency;
pub use limits::ExpansionLimits;
pub use pattern::{NthWeekday, PatternBuilder, RecurrencePattern, Termination};

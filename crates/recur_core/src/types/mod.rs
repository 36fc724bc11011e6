//! Core type definitions for calendar arithmetic.
//!
//! This module provides:
//! - [`Date`]: Type-safe date wrapper around `chrono::NaiveDate`
//! - [`Weekday`]: Sunday-first weekday enumeration (indices 0-6)
//! - [`WeekdaySet`]: Compact weekday set with ascending iteration
//! - [`DateError`]: Errors from date construction and parsing

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::{Date, Weekday, WeekdaySet};

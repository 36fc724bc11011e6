//! # recur_core: Foundation Types for Recurrence Expansion
//!
//! ## Foundation Layer Role
//!
//! recur_core is the bottom layer of the workspace, providing the calendar
//! vocabulary every other crate builds on:
//!
//! - [`types::time::Date`]: Type-safe date wrapper around `chrono::NaiveDate`
//! - [`types::time::Weekday`]: Sunday-first weekday enum with stable indices 0-6
//! - [`types::time::WeekdaySet`]: Compact set of weekdays, iterated in ascending order
//! - Calendar helpers: leap years, month lengths, Nth-weekday resolution
//!
//! # Examples
//!
//! ```
//! use recur_core::types::{Date, Weekday};
//!
//! let date = Date::from_ymd(2024, 1, 1).unwrap();
//! assert_eq!(date.weekday(), Weekday::Monday);
//! assert_eq!(date.start_of_week(), Date::from_ymd(2023, 12, 31).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `Weekday`, and `WeekdaySet`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

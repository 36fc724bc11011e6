//! Date, weekday, and calendar helpers for recurrence expansion.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `Weekday`: Sunday-first weekday enumeration with stable indices 0-6
//! - `WeekdaySet`: Compact set of weekdays, iterated in ascending order
//! - Calendar helpers: leap years, month lengths, Nth-weekday resolution
//!
//! # Examples
//!
//! ```
//! use recur_core::types::time::{Date, Weekday, nth_weekday_of_month};
//!
//! // Second Tuesday of January 2024
//! let date = nth_weekday_of_month(2024, 1, Weekday::Tuesday, 2).unwrap();
//! assert_eq!(date, Date::from_ymd(2024, 1, 9).unwrap());
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic the
/// recurrence steppers rely on. The wrapper is a naive calendar date:
/// no timezone, one calendar system.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::{Date, Weekday};
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.weekday(), Weekday::Saturday);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the weekday this date falls on.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::{Date, Weekday};
    ///
    /// // 2024-01-01 was a Monday
    /// let date = Date::from_ymd(2024, 1, 1).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Monday);
    /// ```
    pub fn weekday(&self) -> Weekday {
        Weekday::from_chrono(self.0.weekday())
    }

    /// Returns the date shifted by the given number of days.
    ///
    /// Returns `None` if the shifted date falls outside the range chrono
    /// can represent.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(1), Date::from_ymd(2024, 2, 29).ok());
    /// assert_eq!(date.add_days(-28), Date::from_ymd(2024, 1, 31).ok());
    /// ```
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(chrono::Duration::days(days)).map(Date)
    }

    /// Returns the Sunday that starts the calendar week containing this date.
    ///
    /// Weeks are Sunday-aligned, matching the weekday indexing used across
    /// this crate (0 = Sunday).
    ///
    /// # Panics
    /// Panics if the result falls outside the range chrono can represent
    /// (only possible within a week of the calendar minimum).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// // Monday 2024-01-01 belongs to the week starting Sunday 2023-12-31
    /// let date = Date::from_ymd(2024, 1, 1).unwrap();
    /// assert_eq!(date.start_of_week(), Date::from_ymd(2023, 12, 31).unwrap());
    ///
    /// // A Sunday starts its own week
    /// let sunday = Date::from_ymd(2023, 12, 31).unwrap();
    /// assert_eq!(sunday.start_of_week(), sunday);
    /// ```
    pub fn start_of_week(&self) -> Self {
        self.add_days(-i64::from(self.weekday().index()))
            .expect("week start within calendar range")
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Weekday with Sunday-first indexing.
///
/// Indices are stable and part of the public contract: 0 = Sunday through
/// 6 = Saturday. The derived ordering follows the indices, so iterating a
/// sorted collection of weekdays visits Sunday first.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::Weekday;
///
/// assert_eq!(Weekday::Sunday.index(), 0);
/// assert_eq!(Weekday::Saturday.index(), 6);
/// assert!(Weekday::Sunday < Weekday::Monday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Sunday (index 0).
    Sunday,
    /// Monday (index 1).
    Monday,
    /// Tuesday (index 2).
    Tuesday,
    /// Wednesday (index 3).
    Wednesday,
    /// Thursday (index 4).
    Thursday,
    /// Friday (index 5).
    Friday,
    /// Saturday (index 6).
    Saturday,
}

impl Weekday {
    /// All weekdays in ascending index order (Sunday first).
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the Sunday-first index (0-6).
    #[inline]
    pub fn index(&self) -> u32 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Creates a weekday from a Sunday-first index.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Weekday;
    ///
    /// assert_eq!(Weekday::from_index(3).unwrap(), Weekday::Wednesday);
    /// assert!(Weekday::from_index(7).is_err());
    /// ```
    pub fn from_index(index: u32) -> Result<Self, DateError> {
        Weekday::ALL
            .get(index as usize)
            .copied()
            .ok_or(DateError::InvalidWeekday { index })
    }

    /// Converts from chrono's weekday type.
    #[inline]
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        Weekday::ALL[weekday.num_days_from_sunday() as usize]
    }

    /// Returns the full English name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Returns the three-letter abbreviation.
    #[inline]
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Weekday {
    type Err = DateError;

    /// Parses a weekday from its name (case-insensitive).
    ///
    /// Accepts full names ("Sunday") and three-letter abbreviations ("sun").
    fn from_str(s: &str) -> Result<Self, DateError> {
        match s.to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Weekday::Sunday),
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            _ => Err(DateError::ParseError(format!("Unknown weekday: {}", s))),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_weekday_impl {
    use super::Weekday;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Weekday {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Weekday {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Weekday::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// Iteration order is always ascending by Sunday-first index, regardless of
/// insertion order.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::{Weekday, WeekdaySet};
///
/// let set: WeekdaySet = [Weekday::Friday, Weekday::Monday].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Weekday::Monday));
///
/// let in_order: Vec<_> = set.iter().collect();
/// assert_eq!(in_order, vec![Weekday::Monday, Weekday::Friday]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Creates an empty set.
    #[inline]
    pub fn empty() -> Self {
        WeekdaySet(0)
    }

    /// Creates a set containing the given weekdays.
    pub fn from_weekdays(weekdays: &[Weekday]) -> Self {
        weekdays.iter().copied().collect()
    }

    /// Adds a weekday to the set. Inserting a member twice has no effect.
    #[inline]
    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday.index();
    }

    /// Removes a weekday from the set.
    #[inline]
    pub fn remove(&mut self, weekday: Weekday) {
        self.0 &= !(1 << weekday.index());
    }

    /// Returns whether the set contains the given weekday.
    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.index()) != 0
    }

    /// Returns the number of weekdays in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the members in ascending index order (Sunday first).
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|wd| self.contains(*wd))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for wd in iter {
            set.insert(wd);
        }
        set
    }
}

impl fmt::Display for WeekdaySet {
    /// Formats as comma-separated three-letter names, e.g. `Mon,Wed,Fri`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for wd in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", wd.short_name())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for WeekdaySet {
    type Err = DateError;

    /// Parses a comma-separated list of weekday names, e.g. `"mon,wed,fri"`.
    ///
    /// An empty string parses to the empty set.
    fn from_str(s: &str) -> Result<Self, DateError> {
        let mut set = WeekdaySet::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            set.insert(part.parse()?);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
mod serde_weekday_set_impl {
    use super::WeekdaySet;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for WeekdaySet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for WeekdaySet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            WeekdaySet::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Returns whether the given year is a leap year.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2025));
/// assert!(!is_leap_year(1900)); // Century rule
/// assert!(is_leap_year(2000));  // 400-year rule
/// ```
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in the given month.
///
/// # Panics
/// Panics if `month` is not in 1-12.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), 31);
/// assert_eq!(days_in_month(2024, 2), 29); // Leap year
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month must be in 1-12");
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Resolves the `week`-th occurrence of `weekday` in the given month,
/// counting from the 1st.
///
/// Returns `None` when the month does not contain that many occurrences
/// (every month contains at least four of each weekday, so this only
/// happens for `week >= 5`).
///
/// # Panics
/// Panics if `month` is not in 1-12.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::{nth_weekday_of_month, Date, Weekday};
///
/// // Second Tuesday of January 2024
/// let date = nth_weekday_of_month(2024, 1, Weekday::Tuesday, 2).unwrap();
/// assert_eq!(date, Date::from_ymd(2024, 1, 9).unwrap());
///
/// // February 2024 has no fifth Thursday
/// assert!(nth_weekday_of_month(2024, 2, Weekday::Thursday, 5).is_none());
/// ```
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, week: u32) -> Option<Date> {
    let first = Date::from_ymd(year, month, 1).ok()?;
    let offset = (weekday.index() + 7 - first.weekday().index()) % 7;
    let day = 1 + offset + (week.checked_sub(1)?) * 7;
    if day > days_in_month(year, month) {
        return None;
    }
    Date::from_ymd(year, month, day).ok()
}

/// Resolves the last occurrence of `weekday` in the given month.
///
/// # Panics
/// Panics if `month` is not in 1-12.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::{last_weekday_of_month, Date, Weekday};
///
/// // Last Thursday of February 2024
/// let date = last_weekday_of_month(2024, 2, Weekday::Thursday).unwrap();
/// assert_eq!(date, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<Date> {
    let dim = days_in_month(year, month);
    let last = Date::from_ymd(year, month, dim).ok()?;
    let offset = (last.weekday().index() + 7 - weekday.index()) % 7;
    Date::from_ymd(year, month, dim - offset).ok()
}

//! Recurrence pattern definition, validation, and builder.

use recur_core::types::{Date, Weekday, WeekdaySet};

use super::error::PatternError;
use super::frequency::Frequency;

/// An "Nth weekday of the month" selector for monthly patterns.
///
/// `week` counts occurrences of `weekday` from the 1st of the month.
/// `week = 5` means the **last** occurrence in the month, covering months
/// that hold only four of the given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NthWeekday {
    /// Occurrence ordinal within the month, 1-5 (5 = last).
    pub week: u32,
    /// The weekday to select.
    pub weekday: Weekday,
}

/// The condition deciding when expansion stops emitting occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop once a candidate exceeds this date. A candidate exactly equal
    /// to the end date is still emitted (inclusive boundary).
    EndDate(Date),
    /// Stop after this many occurrences have been emitted. Must be >= 1.
    Count(u32),
    /// No explicit stop; the engine's safety cap bounds the expansion.
    Unbounded,
}

/// A declarative repeating-schedule description.
///
/// The engine's sole input: an anchor date, a frequency with an interval,
/// frequency-specific configuration, and a termination condition. Only the
/// fields relevant to `frequency` are meaningful; irrelevant fields are
/// ignored by validation and expansion.
///
/// Patterns are immutable values. Construct them with [`PatternBuilder`]
/// (which validates on `build`) or assemble them field-by-field and call
/// [`RecurrencePattern::validate`]; expansion re-validates either way, so
/// an invariant-violating pattern is rejected, never silently coerced.
///
/// # Examples
///
/// ```
/// use recur_core::types::{Date, Weekday, WeekdaySet};
/// use recur_engine::recurrence::PatternBuilder;
///
/// // Every Monday and Wednesday, four times
/// let pattern = PatternBuilder::weekly(Date::from_ymd(2024, 1, 1).unwrap())
///     .week_day(Weekday::Monday)
///     .week_day(Weekday::Wednesday)
///     .count(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(pattern.interval, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecurrencePattern {
    /// The schedule's first possible occurrence; lower bound of all output.
    pub anchor: Date,

    /// The unit the pattern steps in.
    pub frequency: Frequency,

    /// Every N units of the frequency. Must be >= 1.
    pub interval: u32,

    /// Weekly only: the weekdays selected within each stepped week.
    pub week_days: Option<WeekdaySet>,

    /// Monthly mode A: fixed day of month, 1-31. Months shorter than this
    /// day are skipped entirely.
    pub month_day: Option<u32>,

    /// Monthly mode B: Nth-weekday-of-month selector.
    pub nth_weekday: Option<NthWeekday>,

    /// Yearly: calendar month, 1-12.
    pub year_month: Option<u32>,

    /// Yearly: day within `year_month`, 1-31. Feb 29 in a non-leap
    /// candidate year is skipped.
    pub year_day: Option<u32>,

    /// When to stop emitting occurrences.
    pub termination: Termination,
}

impl RecurrencePattern {
    /// Checks every pattern invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant:
    /// - `interval < 1`
    /// - Weekly without a weekday set, or with an empty one
    /// - Monthly with both modes, neither mode, or an out-of-range
    ///   `month_day` / `week`
    /// - Yearly with a missing or out-of-range month or day
    /// - `Count(0)`, or an end date earlier than the anchor
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::{Date, WeekdaySet};
    /// use recur_engine::recurrence::{Frequency, PatternError, RecurrencePattern, Termination};
    ///
    /// let pattern = RecurrencePattern {
    ///     anchor: Date::from_ymd(2024, 1, 1).unwrap(),
    ///     frequency: Frequency::Weekly,
    ///     interval: 1,
    ///     week_days: Some(WeekdaySet::empty()),
    ///     month_day: None,
    ///     nth_weekday: None,
    ///     year_month: None,
    ///     year_day: None,
    ///     termination: Termination::Unbounded,
    /// };
    ///
    /// assert_eq!(pattern.validate(), Err(PatternError::EmptyWeekdaySet));
    /// ```
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.interval < 1 {
            return Err(PatternError::InvalidInterval {
                interval: self.interval,
            });
        }

        match self.frequency {
            Frequency::Daily => {}
            Frequency::Weekly => {
                let days = self
                    .week_days
                    .ok_or(PatternError::MissingField { field: "week_days" })?;
                if days.is_empty() {
                    return Err(PatternError::EmptyWeekdaySet);
                }
            }
            Frequency::Monthly => match (self.month_day, self.nth_weekday) {
                (Some(_), Some(_)) => return Err(PatternError::MonthlyModeConflict),
                (None, None) => return Err(PatternError::MissingMonthlyMode),
                (Some(day), None) => {
                    if !(1..=31).contains(&day) {
                        return Err(PatternError::DayOfMonthOutOfRange { day });
                    }
                }
                (None, Some(nth)) => {
                    if !(1..=5).contains(&nth.week) {
                        return Err(PatternError::MonthWeekOutOfRange { week: nth.week });
                    }
                }
            },
            Frequency::Yearly => {
                let month = self
                    .year_month
                    .ok_or(PatternError::MissingField { field: "year_month" })?;
                let day = self
                    .year_day
                    .ok_or(PatternError::MissingField { field: "year_day" })?;
                if !(1..=12).contains(&month) {
                    return Err(PatternError::MonthOutOfRange { month });
                }
                if !(1..=31).contains(&day) {
                    return Err(PatternError::DayOfMonthOutOfRange { day });
                }
            }
        }

        match self.termination {
            Termination::Count(0) => Err(PatternError::InvalidCount),
            Termination::EndDate(end) if end < self.anchor => Err(PatternError::EndBeforeAnchor {
                anchor: self.anchor,
                end,
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing validated recurrence patterns.
///
/// The termination defaults to [`Termination::Unbounded`] and the interval
/// to 1; everything else must be supplied before `build`.
///
/// # Examples
///
/// ```
/// use recur_core::types::{Date, Weekday};
/// use recur_engine::recurrence::PatternBuilder;
///
/// // Day 31 of every month until mid-2024
/// let pattern = PatternBuilder::monthly(Date::from_ymd(2024, 1, 31).unwrap())
///     .month_day(31)
///     .end_date(Date::from_ymd(2024, 6, 30).unwrap())
///     .build()
///     .unwrap();
///
/// // Second Tuesday of every third month, forever (capped internally)
/// let nth = PatternBuilder::monthly(Date::from_ymd(2024, 1, 1).unwrap())
///     .nth_weekday(2, Weekday::Tuesday)
///     .interval(3)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    anchor: Option<Date>,
    frequency: Option<Frequency>,
    interval: Option<u32>,
    week_days: Option<WeekdaySet>,
    month_day: Option<u32>,
    nth_weekday: Option<NthWeekday>,
    year_month: Option<u32>,
    year_day: Option<u32>,
    termination: Option<Termination>,
}

impl PatternBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a daily pattern anchored at the given date.
    pub fn daily(anchor: Date) -> Self {
        Self::new().anchor(anchor).frequency(Frequency::Daily)
    }

    /// Starts a weekly pattern anchored at the given date.
    pub fn weekly(anchor: Date) -> Self {
        Self::new().anchor(anchor).frequency(Frequency::Weekly)
    }

    /// Starts a monthly pattern anchored at the given date.
    pub fn monthly(anchor: Date) -> Self {
        Self::new().anchor(anchor).frequency(Frequency::Monthly)
    }

    /// Starts a yearly pattern anchored at the given date.
    pub fn yearly(anchor: Date) -> Self {
        Self::new().anchor(anchor).frequency(Frequency::Yearly)
    }

    /// Sets the anchor date.
    pub fn anchor(mut self, date: Date) -> Self {
        self.anchor = Some(date);
        self
    }

    /// Sets the frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the interval ("every N units").
    pub fn interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the full weekday set for a weekly pattern.
    pub fn week_days(mut self, days: WeekdaySet) -> Self {
        self.week_days = Some(days);
        self
    }

    /// Adds a single weekday to a weekly pattern's set.
    pub fn week_day(mut self, weekday: Weekday) -> Self {
        let mut days = self.week_days.unwrap_or_default();
        days.insert(weekday);
        self.week_days = Some(days);
        self
    }

    /// Sets monthly mode A: a fixed day of month.
    pub fn month_day(mut self, day: u32) -> Self {
        self.month_day = Some(day);
        self
    }

    /// Sets monthly mode B: the `week`-th `weekday` of each month
    /// (`week = 5` selects the last occurrence).
    pub fn nth_weekday(mut self, week: u32, weekday: Weekday) -> Self {
        self.nth_weekday = Some(NthWeekday { week, weekday });
        self
    }

    /// Sets the yearly month and day.
    pub fn year_date(mut self, month: u32, day: u32) -> Self {
        self.year_month = Some(month);
        self.year_day = Some(day);
        self
    }

    /// Terminates at an inclusive end date.
    pub fn end_date(mut self, date: Date) -> Self {
        self.termination = Some(Termination::EndDate(date));
        self
    }

    /// Terminates after the given number of occurrences.
    pub fn count(mut self, count: u32) -> Self {
        self.termination = Some(Termination::Count(count));
        self
    }

    /// Leaves the pattern unbounded (the engine's safety cap applies).
    pub fn unbounded(mut self) -> Self {
        self.termination = Some(Termination::Unbounded);
        self
    }

    /// Builds the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the anchor or frequency is missing, or if any
    /// invariant checked by [`RecurrencePattern::validate`] is violated.
    pub fn build(self) -> Result<RecurrencePattern, PatternError> {
        let anchor = self
            .anchor
            .ok_or(PatternError::MissingField { field: "anchor" })?;
        let frequency = self
            .frequency
            .ok_or(PatternError::MissingField { field: "frequency" })?;

        let pattern = RecurrencePattern {
            anchor,
            frequency,
            interval: self.interval.unwrap_or(1),
            week_days: self.week_days,
            month_day: self.month_day,
            nth_weekday: self.nth_weekday,
            year_month: self.year_month,
            year_day: self.year_day,
            termination: self.termination.unwrap_or(Termination::Unbounded),
        };

        pattern.validate()?;
        Ok(pattern)
    }
}

//! Pattern expansion: per-frequency steppers and the shared emission loop.
//!
//! Each frequency has a private stepper, an iterator yielding candidate
//! dates in strictly ascending order, at or after the anchor, bounded by a
//! horizon derived from [`ExpansionLimits::max_span_years`]. Candidates a
//! stepper cannot resolve (day 31 in a 30-day month, Feb 29 in a non-leap
//! year, a fifth weekday a month lacks) are skipped without advancing the
//! emission count, so the stride never drifts. The emission loop applies
//! the pattern's termination condition and the occurrence cap on top.

use std::collections::VecDeque;

use chrono::{Datelike, Months, NaiveDate};
use recur_core::types::time::{last_weekday_of_month, nth_weekday_of_month};
use recur_core::types::{Date, WeekdaySet};

use super::error::PatternError;
use super::frequency::Frequency;
use super::limits::ExpansionLimits;
use super::pattern::{NthWeekday, RecurrencePattern, Termination};

/// Expands a pattern into its ordered occurrence dates using the default
/// [`ExpansionLimits`].
///
/// The result is strictly ascending, duplicate-free, and bounded below by
/// the pattern's anchor. Expansion is pure: the same pattern always yields
/// the same dates.
///
/// # Errors
///
/// Returns an error if the pattern fails [`RecurrencePattern::validate`].
///
/// # Examples
///
/// ```
/// use recur_core::types::Date;
/// use recur_engine::recurrence::{expand, PatternBuilder};
///
/// // Day 31 of every month during the first half of 2024.
/// // February, April, and June are skipped, never clamped.
/// let pattern = PatternBuilder::monthly(Date::from_ymd(2024, 1, 31).unwrap())
///     .month_day(31)
///     .end_date(Date::from_ymd(2024, 6, 30).unwrap())
///     .build()
///     .unwrap();
///
/// let dates = expand(&pattern).unwrap();
/// assert_eq!(dates, vec![
///     Date::from_ymd(2024, 1, 31).unwrap(),
///     Date::from_ymd(2024, 3, 31).unwrap(),
///     Date::from_ymd(2024, 5, 31).unwrap(),
/// ]);
/// ```
pub fn expand(pattern: &RecurrencePattern) -> Result<Vec<Date>, PatternError> {
    expand_with_limits(pattern, ExpansionLimits::default())
}

/// Expands a pattern under caller-supplied safety limits.
///
/// `limits.max_occurrences` bounds the output length in every termination
/// mode, and `limits.max_span_years` bounds how far past the anchor the
/// steppers look. The span bound is what terminates patterns whose every
/// candidate is skipped.
///
/// # Errors
///
/// Returns an error if the pattern fails [`RecurrencePattern::validate`].
///
/// # Examples
///
/// ```
/// use recur_core::types::Date;
/// use recur_engine::recurrence::{expand_with_limits, ExpansionLimits, PatternBuilder};
///
/// let pattern = PatternBuilder::daily(Date::from_ymd(2024, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// let dates = expand_with_limits(&pattern, ExpansionLimits::new(10, 100)).unwrap();
/// assert_eq!(dates.len(), 10);
/// ```
pub fn expand_with_limits(
    pattern: &RecurrencePattern,
    limits: ExpansionLimits,
) -> Result<Vec<Date>, PatternError> {
    pattern.validate()?;

    let horizon = horizon_for(pattern.anchor, limits.max_span_years);
    let candidates: Box<dyn Iterator<Item = Date>> = match pattern.frequency {
        Frequency::Daily => Box::new(DailyStepper::new(pattern.anchor, pattern.interval, horizon)),
        Frequency::Weekly => {
            let days = pattern
                .week_days
                .ok_or(PatternError::MissingField { field: "week_days" })?;
            Box::new(WeeklyStepper::new(
                pattern.anchor,
                pattern.interval,
                days,
                horizon,
            ))
        }
        Frequency::Monthly => {
            let mode = if let Some(day) = pattern.month_day {
                MonthlyMode::DayOfMonth(day)
            } else if let Some(nth) = pattern.nth_weekday {
                MonthlyMode::NthWeekday(nth)
            } else {
                return Err(PatternError::MissingMonthlyMode);
            };
            Box::new(MonthlyStepper::new(
                pattern.anchor,
                pattern.interval,
                mode,
                horizon,
            ))
        }
        Frequency::Yearly => {
            let month = pattern
                .year_month
                .ok_or(PatternError::MissingField { field: "year_month" })?;
            let day = pattern
                .year_day
                .ok_or(PatternError::MissingField { field: "year_day" })?;
            Box::new(YearlyStepper::new(
                pattern.anchor,
                pattern.interval,
                month,
                day,
                horizon,
            ))
        }
    };

    Ok(emit(candidates, pattern.termination, limits.max_occurrences))
}

/// Applies the termination condition and occurrence cap to a candidate
/// stream. The end date boundary is inclusive.
fn emit(
    candidates: impl Iterator<Item = Date>,
    termination: Termination,
    max_occurrences: usize,
) -> Vec<Date> {
    let mut dates = Vec::new();
    for date in candidates {
        if let Termination::EndDate(end) = termination {
            if date > end {
                break;
            }
        }
        dates.push(date);
        if dates.len() >= max_occurrences {
            break;
        }
        if let Termination::Count(count) = termination {
            if dates.len() >= count as usize {
                break;
            }
        }
    }
    dates
}

/// The last day the steppers may consider, `anchor + span_years`.
///
/// Saturates at the calendar maximum so pathological anchors still get a
/// usable bound.
fn horizon_for(anchor: Date, span_years: u32) -> NaiveDate {
    let months = span_years.checked_mul(12).unwrap_or(u32::MAX);
    anchor
        .into_inner()
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts a date by whole calendar months, clamping the day to the target
/// month's length (only first-of-month cursors are shifted here, so the
/// clamp never fires in practice).
fn add_months(date: Date, months: u32) -> Option<Date> {
    let shifted = date.into_inner().checked_add_months(Months::new(months))?;
    Date::from_ymd(shifted.year(), shifted.month(), shifted.day()).ok()
}

/// Every `interval` days from the anchor. Never skips.
struct DailyStepper {
    cursor: Option<Date>,
    step_days: i64,
    horizon: NaiveDate,
}

impl DailyStepper {
    fn new(anchor: Date, interval: u32, horizon: NaiveDate) -> Self {
        Self {
            cursor: Some(anchor),
            step_days: i64::from(interval),
            horizon,
        }
    }
}

impl Iterator for DailyStepper {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.cursor?;
        if current.into_inner() > self.horizon {
            self.cursor = None;
            return None;
        }
        self.cursor = current.add_days(self.step_days);
        Some(current)
    }
}

/// Sunday-aligned weeks every `interval` weeks from the anchor's week,
/// yielding the selected weekdays within each stepped week. Candidates in
/// the anchor's own week that fall before the anchor are discarded.
struct WeeklyStepper {
    anchor: Date,
    days: WeekdaySet,
    step_days: i64,
    week_start: Option<Date>,
    pending: VecDeque<Date>,
    horizon: NaiveDate,
}

impl WeeklyStepper {
    fn new(anchor: Date, interval: u32, days: WeekdaySet, horizon: NaiveDate) -> Self {
        Self {
            anchor,
            days,
            step_days: i64::from(interval) * 7,
            week_start: Some(anchor.start_of_week()),
            pending: VecDeque::new(),
            horizon,
        }
    }
}

impl Iterator for WeeklyStepper {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        loop {
            if let Some(date) = self.pending.pop_front() {
                return Some(date);
            }

            let week_start = self.week_start?;
            if week_start.into_inner() > self.horizon {
                self.week_start = None;
                return None;
            }
            self.week_start = week_start.add_days(self.step_days);

            for weekday in self.days.iter() {
                if let Some(date) = week_start.add_days(i64::from(weekday.index())) {
                    if date >= self.anchor {
                        self.pending.push_back(date);
                    }
                }
            }
        }
    }
}

enum MonthlyMode {
    DayOfMonth(u32),
    NthWeekday(NthWeekday),
}

/// Calendar months every `interval` months from the anchor's month. A month
/// where the mode resolves to no date (too short, or lacking the requested
/// weekday occurrence) is skipped; the next candidate month is still
/// `interval` months after it.
struct MonthlyStepper {
    anchor: Date,
    mode: MonthlyMode,
    interval: u32,
    month_start: Option<Date>,
    horizon: NaiveDate,
}

impl MonthlyStepper {
    fn new(anchor: Date, interval: u32, mode: MonthlyMode, horizon: NaiveDate) -> Self {
        // The anchor is a valid date, so the first of its month is too
        let month_start = Date::from_ymd(anchor.year(), anchor.month(), 1).ok();
        Self {
            anchor,
            mode,
            interval,
            month_start,
            horizon,
        }
    }

    fn resolve(&self, year: i32, month: u32) -> Option<Date> {
        match self.mode {
            MonthlyMode::DayOfMonth(day) => Date::from_ymd(year, month, day).ok(),
            MonthlyMode::NthWeekday(nth) if nth.week == 5 => {
                last_weekday_of_month(year, month, nth.weekday)
            }
            MonthlyMode::NthWeekday(nth) => {
                nth_weekday_of_month(year, month, nth.weekday, nth.week)
            }
        }
    }
}

impl Iterator for MonthlyStepper {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        loop {
            let month_start = self.month_start?;
            if month_start.into_inner() > self.horizon {
                self.month_start = None;
                return None;
            }
            self.month_start = add_months(month_start, self.interval);

            match self.resolve(month_start.year(), month_start.month()) {
                Some(date) if date >= self.anchor => return Some(date),
                _ => continue,
            }
        }
    }
}

/// Calendar years every `interval` years from the anchor's year, resolving
/// a fixed month and day in each. Feb 29 in a non-leap candidate year is
/// skipped without perturbing the year stride.
struct YearlyStepper {
    anchor: Date,
    month: u32,
    day: u32,
    year: Option<i32>,
    step_years: i32,
    horizon: NaiveDate,
}

impl YearlyStepper {
    fn new(anchor: Date, interval: u32, month: u32, day: u32, horizon: NaiveDate) -> Self {
        Self {
            anchor,
            month,
            day,
            year: Some(anchor.year()),
            step_years: i32::try_from(interval).unwrap_or(i32::MAX),
            horizon,
        }
    }
}

impl Iterator for YearlyStepper {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        loop {
            let year = self.year?;
            if year > self.horizon.year() {
                self.year = None;
                return None;
            }
            self.year = year.checked_add(self.step_years);

            if let Ok(date) = Date::from_ymd(year, self.month, self.day) {
                if date >= self.anchor {
                    return Some(date);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::PatternBuilder;
    use recur_core::types::Weekday;

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    // Daily

    #[test]
    fn test_daily_every_second_day() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1))
            .interval(2)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 5)]);
    }

    #[test]
    fn test_daily_first_occurrence_is_anchor() {
        let pattern = PatternBuilder::daily(date(2024, 6, 15))
            .interval(10)
            .count(1)
            .build()
            .unwrap();

        assert_eq!(expand(&pattern).unwrap(), vec![date(2024, 6, 15)]);
    }

    #[test]
    fn test_daily_crosses_month_and_year_boundaries() {
        let pattern = PatternBuilder::daily(date(2023, 12, 30))
            .count(4)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 1),
                date(2024, 1, 2),
            ]
        );
    }

    // Weekly

    #[test]
    fn test_weekly_discards_pre_anchor_candidates() {
        // Anchor is Thursday 2024-01-04; Monday Jan 1 and Wednesday Jan 3
        // fall in the anchor's week but before the anchor
        let pattern = PatternBuilder::weekly(date(2024, 1, 4))
            .week_day(Weekday::Monday)
            .week_day(Weekday::Wednesday)
            .count(4)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 8),
                date(2024, 1, 10),
                date(2024, 1, 15),
                date(2024, 1, 17),
            ]
        );
    }

    #[test]
    fn test_weekly_monday_wednesday_from_monday_anchor() {
        let pattern = PatternBuilder::weekly(date(2024, 1, 1))
            .week_day(Weekday::Monday)
            .week_day(Weekday::Wednesday)
            .count(4)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 3),
                date(2024, 1, 8),
                date(2024, 1, 10),
            ]
        );
    }

    #[test]
    fn test_weekly_anchor_day_in_set_is_emitted() {
        // Anchor is Monday 2024-01-01 and Monday is selected
        let pattern = PatternBuilder::weekly(date(2024, 1, 1))
            .week_day(Weekday::Monday)
            .week_day(Weekday::Friday)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 5), date(2024, 1, 8)]);
    }

    #[test]
    fn test_weekly_interval_skips_weeks() {
        // Every other week, Sundays; anchor is Sunday 2024-01-07
        let pattern = PatternBuilder::weekly(date(2024, 1, 7))
            .week_day(Weekday::Sunday)
            .interval(2)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 7), date(2024, 1, 21), date(2024, 2, 4)]);
    }

    #[test]
    fn test_weekly_multiple_days_stay_ascending_within_week() {
        let pattern = PatternBuilder::weekly(date(2024, 1, 1))
            .week_days(WeekdaySet::from_weekdays(&[
                Weekday::Saturday,
                Weekday::Sunday,
                Weekday::Wednesday,
            ]))
            .count(6)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        // Week of Dec 31: Sunday Dec 31 is pre-anchor, Wed Jan 3 and Sat
        // Jan 6 survive; then the full following week
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 3),
                date(2024, 1, 6),
                date(2024, 1, 7),
                date(2024, 1, 10),
                date(2024, 1, 13),
                date(2024, 1, 14),
            ]
        );
    }

    // Monthly, day-of-month mode

    #[test]
    fn test_monthly_day_31_skips_short_months() {
        let pattern = PatternBuilder::monthly(date(2024, 1, 31))
            .month_day(31)
            .end_date(date(2024, 6, 30))
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 3, 31), date(2024, 5, 31)]);
    }

    #[test]
    fn test_monthly_skip_does_not_shift_stride() {
        // Every second month from December: Dec, Feb, Apr, Jun, Aug.
        // February 2024 has 29 days so day 30 is skipped there, and the
        // stride stays on even months rather than sliding to March
        let pattern = PatternBuilder::monthly(date(2023, 12, 30))
            .month_day(30)
            .interval(2)
            .count(4)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2023, 12, 30),
                date(2024, 4, 30),
                date(2024, 6, 30),
                date(2024, 8, 30),
            ]
        );
    }

    #[test]
    fn test_monthly_anchor_after_candidate_day() {
        // Anchor Jan 20, day 15: January's candidate precedes the anchor
        let pattern = PatternBuilder::monthly(date(2024, 1, 20))
            .month_day(15)
            .count(2)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 2, 15), date(2024, 3, 15)]);
    }

    // Monthly, Nth-weekday mode

    #[test]
    fn test_monthly_second_tuesday() {
        let pattern = PatternBuilder::monthly(date(2024, 1, 1))
            .nth_weekday(2, Weekday::Tuesday)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 9), date(2024, 2, 13), date(2024, 3, 12)]);
    }

    #[test]
    fn test_monthly_week_five_means_last() {
        // January 2024 has only four Fridays; week 5 must fall back to the
        // last one instead of skipping the month
        let pattern = PatternBuilder::monthly(date(2024, 1, 1))
            .nth_weekday(5, Weekday::Friday)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 26), date(2024, 2, 23), date(2024, 3, 29)]);
    }

    #[test]
    fn test_monthly_nth_weekday_with_interval() {
        // First Monday of every third month
        let pattern = PatternBuilder::monthly(date(2024, 1, 1))
            .nth_weekday(1, Weekday::Monday)
            .interval(3)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 4, 1), date(2024, 7, 1)]);
    }

    // Yearly

    #[test]
    fn test_yearly_plain_anniversary() {
        let pattern = PatternBuilder::yearly(date(2024, 3, 10))
            .year_date(3, 10)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 3, 10), date(2025, 3, 10), date(2026, 3, 10)]);
    }

    #[test]
    fn test_yearly_feb_29_skips_non_leap_years() {
        let pattern = PatternBuilder::yearly(date(2024, 1, 1))
            .year_date(2, 29)
            .count(3)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 2, 29), date(2028, 2, 29), date(2032, 2, 29)]);
    }

    #[test]
    fn test_yearly_anchor_after_date_in_year() {
        // Anchor June 2024, pattern lands in March: 2024's candidate is
        // pre-anchor, so the first occurrence is in 2026 (interval 2)
        let pattern = PatternBuilder::yearly(date(2024, 6, 1))
            .year_date(3, 15)
            .interval(2)
            .count(2)
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2026, 3, 15), date(2028, 3, 15)]);
    }

    // Termination

    #[test]
    fn test_end_date_is_inclusive() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1))
            .end_date(date(2024, 1, 3))
            .build()
            .unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
    }

    #[test]
    fn test_end_date_equal_anchor_yields_one() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1))
            .end_date(date(2024, 1, 1))
            .build()
            .unwrap();

        assert_eq!(expand(&pattern).unwrap(), vec![date(2024, 1, 1)]);
    }

    #[test]
    fn test_unbounded_hits_occurrence_cap() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1)).build().unwrap();

        let dates = expand(&pattern).unwrap();
        assert_eq!(dates.len(), ExpansionLimits::default().max_occurrences);
    }

    #[test]
    fn test_custom_occurrence_cap() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1)).build().unwrap();

        let dates = expand_with_limits(&pattern, ExpansionLimits::new(10, 100)).unwrap();
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[9], date(2024, 1, 10));
    }

    #[test]
    fn test_occurrence_cap_bounds_explicit_count() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1))
            .count(500)
            .build()
            .unwrap();

        let dates = expand_with_limits(&pattern, ExpansionLimits::new(20, 100)).unwrap();
        assert_eq!(dates.len(), 20);
    }

    #[test]
    fn test_all_skip_pattern_terminates_empty() {
        // Feb 29 every second year starting from an odd year never lands
        // on a leap year; the span bound ends the expansion
        let pattern = PatternBuilder::yearly(date(2025, 1, 1))
            .year_date(2, 29)
            .interval(2)
            .count(5)
            .build()
            .unwrap();

        let dates = expand_with_limits(&pattern, ExpansionLimits::new(100, 50)).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_span_bound_applies_to_end_date_mode() {
        // Same all-skip pattern with a far end date still terminates
        let pattern = PatternBuilder::yearly(date(2025, 1, 1))
            .year_date(2, 29)
            .interval(2)
            .end_date(date(9999, 1, 1))
            .build()
            .unwrap();

        let dates = expand_with_limits(&pattern, ExpansionLimits::new(100, 50)).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let pattern = PatternBuilder::daily(date(2024, 1, 1)).build().unwrap();
        let mut broken = pattern;
        broken.interval = 0;

        assert_eq!(
            expand(&broken),
            Err(PatternError::InvalidInterval { interval: 0 })
        );
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let pattern = PatternBuilder::weekly(date(2024, 2, 14))
            .week_day(Weekday::Tuesday)
            .week_day(Weekday::Thursday)
            .interval(3)
            .count(25)
            .build()
            .unwrap();

        assert_eq!(expand(&pattern).unwrap(), expand(&pattern).unwrap());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn anchor_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        fn pattern_strategy() -> impl Strategy<Value = RecurrencePattern> {
            (anchor_strategy(), 1u32..5u32, 1u32..50u32, 0u8..4u8).prop_flat_map(
                |(anchor, interval, count, kind)| {
                    let builder = match kind {
                        0 => PatternBuilder::daily(anchor),
                        1 => PatternBuilder::weekly(anchor)
                            .week_day(Weekday::Monday)
                            .week_day(Weekday::Thursday),
                        2 => PatternBuilder::monthly(anchor).month_day(15),
                        _ => PatternBuilder::yearly(anchor).year_date(6, 15),
                    };
                    Just(builder.interval(interval).count(count).build().unwrap())
                },
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_output_strictly_ascending(pattern in pattern_strategy()) {
                let dates = expand(&pattern).unwrap();
                for pair in dates.windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
            }

            #[test]
            fn test_output_bounded_below_by_anchor(pattern in pattern_strategy()) {
                let dates = expand(&pattern).unwrap();
                for date in dates {
                    prop_assert!(date >= pattern.anchor);
                }
            }

            #[test]
            fn test_count_is_respected(pattern in pattern_strategy()) {
                let dates = expand(&pattern).unwrap();
                if let Termination::Count(count) = pattern.termination {
                    prop_assert!(dates.len() <= count as usize);
                }
            }

            #[test]
            fn test_expansion_deterministic(pattern in pattern_strategy()) {
                prop_assert_eq!(expand(&pattern).unwrap(), expand(&pattern).unwrap());
            }

            #[test]
            fn test_daily_arithmetic(
                anchor in anchor_strategy(),
                interval in 1u32..30u32,
                count in 1u32..50u32,
            ) {
                let pattern = PatternBuilder::daily(anchor)
                    .interval(interval)
                    .count(count)
                    .build()
                    .unwrap();

                let dates = expand(&pattern).unwrap();
                prop_assert_eq!(dates.len(), count as usize);
                for (i, date) in dates.iter().enumerate() {
                    let expected = anchor.add_days(i as i64 * i64::from(interval)).unwrap();
                    prop_assert_eq!(*date, expected);
                }
            }

            #[test]
            fn test_weekly_output_on_selected_days(
                anchor in anchor_strategy(),
                interval in 1u32..5u32,
            ) {
                let days = WeekdaySet::from_weekdays(&[Weekday::Tuesday, Weekday::Saturday]);
                let pattern = PatternBuilder::weekly(anchor)
                    .week_days(days)
                    .interval(interval)
                    .count(20)
                    .build()
                    .unwrap();

                for date in expand(&pattern).unwrap() {
                    prop_assert!(days.contains(date.weekday()));
                }
            }

            #[test]
            fn test_end_date_is_upper_bound(
                anchor in anchor_strategy(),
                span in 0i64..400i64,
            ) {
                let end = anchor.add_days(span).unwrap();
                let pattern = PatternBuilder::daily(anchor)
                    .interval(3)
                    .end_date(end)
                    .build()
                    .unwrap();

                let dates = expand(&pattern).unwrap();
                prop_assert!(!dates.is_empty());
                for date in dates {
                    prop_assert!(date <= end);
                }
            }
        }
    }
}

//! Expansion safety limits.

/// Safety cap bounding every expansion.
///
/// Applies to all termination modes: `max_occurrences` bounds the output
/// length and `max_span_years` bounds how far past the anchor the steppers
/// look. The span bound is what guarantees termination for patterns whose
/// every candidate is skipped (for example a yearly Feb-29 rule whose
/// interval never lands on a leap year).
///
/// # Example
///
/// ```
/// use recur_engine::recurrence::ExpansionLimits;
///
/// // Use default limits
/// let limits = ExpansionLimits::default();
/// assert_eq!(limits.max_occurrences, 1000);
/// assert_eq!(limits.max_span_years, 100);
///
/// // Custom limits
/// let custom = ExpansionLimits {
///     max_occurrences: 50,
///     max_span_years: 10,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Maximum number of occurrences a single expansion may emit.
    pub max_occurrences: usize,

    /// Maximum look-ahead from the anchor date, in calendar years.
    ///
    /// Steppers stop once their candidate period starts beyond
    /// `anchor + max_span_years`, whether or not anything was emitted.
    pub max_span_years: u32,
}

impl Default for ExpansionLimits {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `max_occurrences`: 1000
    /// - `max_span_years`: 100
    fn default() -> Self {
        Self {
            max_occurrences: 1000,
            max_span_years: 100,
        }
    }
}

impl ExpansionLimits {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `max_occurrences == 0` or `max_span_years == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use recur_engine::recurrence::ExpansionLimits;
    ///
    /// let limits = ExpansionLimits::new(200, 20);
    /// assert_eq!(limits.max_occurrences, 200);
    /// ```
    pub fn new(max_occurrences: usize, max_span_years: u32) -> Self {
        assert!(max_occurrences > 0, "max_occurrences must be > 0");
        assert!(max_span_years > 0, "max_span_years must be > 0");
        Self {
            max_occurrences,
            max_span_years,
        }
    }

    /// Create a configuration for long-range planning.
    ///
    /// Uses a wider horizon (500 years) and a larger occurrence budget
    /// (10 000) for callers materialising far-future schedules.
    pub fn long_horizon() -> Self {
        Self {
            max_occurrences: 10_000,
            max_span_years: 500,
        }
    }
}

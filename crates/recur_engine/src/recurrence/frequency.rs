//! Recurrence frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// The base unit a recurrence pattern steps in.
///
/// Combined with a pattern's `interval`, this defines the stride between
/// candidate periods: `Daily` with interval 3 means every third day,
/// `Monthly` with interval 2 every second month, and so on.
///
/// # Examples
///
/// ```
/// use recur_engine::recurrence::Frequency;
///
/// let freq: Frequency = "weekly".parse().unwrap();
/// assert_eq!(freq, Frequency::Weekly);
/// assert_eq!(freq.unit_name(), "week");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Step in days.
    Daily,
    /// Step in Sunday-aligned weeks, selecting weekdays within each week.
    Weekly,
    /// Step in calendar months.
    Monthly,
    /// Step in calendar years.
    Yearly,
}

impl Frequency {
    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }

    /// Returns the singular unit the interval multiplies.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_engine::recurrence::Frequency;
    ///
    /// assert_eq!(Frequency::Daily.unit_name(), "day");
    /// assert_eq!(Frequency::Yearly.unit_name(), "year");
    /// ```
    #[inline]
    pub fn unit_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported forms: "daily"/"day", "weekly"/"week", "monthly"/"month",
    /// "yearly"/"year"/"annual".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Frequency::Daily),
            "weekly" | "week" => Ok(Frequency::Weekly),
            "monthly" | "month" => Ok(Frequency::Monthly),
            "yearly" | "year" | "annual" => Ok(Frequency::Yearly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Frequency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}

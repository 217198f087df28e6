use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, CENTURY_DURATION, DECADE_DURATION, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MONTH_LENGTHS,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day value guaranteed to be valid for the year and month it was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i64, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// How many trailing digits of a year are actually known.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum YearPrecision {
    #[default]
    #[display(fmt = "exact")]
    Exact,
    /// Last digit unknown, year is a multiple of 10
    #[display(fmt = "decade")]
    Decade,
    /// Last two digits unknown, year is a multiple of 100
    #[display(fmt = "century")]
    Century,
}

impl YearPrecision {
    /// Number of years a single value of this precision spans
    pub const fn duration(self) -> i64 {
        match self {
            Self::Exact => 1,
            Self::Decade => DECADE_DURATION,
            Self::Century => CENTURY_DURATION,
        }
    }

    /// Precision implied by the count of unknown trailing year digits.
    pub const fn from_unknown_digits(count: usize) -> Option<Self> {
        match count {
            0 => Some(Self::Exact),
            1 => Some(Self::Decade),
            2 => Some(Self::Century),
            _ => None,
        }
    }

    /// Count of trailing year digits left unknown
    pub const fn unknown_digits(self) -> usize {
        match self {
            Self::Exact => 0,
            Self::Decade => 1,
            Self::Century => 2,
        }
    }

    /// Drops the digits this precision does not know, rounding toward zero.
    pub const fn truncate(self, year: i64) -> i64 {
        let duration = self.duration();
        (year / duration) * duration
    }
}

/// Kind of an instant used as an interval edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DateEdgeType {
    /// Carries a concrete date
    #[default]
    #[display(fmt = "definite")]
    Definite,
    /// No stated bound, written `..`
    #[display(fmt = "open")]
    Open,
    /// Bound exists but is not known; read from an empty edge, written `..`
    #[display(fmt = "unknown")]
    Unknown,
}

// Helper functions

/// Proleptic Gregorian leap year rule, astronomical numbering for negative years.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

//! Calendar validation and the flexible repair policy, shared by every extractor.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::MAX_SHORT_YEAR;
use crate::types::{Day, Month};
use crate::{
    DateError, DatePart, DateQualification, InstantDate, IntervalDate, YearPrecision,
};

/// How lenient the builders are with a structurally matched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildPolicy {
    /// Swap day and month of an invalid instant, or start and end of a
    /// disordered interval, once before giving up
    pub flexible:    bool,
    /// Dates after this year are rejected; `None` disables the check
    pub latest_year: Option<i64>,
}

impl BuildPolicy {
    /// No repairs, future dates rejected against the system clock
    pub fn strict() -> Self {
        Self {
            flexible:    false,
            latest_year: Some(current_year()),
        }
    }

    /// Repairs allowed, future dates rejected against the system clock
    pub fn flexible() -> Self {
        Self {
            flexible:    true,
            latest_year: Some(current_year()),
        }
    }

    #[must_use]
    pub const fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    #[must_use]
    pub const fn with_latest_year(mut self, year: i64) -> Self {
        self.latest_year = Some(year);
        self
    }

    #[must_use]
    pub const fn without_latest_year(mut self) -> Self {
        self.latest_year = None;
        self
    }
}

fn current_year() -> i64 {
    i64::from(chrono::Utc::now().year())
}

/// Collects raw fields for an instant and validates them on `build`.
///
/// A month or day of `0` means the field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantDateBuilder {
    year:          i64,
    month:         u8,
    day:           u8,
    precision:     YearPrecision,
    qualification: DateQualification,
}

impl InstantDateBuilder {
    pub const fn new(year: i64) -> Self {
        Self {
            year,
            month: 0,
            day: 0,
            precision: YearPrecision::Exact,
            qualification: DateQualification::None,
        }
    }

    #[must_use]
    pub const fn month(mut self, month: u8) -> Self {
        self.month = month;
        self
    }

    #[must_use]
    pub const fn day(mut self, day: u8) -> Self {
        self.day = day;
        self
    }

    #[must_use]
    pub const fn precision(mut self, precision: YearPrecision) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub const fn qualification(mut self, qualification: DateQualification) -> Self {
        self.qualification = qualification;
        self
    }

    /// Validates the fields into a definite instant.
    ///
    /// # Errors
    /// Returns the first calendar rule the fields break. Under a flexible
    /// policy day and month are swapped once first, and the error of the
    /// original order is reported if the swap does not help either.
    pub fn build(self, policy: &BuildPolicy) -> Result<InstantDate, DateError> {
        let part = match self.validate(policy) {
            Ok(part) => part,
            Err(error) if policy.flexible && self.day != 0 => {
                let swapped = Self {
                    month: self.day,
                    day: self.month,
                    ..self
                };
                let part = swapped.validate(policy).map_err(|_| error)?;
                debug!(
                    year = self.year,
                    month = self.month,
                    day = self.day,
                    "swapped day and month"
                );
                part
            }
            Err(error) => return Err(error),
        };
        Ok(InstantDate::definite(part, self.qualification))
    }

    fn validate(&self, policy: &BuildPolicy) -> Result<DatePart, DateError> {
        if self.precision.truncate(self.year) != self.year {
            return Err(DateError::UntruncatedYear {
                year:      self.year,
                precision: self.precision,
            });
        }
        let long_year = self.year.unsigned_abs() > MAX_SHORT_YEAR.unsigned_abs();
        if long_year && (self.month != 0 || self.day != 0) {
            return Err(DateError::LongYearWithMonth(self.year));
        }

        let month = match self.month {
            0 => None,
            value => Some(Month::new(value)?),
        };
        let day = match (self.day, month) {
            (0, _) => None,
            (value, Some(month)) => Some(Day::new(value, self.year, month)?),
            (value, None) => return Err(DateError::DayWithoutMonth(value)),
        };

        if let Some(latest) = policy.latest_year {
            if self.precision.truncate(self.year) > self.precision.truncate(latest) {
                return Err(DateError::FutureYear {
                    year: self.year,
                    latest,
                });
            }
        }

        Ok(DatePart {
            year: self.year,
            precision: self.precision,
            month,
            day,
            uncertain: self.qualification.is_uncertain(),
            unspecified: !matches!(self.precision, YearPrecision::Exact),
        })
    }
}

/// Joins two instants into an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDateBuilder {
    start: InstantDate,
    end:   InstantDate,
}

impl IntervalDateBuilder {
    pub const fn new(start: InstantDate, end: InstantDate) -> Self {
        Self { start, end }
    }

    /// Validates the pair into an interval.
    ///
    /// # Errors
    /// Returns `DateError::OpenInterval` when neither edge is definite, and
    /// `DateError::InvalidRange` when the edges run backwards and the policy
    /// does not allow (or a swap does not fix) the order.
    pub fn build(self, policy: &BuildPolicy) -> Result<IntervalDate, DateError> {
        if !self.start.is_definite() && !self.end.is_definite() {
            return Err(DateError::OpenInterval);
        }
        let interval = IntervalDate::from_edges(self.start, self.end);
        if interval.is_chronological() {
            return Ok(interval);
        }
        if policy.flexible {
            let swapped = interval.swapped();
            if swapped.is_chronological() {
                debug!(start = %self.start, end = %self.end, "swapped interval edges");
                return Ok(swapped);
            }
        }
        Err(DateError::InvalidRange {
            start: self.start.to_string(),
            end:   self.end.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> BuildPolicy {
        BuildPolicy::default().with_flexible(true)
    }

    #[test]
    fn test_instant_valid() {
        let date = InstantDateBuilder::new(2020)
            .month(2)
            .day(29)
            .build(&BuildPolicy::default())
            .unwrap();
        let part = date.part().unwrap();
        assert_eq!((part.year(), part.month(), part.day()), (2020, Some(2), Some(29)));
        assert!(date.is_definite());
    }

    #[test]
    fn test_instant_rejects_calendar_errors() {
        let strict = BuildPolicy::default();
        assert!(matches!(
            InstantDateBuilder::new(2021).month(2).day(29).build(&strict),
            Err(DateError::InvalidDay { day: 29, .. })
        ));
        assert!(matches!(
            InstantDateBuilder::new(1989).month(13).build(&strict),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            InstantDateBuilder::new(1989).day(5).build(&strict),
            Err(DateError::DayWithoutMonth(5))
        ));
        assert!(matches!(
            InstantDateBuilder::new(1989)
                .precision(YearPrecision::Decade)
                .build(&strict),
            Err(DateError::UntruncatedYear { year: 1989, .. })
        ));
        assert!(matches!(
            InstantDateBuilder::new(-170_000_002).month(1).build(&strict),
            Err(DateError::LongYearWithMonth(_))
        ));
    }

    #[test]
    fn test_flexible_swaps_day_and_month() {
        let built = InstantDateBuilder::new(1941)
            .month(22)
            .day(6)
            .build(&lenient())
            .unwrap();
        assert_eq!(built.to_string(), "1941-06-22");

        let strict = InstantDateBuilder::new(1941).month(22).day(6).build(&BuildPolicy::default());
        assert!(matches!(strict, Err(DateError::InvalidMonth(22))));
    }

    #[test]
    fn test_flexible_swap_reports_original_error() {
        let result = InstantDateBuilder::new(1947).month(19).day(50).build(&lenient());
        assert!(matches!(result, Err(DateError::InvalidMonth(19))));
    }

    #[test]
    fn test_flexible_fills_missing_month_from_day() {
        let built = InstantDateBuilder::new(1989).day(5).build(&lenient()).unwrap();
        assert_eq!(built.to_string(), "1989-05");
    }

    #[test]
    fn test_latest_year_adjusts_for_precision() {
        let policy = BuildPolicy::default().with_latest_year(2026);
        assert!(InstantDateBuilder::new(2026).build(&policy).is_ok());
        assert!(matches!(
            InstantDateBuilder::new(2027).build(&policy),
            Err(DateError::FutureYear { year: 2027, latest: 2026 })
        ));
        // the 21st century has started, the 22nd has not
        let current_century = InstantDateBuilder::new(2000).precision(YearPrecision::Century);
        assert!(current_century.build(&policy).is_ok());
        let next_century = InstantDateBuilder::new(2100).precision(YearPrecision::Century);
        assert!(next_century.build(&policy).is_err());
        // a decade is compared by its first year
        let current_decade = InstantDateBuilder::new(2020).precision(YearPrecision::Decade);
        assert!(current_decade.build(&policy).is_ok());
        assert!(InstantDateBuilder::new(2027).build(&policy.without_latest_year()).is_ok());
    }

    #[test]
    fn test_flags_follow_qualification_and_precision() {
        let date = InstantDateBuilder::new(1980)
            .precision(YearPrecision::Decade)
            .qualification(DateQualification::Uncertain)
            .build(&BuildPolicy::default())
            .unwrap();
        let part = date.part().unwrap();
        assert!(part.is_uncertain());
        assert!(part.is_unspecified());
        assert_eq!(date.qualification(), DateQualification::Uncertain);

        let exact = InstantDateBuilder::new(1989).build(&BuildPolicy::default()).unwrap();
        assert!(!exact.part().unwrap().is_unspecified());
    }

    #[test]
    fn test_interval_swap_only_when_flexible() {
        let policy = BuildPolicy::default();
        let later = InstantDateBuilder::new(1910).month(5).day(31).build(&policy).unwrap();
        let earlier = InstantDateBuilder::new(1910).month(5).day(1).build(&policy).unwrap();

        let strict = IntervalDateBuilder::new(later, earlier).build(&policy);
        assert!(matches!(strict, Err(DateError::InvalidRange { .. })));

        let repaired = IntervalDateBuilder::new(later, earlier).build(&lenient()).unwrap();
        assert_eq!(repaired.to_string(), "1910-05-01/1910-05-31");
    }

    #[test]
    fn test_policy_constructors() {
        assert!(BuildPolicy::flexible().flexible);
        assert!(!BuildPolicy::strict().flexible);
        assert!(BuildPolicy::strict().latest_year.is_some());
        assert_eq!(BuildPolicy::default().latest_year, None);
    }

    #[test]
    fn test_policy_serde_defaults() {
        let policy: BuildPolicy = serde_json::from_str(r#"{"flexible": true}"#).unwrap();
        assert_eq!(policy, lenient());

        let json = serde_json::to_string(&policy.with_latest_year(2000)).unwrap();
        assert_eq!(json, r#"{"flexible":true,"latest_year":2000}"#);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{DATE_SEPARATOR, LONG_YEAR_PREFIX, MAX_SHORT_YEAR, OPEN_EDGE, UNSPECIFIED_DIGIT};
use crate::prelude::*;
use crate::types::{Day, Month};
use crate::{DateEdgeType, DateError, DateQualification, IntervalDate, YearPrecision};

/// The calendar value of a definite instant.
///
/// Only the builders construct one, so a `DatePart` always satisfies the
/// calendar rules: the day fits its month, a day implies a month, and a
/// decade or century year is already truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePart {
    pub(crate) year: i64,
    pub(crate) precision: YearPrecision,
    pub(crate) month: Option<Month>,
    pub(crate) day: Option<Day>,
    pub(crate) uncertain: bool,
    pub(crate) unspecified: bool,
}

impl DatePart {
    pub const fn year(&self) -> i64 {
        self.year
    }

    pub const fn precision(&self) -> YearPrecision {
        self.precision
    }

    pub fn month(&self) -> Option<u8> {
        self.month.map(Month::get)
    }

    pub fn day(&self) -> Option<u8> {
        self.day.map(Day::get)
    }

    /// Set when the source marked the value with a question mark
    pub const fn is_uncertain(&self) -> bool {
        self.uncertain
    }

    /// Set when the source left a field blank with a placeholder
    pub const fn is_unspecified(&self) -> bool {
        self.unspecified
    }

    /// Years past 4 digits need the `Y` marker in EDTF
    pub const fn is_long_year(&self) -> bool {
        self.year.unsigned_abs() > MAX_SHORT_YEAR.unsigned_abs()
    }

    /// Exact year with month and day
    pub const fn is_complete(&self) -> bool {
        matches!(self.precision, YearPrecision::Exact) && self.day.is_some()
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_long_year() {
            return write!(f, "{LONG_YEAR_PREFIX}{}", self.year);
        }
        if self.year < 0 {
            write!(f, "{DATE_SEPARATOR}")?;
        }
        let digits = format!("{:04}", self.year.unsigned_abs());
        let known = digits.len() - self.precision.unknown_digits();
        f.write_str(&digits[..known])?;
        for _ in 0..self.precision.unknown_digits() {
            write!(f, "{UNSPECIFIED_DIGIT}")?;
        }
        if let Some(month) = self.month {
            write!(f, "{DATE_SEPARATOR}{:02}", month.get())?;
        }
        if let Some(day) = self.day {
            write!(f, "{DATE_SEPARATOR}{:02}", day.get())?;
        }
        Ok(())
    }
}

/// A single point in calendar time, or an interval edge with no concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstantDate {
    part: Option<DatePart>,
    qualification: DateQualification,
    edge: DateEdgeType,
}

impl InstantDate {
    pub(crate) const fn definite(part: DatePart, qualification: DateQualification) -> Self {
        Self {
            part: Some(part),
            qualification,
            edge: DateEdgeType::Definite,
        }
    }

    /// Interval edge with no stated bound
    pub const fn open() -> Self {
        Self {
            part: None,
            qualification: DateQualification::None,
            edge: DateEdgeType::Open,
        }
    }

    /// Interval edge whose bound is not known
    pub const fn unknown() -> Self {
        Self {
            part: None,
            qualification: DateQualification::None,
            edge: DateEdgeType::Unknown,
        }
    }

    /// The calendar value, `None` for open and unknown edges
    pub const fn part(&self) -> Option<DatePart> {
        self.part
    }

    pub const fn qualification(&self) -> DateQualification {
        self.qualification
    }

    pub const fn edge_type(&self) -> DateEdgeType {
        self.edge
    }

    pub const fn is_definite(&self) -> bool {
        matches!(self.edge, DateEdgeType::Definite)
    }

    pub fn is_complete(&self) -> bool {
        self.part.is_some_and(|part| part.is_complete())
    }
}

impl fmt::Display for InstantDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.edge, self.part) {
            (DateEdgeType::Open | DateEdgeType::Unknown, _) => f.write_str(OPEN_EDGE),
            (DateEdgeType::Definite, None) => Ok(()),
            (DateEdgeType::Definite, Some(part)) => {
                write!(f, "{part}")?;
                match self.qualification.suffix() {
                    Some(mark) => write!(f, "{mark}"),
                    None => Ok(()),
                }
            }
        }
    }
}

/// A normalized date: one instant or an interval between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum DateValue {
    #[display(fmt = "{}", _0)]
    Instant(InstantDate),
    #[display(fmt = "{}", _0)]
    Interval(IntervalDate),
}

impl DateValue {
    pub const fn as_instant(&self) -> Option<&InstantDate> {
        match self {
            Self::Instant(instant) => Some(instant),
            Self::Interval(_) => None,
        }
    }

    pub const fn as_interval(&self) -> Option<&IntervalDate> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Instant(_) => None,
        }
    }

    /// Calendar values of every definite instant, start first
    pub fn parts(&self) -> impl Iterator<Item = DatePart> {
        let (first, second) = match self {
            Self::Instant(instant) => (instant.part(), None),
            Self::Interval(interval) => (interval.start().part(), interval.end().part()),
        };
        first.into_iter().chain(second)
    }

    /// True when every definite instant carries a full exact date.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Instant(instant) => instant.is_complete(),
            Self::Interval(interval) => interval.is_complete(),
        }
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    /// Parses canonical EDTF text, the inverse of `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::extract::edtf::parse(s)
    }
}

impl Serialize for InstantDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildPolicy, InstantDateBuilder};

    fn instant(builder: InstantDateBuilder) -> InstantDate {
        builder.build(&BuildPolicy::default()).unwrap()
    }

    #[test]
    fn test_display_pads_years() {
        assert_eq!(instant(InstantDateBuilder::new(198)).to_string(), "0198");
        assert_eq!(instant(InstantDateBuilder::new(1)).to_string(), "0001");
        assert_eq!(
            instant(InstantDateBuilder::new(-43).month(12).day(7)).to_string(),
            "-0043-12-07"
        );
        assert_eq!(
            instant(InstantDateBuilder::new(1989).month(11).day(1)).to_string(),
            "1989-11-01"
        );
    }

    #[test]
    fn test_display_precision() {
        let century = InstantDateBuilder::new(1800).precision(YearPrecision::Century);
        assert_eq!(instant(century).to_string(), "18XX");

        let first_century = InstantDateBuilder::new(0).precision(YearPrecision::Century);
        assert_eq!(instant(first_century).to_string(), "00XX");

        let decade = InstantDateBuilder::new(1980).precision(YearPrecision::Decade);
        assert_eq!(instant(decade).to_string(), "198X");

        let decade_month = decade.month(11);
        assert_eq!(instant(decade_month).to_string(), "198X-11");
    }

    #[test]
    fn test_display_long_year() {
        let date = instant(InstantDateBuilder::new(-170_000_002));
        assert!(date.part().unwrap().is_long_year());
        assert_eq!(date.to_string(), "Y-170000002");

        let short = instant(InstantDateBuilder::new(-9999));
        assert!(!short.part().unwrap().is_long_year());
        assert_eq!(short.to_string(), "-9999");
    }

    #[test]
    fn test_display_qualification() {
        let cases = [
            (DateQualification::None, "1989"),
            (DateQualification::Uncertain, "1989?"),
            (DateQualification::Approximate, "1989~"),
            (DateQualification::UncertainAndApproximate, "1989%"),
        ];
        for (qualification, expected) in cases {
            let date = instant(InstantDateBuilder::new(1989).qualification(qualification));
            assert_eq!(date.to_string(), expected);
        }
    }

    #[test]
    fn test_edges() {
        assert_eq!(InstantDate::open().to_string(), "..");
        assert_eq!(InstantDate::unknown().to_string(), "..");
        assert!(!InstantDate::open().is_definite());
        assert_eq!(InstantDate::unknown().part(), None);
        assert_eq!(InstantDate::unknown().edge_type(), DateEdgeType::Unknown);
    }

    #[test]
    fn test_completeness() {
        assert!(instant(InstantDateBuilder::new(1989).month(11).day(1)).is_complete());
        assert!(!instant(InstantDateBuilder::new(1989).month(11)).is_complete());
        assert!(!InstantDate::open().is_complete());
    }

    #[test]
    fn test_value_serde_string_format() {
        let value: DateValue = "1989-11-01?".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"1989-11-01?\"");

        let parsed: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let bad: Result<DateValue, _> = serde_json::from_str("\"1989-13-01\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_value_parts() {
        let value: DateValue = "../1989".parse().unwrap();
        let years: Vec<i64> = value.parts().map(|part| part.year()).collect();
        assert_eq!(years, vec![1989]);
        assert!(value.as_interval().is_some());
        assert!(value.as_instant().is_none());
    }
}

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, number, pattern};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDate, InstantDateBuilder, YearPrecision};

/// Position of the year among the captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    YearMonthDay,
    DayMonthYear,
}

/// One row of a numeric grammar table.
///
/// Every pattern names its groups `year`, `first`, `second`, and optionally
/// `lead` and `trail` for the `?` markers. `first` and `second` are read as
/// month and day according to `order`.
struct NumericPattern {
    regex: Regex,
    order: FieldOrder,
}

impl NumericPattern {
    fn new(source: &str, order: FieldOrder) -> Self {
        Self {
            regex: pattern(source),
            order,
        }
    }

    /// `(month, day)` text, `None` for fields the input left out.
    ///
    /// A lone group in day-month-year order is taken as the month.
    fn month_and_day<'t>(&self, captures: &Captures<'t>) -> (Option<&'t str>, Option<&'t str>) {
        let first = captures.name("first").map(|m| m.as_str());
        let second = captures.name("second").map(|m| m.as_str());
        match (self.order, second) {
            (FieldOrder::YearMonthDay, _) => (first, second),
            (FieldOrder::DayMonthYear, Some(month)) => (Some(month), first),
            (FieldOrder::DayMonthYear, None) => (first, None),
        }
    }
}

static PLAIN: LazyLock<Vec<NumericPattern>> = LazyLock::new(|| {
    vec![
        NumericPattern::new(
            r"^(?P<lead>\?)?(?P<year>\d{3,4})(?:[-./](?P<first>\d{1,2})(?:[-./](?P<second>\d{1,2}))?)?(?P<trail>\?)?$",
            FieldOrder::YearMonthDay,
        ),
        NumericPattern::new(
            r"^(?P<lead>\?)?(?:(?P<first>\d{1,2})[-./])?(?:(?P<second>\d{1,2})[-./])?(?P<year>\d{3,4})(?P<trail>\?)?$",
            FieldOrder::DayMonthYear,
        ),
    ]
});

/// Year with `X`, `U`, `--` or `??` for unknown digits
const UNKNOWN_YEAR: &str = r"(?P<year>\d{2}(?:XX|UU|--|\?\?)|\d{3}[XU]|\d{4})";

static UNKNOWN_DIGITS: LazyLock<Vec<NumericPattern>> = LazyLock::new(|| {
    let field = |name: &str| format!(r"(?P<{name}>\d{{2}}|XX|UU|--|\?\?)");
    vec![
        NumericPattern::new(
            &format!(
                r"(?i)^(?P<lead>\?)?{UNKNOWN_YEAR}(?:[-./]{}(?:[-./]{})?)?(?P<trail>\?)?$",
                field("first"),
                field("second")
            ),
            FieldOrder::YearMonthDay,
        ),
        NumericPattern::new(
            &format!(
                r"(?i)^(?P<lead>\?)?(?:{}[-./])?(?:{}[-./])?{UNKNOWN_YEAR}(?P<trail>\?)?$",
                field("first"),
                field("second")
            ),
            FieldOrder::DayMonthYear,
        ),
    ]
});

static SPACES: LazyLock<Vec<NumericPattern>> = LazyLock::new(|| {
    vec![
        NumericPattern::new(
            r"^(?P<year>\d{4}) (?P<first>\d{1,2}) (?P<second>\d{1,2})$",
            FieldOrder::YearMonthDay,
        ),
        NumericPattern::new(
            r"^(?P<first>\d{1,2}) (?P<second>\d{1,2}) (?P<year>\d{4})$",
            FieldOrder::DayMonthYear,
        ),
    ]
});

/// `187-`, `187?`, `187-?`: a decade or an open range, never guessed.
static AMBIGUOUS_YEAR: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\??\d{3}(?:-\??|\?)$"));

/// Reports a three-digit year trailed by `-`, `?` or `-?`.
pub(super) fn is_ambiguous_year(text: &str) -> bool {
    AMBIGUOUS_YEAR.is_match(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Plain,
    UnknownDigits,
    Spaces,
}

/// Positional numeric dates with `-`, `.` or `/` delimiters, in year-month-day
/// or day-month-year order.
#[derive(Debug, Clone, Copy)]
pub struct NumericExtractor {
    variant: Variant,
}

impl NumericExtractor {
    pub const fn plain() -> Self {
        Self {
            variant: Variant::Plain,
        }
    }

    /// Fields may hold placeholders; unknown year digits set the precision
    pub const fn with_unknown_digits() -> Self {
        Self {
            variant: Variant::UnknownDigits,
        }
    }

    /// Space-delimited fields with a 4-digit year
    pub const fn spaces() -> Self {
        Self {
            variant: Variant::Spaces,
        }
    }

    fn patterns(self) -> &'static [NumericPattern] {
        match self.variant {
            Variant::Plain => PLAIN.as_slice(),
            Variant::UnknownDigits => UNKNOWN_DIGITS.as_slice(),
            Variant::Spaces => SPACES.as_slice(),
        }
    }

    pub(super) const fn match_id(self) -> MatchId {
        match self.variant {
            Variant::Plain => MatchId::NumericAllVariants,
            Variant::UnknownDigits => MatchId::NumericAllVariantsXx,
            Variant::Spaces => MatchId::NumericSpacesVariant,
        }
    }

    /// Matches sanitized text as a single instant.
    ///
    /// The first pattern that matches decides; a calendar error there is not
    /// retried with the next pattern.
    pub(super) fn extract_instant(
        self,
        text: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<InstantDate> {
        if is_ambiguous_year(text) {
            return None;
        }
        if self.variant == Variant::UnknownDigits && text.contains("---") {
            return None;
        }
        let (row, captures) = self
            .patterns()
            .iter()
            .find_map(|row| row.regex.captures(text).map(|captures| (row, captures)))?;

        let year = captures.name("year")?;
        // a `?` straight after a 3-digit year reads as a decade
        if year.len() == 3 && captures.name("trail").is_some_and(|trail| trail.start() == year.end()) {
            return None;
        }
        let year_text = year.as_str();
        let computed = marked(&captures, &["lead", "trail"]);
        let (month, day) = row.month_and_day(&captures);

        let builder = match self.variant {
            Variant::UnknownDigits => unknown_digit_fields(year_text, month, day)?,
            Variant::Plain | Variant::Spaces => InstantDateBuilder::new(number(&captures, "year")?)
                .month(month.map_or(Some(0), |m| m.parse().ok())?)
                .day(day.map_or(Some(0), |d| d.parse().ok())?),
        };
        let instant = builder
            .qualification(resolve(requested, computed))
            .build(policy);
        accept(instant, self.family(), text)
    }
}

/// Placeholder runs in a year, month or day field
fn is_placeholder(field: &str) -> bool {
    !field.is_empty() && !field.chars().any(|c| c.is_ascii_digit())
}

fn unknown_digit_fields(
    year_text: &str,
    month: Option<&str>,
    day: Option<&str>,
) -> Option<InstantDateBuilder> {
    let digits = year_text.trim_end_matches(|c: char| !c.is_ascii_digit());
    let precision = YearPrecision::from_unknown_digits(year_text.len() - digits.len())?;
    let year = digits.parse::<i64>().ok()? * precision.duration();

    let known = |field: Option<&str>| -> Option<u8> {
        match field {
            Some(value) if !is_placeholder(value) => value.parse().ok(),
            _ => Some(0),
        }
    };
    let month = known(month)?;
    // nothing pins a day once the month is unknown
    let day = if month == 0 { 0 } else { known(day)? };
    Some(
        InstantDateBuilder::new(year)
            .precision(precision)
            .month(month)
            .day(day),
    )
}

impl DateExtractor for NumericExtractor {
    fn family(&self) -> ExtractorFamily {
        match self.variant {
            Variant::Plain => ExtractorFamily::Numeric,
            Variant::UnknownDigits => ExtractorFamily::NumericUnknownDigits,
            Variant::Spaces => ExtractorFamily::NumericSpaces,
        }
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let instant = self.extract_instant(&text, requested, policy)?;
        Some(DateMatch::new(self.match_id(), instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCase {
        input:       &'static str,
        expected:    Option<&'static str>,
        description: &'static str,
    }

    fn run(extractor: NumericExtractor, policy: &BuildPolicy, cases: &[TestCase]) {
        for case in cases {
            let found = extractor.extract(case.input, None, policy);
            assert_eq!(
                found.map(|found| found.value.to_string()).as_deref(),
                case.expected,
                "case failed: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_plain_numeric() {
        let cases = [
            TestCase {
                input:       "1989.11.01",
                expected:    Some("1989-11-01"),
                description: "dotted year first",
            },
            TestCase {
                input:       "1989/11",
                expected:    Some("1989-11"),
                description: "year and month",
            },
            TestCase {
                input:       "21.1.1921",
                expected:    Some("1921-01-21"),
                description: "day first, single digit month",
            },
            TestCase {
                input:       "09.1972",
                expected:    Some("1972-09"),
                description: "lone group is the month",
            },
            TestCase {
                input:       "01-11-1989?",
                expected:    Some("1989-11-01?"),
                description: "trailing marker",
            },
            TestCase {
                input:       "?0989",
                expected:    Some("0989?"),
                description: "leading marker on a 3-digit year",
            },
            TestCase {
                input:       "989",
                expected:    Some("0989"),
                description: "bare 3-digit year",
            },
            TestCase {
                input:       "1989-00-00",
                expected:    Some("1989"),
                description: "zero fields are absent",
            },
            TestCase {
                input:       "989?",
                expected:    None,
                description: "3-digit year followed by a marker",
            },
            TestCase {
                input:       "187-?",
                expected:    None,
                description: "ambiguous decade or range",
            },
            TestCase {
                input:       "1989-13-32",
                expected:    None,
                description: "no valid reading",
            },
            TestCase {
                input:       "1941-22-06",
                expected:    None,
                description: "swap needs a flexible policy",
            },
        ];
        run(NumericExtractor::plain(), &BuildPolicy::default(), &cases);
    }

    #[test]
    fn test_plain_numeric_flexible() {
        let cases = [
            TestCase {
                input:       "1941-22-06",
                expected:    Some("1941-06-22"),
                description: "day and month swapped",
            },
            TestCase {
                input:       "1989-13-32",
                expected:    None,
                description: "swap does not help",
            },
        ];
        run(NumericExtractor::plain(), &BuildPolicy::default().with_flexible(true), &cases);
    }

    #[test]
    fn test_unknown_digits() {
        let cases = [
            TestCase {
                input:       "19??",
                expected:    Some("19XX"),
                description: "question mark placeholders",
            },
            TestCase {
                input:       "19--?",
                expected:    Some("19XX?"),
                description: "dash placeholders with marker",
            },
            TestCase {
                input:       "187u",
                expected:    Some("187X"),
                description: "single placeholder is a decade",
            },
            TestCase {
                input:       "1937-10-??",
                expected:    Some("1937-10"),
                description: "unknown day",
            },
            TestCase {
                input:       "1937-XX-12",
                expected:    Some("1937"),
                description: "unknown month drops the day",
            },
            TestCase {
                input:       "20/09/18XX",
                expected:    Some("18XX-09-20"),
                description: "day first with unknown century digits",
            },
            TestCase {
                input:       "23.02.18--",
                expected:    Some("18XX-02-23"),
                description: "dotted day first",
            },
            TestCase {
                input:       "199--09-28",
                expected:    None,
                description: "placeholder run cut by a digit",
            },
            TestCase {
                input:       "19---01",
                expected:    None,
                description: "three dashes",
            },
            TestCase {
                input:       "1937--1938",
                expected:    None,
                description: "not a placeholder",
            },
        ];
        run(NumericExtractor::with_unknown_digits(), &BuildPolicy::default(), &cases);
    }

    #[test]
    fn test_spaces() {
        let cases = [
            TestCase {
                input:       "1905 09 01",
                expected:    Some("1905-09-01"),
                description: "year first",
            },
            TestCase {
                input:       "0 2 1980",
                expected:    Some("1980-02"),
                description: "zero day is absent",
            },
            TestCase {
                input:       "1989 11 01",
                expected:    Some("1989-11-01"),
                description: "full date",
            },
            TestCase {
                input:       "989 11 01",
                expected:    None,
                description: "year needs 4 digits",
            },
        ];
        run(NumericExtractor::spaces(), &BuildPolicy::default(), &cases);
    }

    #[test]
    fn test_ambiguous_year_guard() {
        for text in ["187-", "187?", "187-?", "?187-"] {
            assert!(is_ambiguous_year(text), "text {text}");
        }
        for text in ["1870", "187", "198??", "1870-"] {
            assert!(!is_ambiguous_year(text), "text {text}");
        }
    }
}

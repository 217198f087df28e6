use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, pattern};
use crate::consts::{INTERVAL_SEPARATOR, MAX_SHORT_YEAR, OPEN_EDGE, UNSPECIFIED_DIGIT};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{
    BuildPolicy, DateError, DateQualification, DateValue, InstantDate, InstantDateBuilder,
    IntervalDateBuilder, YearPrecision,
};

static INSTANT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"^(?:Y(?P<long>-?\d+)",
        r"|(?P<sign>-)?(?P<year>\d{2}XX|\d{3}X|\d{4})",
        r"(?:-(?P<month>\d{2})(?:-(?P<day>\d{2})",
        r"(?:T(?P<hour>\d{2}):(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.\d+)?)?(?:Z|[+-]\d{2}(?::?\d{2})?)?)?",
        r")?)?)",
        r"(?P<mark>[?~%])?$",
    ))
});

/// Canonical EDTF dates and intervals, the format every value renders to.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdtfExtractor;

impl DateExtractor for EdtfExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::Edtf
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let value = accept(parse_value(&text, requested, policy), self.family(), &text)?;
        Some(DateMatch::new(MatchId::Edtf, value))
    }
}

/// Parses canonical text with no repairs and no future-date ceiling.
pub(crate) fn parse(text: &str) -> Result<DateValue, DateError> {
    parse_value(text, None, &BuildPolicy::default())
}

fn parse_value(
    text: &str,
    requested: Option<DateQualification>,
    policy: &BuildPolicy,
) -> Result<DateValue, DateError> {
    let invalid = || DateError::InvalidFormat(text.to_owned());
    if text.is_empty() {
        return Err(invalid());
    }
    let Some((start, end)) = text.split_once(INTERVAL_SEPARATOR) else {
        if text.contains(char::is_whitespace) {
            return Err(invalid());
        }
        return parse_instant(text, requested, policy).map(DateValue::from);
    };
    // spaces are tolerated around the separator only
    let (start, end) = (start.trim_end(), end.trim_start());
    if end.contains(INTERVAL_SEPARATOR)
        || start.contains(char::is_whitespace)
        || end.contains(char::is_whitespace)
    {
        return Err(invalid());
    }
    let start = parse_edge(start, requested, policy)?;
    let end = parse_edge(end, requested, policy)?;
    IntervalDateBuilder::new(start, end)
        .build(policy)
        .map(DateValue::from)
}

fn parse_edge(
    text: &str,
    requested: Option<DateQualification>,
    policy: &BuildPolicy,
) -> Result<InstantDate, DateError> {
    match text {
        "" => Ok(InstantDate::unknown()),
        OPEN_EDGE => Ok(InstantDate::open()),
        _ => parse_instant(text, requested, policy),
    }
}

/// Parses one canonical instant.
///
/// Fields are taken in the written order: canonical text never has day and
/// month swapped, whatever the policy says.
pub(crate) fn parse_instant(
    text: &str,
    requested: Option<DateQualification>,
    policy: &BuildPolicy,
) -> Result<InstantDate, DateError> {
    let invalid = || DateError::InvalidFormat(text.to_owned());
    let captures = INSTANT.captures(text).ok_or_else(invalid)?;

    let computed = captures
        .name("mark")
        .and_then(|mark| mark.as_str().chars().next())
        .and_then(DateQualification::from_suffix)
        .unwrap_or_default();
    let qualification = resolve(requested, computed);
    let strict = policy.with_flexible(false);

    if let Some(long) = captures.name("long") {
        let year: i64 = long.as_str().parse().map_err(|_| invalid())?;
        if year.unsigned_abs() <= MAX_SHORT_YEAR.unsigned_abs() {
            return Err(invalid());
        }
        return InstantDateBuilder::new(year)
            .qualification(qualification)
            .build(&strict);
    }

    let year_text = captures.name("year").ok_or_else(invalid)?.as_str();
    let unknown = year_text.matches(UNSPECIFIED_DIGIT).count();
    let precision = YearPrecision::from_unknown_digits(unknown).ok_or_else(invalid)?;
    let known: i64 = year_text
        .trim_end_matches(UNSPECIFIED_DIGIT)
        .parse()
        .map_err(|_| invalid())?;
    let magnitude = known * precision.duration();
    let year = if captures.name("sign").is_some() { -magnitude } else { magnitude };

    // a written zero is an error here, not an absent field
    let month = match field(captures.name("month").map(|m| m.as_str())).ok_or_else(invalid)? {
        Some(0) => return Err(DateError::InvalidMonth(0)),
        Some(value) => value,
        None => 0,
    };
    let day = match field(captures.name("day").map(|d| d.as_str())).ok_or_else(invalid)? {
        Some(0) => return Err(DateError::InvalidDay { year, month, day: 0 }),
        Some(value) => value,
        None => 0,
    };

    if let Some(hour) = captures.name("hour") {
        let time = |group: &str| -> Option<u32> {
            captures.name(group).map_or(Some(0), |value| value.as_str().parse().ok())
        };
        let valid = match (hour.as_str().parse().ok(), time("minute"), time("second")) {
            (Some(hour), Some(minute), Some(second)) => {
                NaiveTime::from_hms_opt(hour, minute, second).is_some()
            }
            _ => false,
        };
        if !valid {
            return Err(invalid());
        }
    }

    InstantDateBuilder::new(year)
        .precision(precision)
        .month(month)
        .day(day)
        .qualification(qualification)
        .build(&strict)
}

/// `None` when the digits do not parse, `Some(None)` when the field is absent
fn field(text: Option<&str>) -> Option<Option<u8>> {
    match text {
        Some(digits) => digits.parse().ok().map(Some),
        None => Some(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        struct TestCase {
            input:       &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "1989-11-01",
                expected:    "1989-11-01",
                description: "full date",
            },
            TestCase {
                input:       "1989-11",
                expected:    "1989-11",
                description: "year and month",
            },
            TestCase {
                input:       "0198",
                expected:    "0198",
                description: "padded short year",
            },
            TestCase {
                input:       "-0043-12-07",
                expected:    "-0043-12-07",
                description: "negative year",
            },
            TestCase {
                input:       "18XX",
                expected:    "18XX",
                description: "century digits",
            },
            TestCase {
                input:       "198X",
                expected:    "198X",
                description: "decade digit",
            },
            TestCase {
                input:       "Y-170000002",
                expected:    "Y-170000002",
                description: "long negative year",
            },
            TestCase {
                input:       "1989?",
                expected:    "1989?",
                description: "uncertain",
            },
            TestCase {
                input:       "1989-11~",
                expected:    "1989-11~",
                description: "approximate",
            },
            TestCase {
                input:       "1989%",
                expected:    "1989%",
                description: "uncertain and approximate",
            },
            TestCase {
                input:       "1997-07-18T00:00:00",
                expected:    "1997-07-18",
                description: "time of day dropped",
            },
            TestCase {
                input:       "2013-09-07T09:31:51+02:00",
                expected:    "2013-09-07",
                description: "offset time dropped",
            },
            TestCase {
                input:       "1989/1990",
                expected:    "1989/1990",
                description: "interval",
            },
            TestCase {
                input:       "../1989-11-01",
                expected:    "../1989-11-01",
                description: "open start",
            },
            TestCase {
                input:       "1989/",
                expected:    "1989/..",
                description: "unknown end",
            },
            TestCase {
                input:       "/1989",
                expected:    "../1989",
                description: "unknown start",
            },
            TestCase {
                input:       "1918 / 1919",
                expected:    "1918/1919",
                description: "spaces around the separator",
            },
            TestCase {
                input:       "-2100/-1550",
                expected:    "-2100/-1550",
                description: "negative interval",
            },
            TestCase {
                input:       "1650?/1700~",
                expected:    "1650?/1700~",
                description: "qualified edges",
            },
        ];

        for case in cases {
            let value = parse(case.input).unwrap_or_else(|error| {
                panic!("case failed: {}: {error}", case.description)
            });
            assert_eq!(value.to_string(), case.expected, "case failed: {}", case.description);
        }
    }

    #[test]
    fn test_rejected_forms() {
        let cases = [
            ("", "empty"),
            ("1989 11 01", "whitespace"),
            ("1989-11 -01/1990", "whitespace inside an edge"),
            ("1989-13-01", "month out of range"),
            ("1989-02-30", "day out of range"),
            ("1989-00", "zero month"),
            ("1989-11-00", "zero day"),
            ("1989-11-1", "one digit day"),
            ("11989", "long year without marker"),
            ("Y1989", "marker on a short year"),
            ("198x", "lower case placeholder"),
            ("1989-11-01T25:00:00", "hour out of range"),
            ("1989-11T10:00", "time without day"),
            ("1989/1990/1991", "two separators"),
            ("../..", "no definite edge"),
            ("/", "two unknown edges"),
            ("1990/1989", "disordered interval"),
            ("1989??", "two marks"),
        ];
        for (input, description) in cases {
            assert!(parse(input).is_err(), "case failed: {description}");
        }
    }

    #[test]
    fn test_canonical_text_is_never_swapped() {
        let flexible = BuildPolicy::default().with_flexible(true);
        assert!(EdtfExtractor.extract("1941-22-06", None, &flexible).is_none());
    }

    #[test]
    fn test_requested_qualification_wins() {
        let found = EdtfExtractor
            .extract("1989?", Some(DateQualification::Approximate), &BuildPolicy::default())
            .unwrap();
        assert_eq!(found.id, MatchId::Edtf);
        assert_eq!(found.value.to_string(), "1989~");
    }

    #[test]
    fn test_latest_year_applies() {
        let policy = BuildPolicy::default().with_latest_year(2000);
        assert!(EdtfExtractor.extract("2001", None, &policy).is_none());
        assert!(EdtfExtractor.extract("Y170000002", None, &policy).is_none());
        assert!(EdtfExtractor.extract("2000-12-31", None, &policy).is_some());
    }
}

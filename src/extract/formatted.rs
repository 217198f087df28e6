use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::{Captures, Regex};

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, number, pattern};
use crate::lookup::month::Language;
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDateBuilder};

/// Platform timestamp text: `Sat Jan 01 01:00:00 CET 1701`
static PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun) (?P<month>[A-Z][a-z]{2}) (?P<day>\d{2}) ",
        r"(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2}) [A-Z]{2,5} (?P<year>\d{4})$",
    ))
});

/// Date and time with a space: `2013-03-21 18:45:36 UTC`
static SPACED: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2}) ",
        r"(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2})(?:\.\d{1,9})?(?: ?(?:UTC|GMT|Z))?$",
    ))
});

/// Full dates printed with a time of day. The time is checked and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormattedFullDateExtractor;

impl DateExtractor for FormattedFullDateExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::FormattedFullDate
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let (captures, month) = if let Some(captures) = PLATFORM.captures(&text) {
            let month = Language::English.month_number(&captures["month"])?;
            (captures, month)
        } else {
            let captures = SPACED.captures(&text)?;
            let month = number(&captures, "month")?;
            (captures, month)
        };
        if !is_valid_time(&captures) {
            return None;
        }
        let instant = InstantDateBuilder::new(number(&captures, "year")?)
            .month(month)
            .day(number(&captures, "day")?)
            .qualification(resolve(requested, DateQualification::None))
            .build(&policy.with_flexible(false));
        let instant = accept(instant, self.family(), &text)?;
        Some(DateMatch::new(MatchId::FormattedFullDate, instant))
    }
}

fn is_valid_time(captures: &Captures<'_>) -> bool {
    match (
        number(captures, "hour"),
        number(captures, "minute"),
        number(captures, "second"),
    ) {
        (Some(hour), Some(minute), Some(second)) => {
            NaiveTime::from_hms_opt(hour, minute, second).is_some()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_dates() {
        let cases = [
            ("Sat Jan 01 01:00:00 CET 1701", Some("1701-01-01")),
            ("Wed Nov 01 12:30:00 GMT 1989", Some("1989-11-01")),
            ("2013-03-21 18:45:36 UTC", Some("2013-03-21")),
            ("2013-09-07 09:31:51", Some("2013-09-07")),
            ("2013-09-07 09:31:51.250", Some("2013-09-07")),
            ("2013-09-07 24:31:51", None),
            ("2013-02-30 09:31:51", None),
            ("Sat Foo 01 01:00:00 CET 1701", None),
            ("2013-09-07", None),
        ];
        for (input, expected) in cases {
            let found = FormattedFullDateExtractor.extract(input, None, &BuildPolicy::default());
            assert_eq!(
                found.map(|found| found.value.to_string()).as_deref(),
                expected,
                "input {input}"
            );
        }
    }

    #[test]
    fn test_fields_are_never_swapped() {
        let flexible = BuildPolicy::default().with_flexible(true);
        assert!(
            FormattedFullDateExtractor
                .extract("2013-13-07 09:31:51", None, &flexible)
                .is_none()
        );
    }
}

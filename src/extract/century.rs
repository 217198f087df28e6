use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, pattern};
use crate::consts::{CENTURY_DURATION, MAX_CENTURY};
use crate::lookup::roman::from_roman;
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{
    BuildPolicy, DateError, DateQualification, InstantDate, InstantDateBuilder,
    IntervalDateBuilder, YearPrecision,
};

/// `18..`, the hundreds digits followed by two dots
static DOTTED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?P<lead>\?)?(?P<hundreds>1\d|2[01])\.\.(?P<trail>\?)?$"));

/// `19th century`
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)^(?P<lead>\?)?(?P<ordinal>2?1st|2nd|3rd|(?:1\d|[4-9]|20)th)\scentury(?P<trail>\?)?$")
});

/// `XIX`, `s. XIX`, `saec.XIX`
static ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)^(?P<lead>\?)?(?:(?:saec|sec|s)\.?\s?)?(?P<numeral>[IVX]+)(?P<trail>\?)?$")
});

/// `s. XVI-XVIII`, `XVI-XIX`
static ROMAN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"(?i)^(?P<lead>\?)?(?:(?:saec|sec|s)\.?\s?)?(?P<start>[IVX]+)\s?-\s?(?P<end>[IVX]+)(?P<trail>\?)?$",
    )
});

/// Centuries written with dots, English ordinals or Roman numerals.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenturyExtractor;

impl DateExtractor for CenturyExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::Century
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let qualification = |captures: &Captures<'_>| resolve(requested, marked(captures, &["lead", "trail"]));

        if let Some(captures) = DOTTED.captures(&text) {
            let hundreds: i64 = captures["hundreds"].parse().ok()?;
            let instant = century_start(hundreds * CENTURY_DURATION, qualification(&captures), policy);
            let instant = accept(instant, self.family(), &text)?;
            return Some(DateMatch::new(MatchId::CenturyNumeric, instant));
        }
        if let Some(captures) = ORDINAL.captures(&text) {
            let ordinal = &captures["ordinal"];
            let digits = ordinal.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let century = digits.parse().ok()?;
            let instant = century_of(century, qualification(&captures), policy);
            let instant = accept(instant, self.family(), &text)?;
            return Some(DateMatch::new(MatchId::CenturyNumeric, instant));
        }
        if let Some(captures) = ROMAN.captures(&text) {
            let century = roman_century(&captures["numeral"])?;
            let instant = century_of(century, qualification(&captures), policy);
            let instant = accept(instant, self.family(), &text)?;
            return Some(DateMatch::new(MatchId::CenturyRoman, instant));
        }
        if let Some(captures) = ROMAN_RANGE.captures(&text) {
            let start = roman_century(&captures["start"])?;
            let end = roman_century(&captures["end"])?;
            let qualification = qualification(&captures);
            let interval = century_of(start, qualification, policy).and_then(|start| {
                let end = century_of(end, qualification, policy)?;
                IntervalDateBuilder::new(start, end).build(policy)
            });
            let interval = accept(interval, self.family(), &text)?;
            return Some(DateMatch::new(MatchId::CenturyRangeRoman, interval));
        }
        None
    }
}

fn roman_century(numeral: &str) -> Option<u32> {
    from_roman(numeral).filter(|century| *century <= MAX_CENTURY)
}

/// The n-th century starts in year (n - 1) * 100.
fn century_of(
    century: u32,
    qualification: DateQualification,
    policy: &BuildPolicy,
) -> Result<InstantDate, DateError> {
    let year = (i64::from(century) - 1) * CENTURY_DURATION;
    century_start(year, qualification, policy)
}

fn century_start(
    year: i64,
    qualification: DateQualification,
    policy: &BuildPolicy,
) -> Result<InstantDate, DateError> {
    InstantDateBuilder::new(year)
        .precision(YearPrecision::Century)
        .qualification(qualification)
        .build(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_century_forms() {
        struct TestCase {
            input:       &'static str,
            expected:    Option<(&'static str, MatchId)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "18..",
                expected:    Some(("18XX", MatchId::CenturyNumeric)),
                description: "dotted hundreds",
            },
            TestCase {
                input:       "?21..",
                expected:    Some(("21XX?", MatchId::CenturyNumeric)),
                description: "uncertain dotted hundreds",
            },
            TestCase {
                input:       "09..",
                expected:    None,
                description: "dotted hundreds below range",
            },
            TestCase {
                input:       "19th century",
                expected:    Some(("18XX", MatchId::CenturyNumeric)),
                description: "english ordinal",
            },
            TestCase {
                input:       "1st Century",
                expected:    Some(("00XX", MatchId::CenturyNumeric)),
                description: "first century",
            },
            TestCase {
                input:       "21st century",
                expected:    Some(("20XX", MatchId::CenturyNumeric)),
                description: "twenty-first century",
            },
            TestCase {
                input:       "22nd century",
                expected:    None,
                description: "ordinal past range",
            },
            TestCase {
                input:       "s. XIX",
                expected:    Some(("18XX", MatchId::CenturyRoman)),
                description: "abbreviated roman",
            },
            TestCase {
                input:       "saec.XIV",
                expected:    Some(("13XX", MatchId::CenturyRoman)),
                description: "latin abbreviation",
            },
            TestCase {
                input:       "XIV?",
                expected:    Some(("13XX?", MatchId::CenturyRoman)),
                description: "bare uncertain roman",
            },
            TestCase {
                input:       "XXII",
                expected:    None,
                description: "roman past range",
            },
            TestCase {
                input:       "IIII",
                expected:    None,
                description: "non canonical roman",
            },
            TestCase {
                input:       "s. XVI-XVIII",
                expected:    Some(("15XX/17XX", MatchId::CenturyRangeRoman)),
                description: "roman range",
            },
            TestCase {
                input:       "sec.XVIII - XVI",
                expected:    None,
                description: "disordered roman range",
            },
            TestCase {
                input:       "XVI-XIX",
                expected:    Some(("15XX/18XX", MatchId::CenturyRangeRoman)),
                description: "roman range without abbreviation",
            },
            TestCase {
                input:       "[XVI-XIX]",
                expected:    None,
                description: "bracketed roman range before cleaning",
            },
            TestCase {
                input:       "XVI-XXII",
                expected:    None,
                description: "roman range ending past range",
            },
        ];

        for case in cases {
            let found = CenturyExtractor
                .extract(case.input, None, &BuildPolicy::default())
                .map(|found| (found.value.to_string(), found.id));
            assert_eq!(
                found.as_ref().map(|(value, id)| (value.as_str(), *id)),
                case.expected,
                "case failed: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_current_century_is_not_future() {
        let policy = BuildPolicy::default().with_latest_year(2026);
        assert!(CenturyExtractor.extract("21st century", None, &policy).is_some());
        assert!(CenturyExtractor.extract("21..", None, &policy).is_none());
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::range::{RangeSeparator, extract_range};
use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, number, pattern};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDate, InstantDateBuilder};

static LONG_NEGATIVE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?P<lead>\?)?-(?P<year>\d{5,9})(?P<trail>\?)?$"));

const SEPARATORS: [RangeSeparator; 1] = [RangeSeparator::new("/").forbid(&['/'])];

/// Archaeological years past 4 digits before the epoch: `-170000002`,
/// `-30000/-25000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongNegativeYearExtractor;

impl LongNegativeYearExtractor {
    fn extract_instant(
        self,
        text: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<InstantDate> {
        let captures = LONG_NEGATIVE_YEAR.captures(text)?;
        let year: i64 = number(&captures, "year")?;
        let instant = InstantDateBuilder::new(-year)
            .qualification(resolve(requested, marked(&captures, &["lead", "trail"])))
            .build(policy);
        accept(instant, self.family(), text)
    }
}

impl DateExtractor for LongNegativeYearExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::LongNegativeYear
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        if let Some(instant) = self.extract_instant(&text, requested, policy) {
            return Some(DateMatch::new(MatchId::LongNegativeYear, instant));
        }
        let interval = extract_range(&text, &SEPARATORS, policy, |edge| {
            self.extract_instant(edge, requested, policy)
        })?;
        Some(DateMatch::new(MatchId::LongNegativeYear, interval))
    }
}

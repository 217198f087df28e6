use std::sync::LazyLock;

use regex::Regex;

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, number, pattern};
use crate::consts::{CENTURY_DURATION, MAX_MONTH};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDateBuilder, IntervalDateBuilder};

static BRIEF_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^(?P<start_lead>\?)?(?P<start>\d{3,4})(?P<start_trail>\?)?[/-](?P<end_lead>\?)?(?P<end>\d{2})(?P<end_trail>\?)?$",
    )
});

/// Ranges whose end keeps only the last two digits, such as `1984-89`.
///
/// The end must be past 12, so it cannot be read as a month, and past the
/// start's own last two digits, so the shared century is unambiguous.
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefRangeExtractor;

impl DateExtractor for BriefRangeExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::BriefRange
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let captures = BRIEF_RANGE.captures(&text)?;
        let start: i64 = number(&captures, "start")?;
        let short_end: i64 = number(&captures, "end")?;
        if short_end <= i64::from(MAX_MONTH) || start % CENTURY_DURATION >= short_end {
            return None;
        }
        let end = (start / CENTURY_DURATION) * CENTURY_DURATION + short_end;

        let start = InstantDateBuilder::new(start)
            .qualification(resolve(requested, marked(&captures, &["start_lead", "start_trail"])))
            .build(policy);
        let end = InstantDateBuilder::new(end)
            .qualification(resolve(requested, marked(&captures, &["end_lead", "end_trail"])))
            .build(policy);
        let interval = start
            .and_then(|start| IntervalDateBuilder::new(start, end?).build(policy));
        let interval = accept(interval, self.family(), &text)?;
        Some(DateMatch::new(MatchId::BriefDateRange, interval))
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, number, pattern};
use crate::consts::DECADE_DURATION;
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDateBuilder, YearPrecision};

static DECADE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)^(?P<lead>\?)?(?P<decades>\d{3})(?:u|x|\?\?)(?P<trail>\?)?$")
});

/// Three digits and a placeholder for the last one: `198u`, `198x`, `198??`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecadeExtractor;

impl DateExtractor for DecadeExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::Decade
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let captures = DECADE.captures(&text)?;
        let decades: i64 = number(&captures, "decades")?;
        let instant = InstantDateBuilder::new(decades * DECADE_DURATION)
            .precision(YearPrecision::Decade)
            .qualification(resolve(requested, marked(&captures, &["lead", "trail"])))
            .build(policy);
        let instant = accept(instant, self.family(), &text)?;
        Some(DateMatch::new(MatchId::Decade, instant))
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::range::{RangeSeparator, extract_range};
use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, marked, number, pattern};
use crate::lookup::era::{ERA_ABBREVIATIONS, lookup};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDate, InstantDateBuilder};

static ERA_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    let mut abbreviations: Vec<&str> = ERA_ABBREVIATIONS.iter().map(|(abbreviation, _)| *abbreviation).collect();
    abbreviations.sort_by_key(|abbreviation| std::cmp::Reverse(abbreviation.chars().count()));
    let alternatives = abbreviations
        .iter()
        .map(|abbreviation| regex::escape(abbreviation))
        .collect::<Vec<_>>()
        .join("|");
    pattern(&format!(
        r"(?i)^(?P<lead>\?)?(?P<year>\d{{1,4}})(?P<inner>\?)?\s?(?P<era>{alternatives})(?P<trail>\?)?$"
    ))
});

const SEPARATORS: [RangeSeparator; 2] = [
    RangeSeparator::new("-").trimmed(),
    RangeSeparator::new("/").trimmed().forbid(&['/']),
];

/// Years with a BC or AD abbreviation, alone or as a range:
/// `3000 BC`, `44 v. Chr.`, `1990 BC-1989 BC`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraExtractor;

impl EraExtractor {
    fn extract_instant(
        self,
        text: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<InstantDate> {
        let captures = ERA_YEAR.captures(text)?;
        let era = lookup(&captures["era"])?;
        let year: i64 = number(&captures, "year")?;
        if year == 0 {
            return None;
        }
        let instant = InstantDateBuilder::new(era.signed_year(year))
            .qualification(resolve(requested, marked(&captures, &["lead", "inner", "trail"])))
            .build(policy);
        accept(instant, self.family(), text)
    }
}

impl DateExtractor for EraExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::Era
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        if let Some(instant) = self.extract_instant(&text, requested, policy) {
            return Some(DateMatch::new(MatchId::BcAd, instant));
        }
        let interval = extract_range(&text, &SEPARATORS, policy, |edge| {
            self.extract_instant(edge, requested, policy)
        })?;
        Some(DateMatch::new(MatchId::BcAd, interval))
    }
}

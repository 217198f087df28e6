use super::numeric::{NumericExtractor, is_ambiguous_year};
use super::range::{RangeSeparator, extract_range};
use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId};
use crate::consts::MIN_YEAR_FOR_OPEN_END;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification};

/// Separators in the order they are tried
const SEPARATORS: [RangeSeparator; 5] = [
    RangeSeparator::new("/").forbid(&['/']).unspecified(&["?", "-", ".."]),
    RangeSeparator::new(" - ").unspecified(&["?", "-", ".."]),
    RangeSeparator::new("|").trimmed().unspecified(&["?", "-", ".."]),
    RangeSeparator::new("-").forbid(&['-']).unspecified(&["?", ".."]),
    RangeSeparator::new(" ").forbid(&[' ']),
];

/// Two positional numeric dates joined by `/`, ` - `, `|`, `-` or a space.
#[derive(Debug, Clone, Copy)]
pub struct NumericRangeExtractor {
    edges: NumericExtractor,
}

impl NumericRangeExtractor {
    pub const fn plain() -> Self {
        Self {
            edges: NumericExtractor::plain(),
        }
    }

    /// Edges may hold placeholders for unknown digits
    pub const fn with_unknown_digits() -> Self {
        Self {
            edges: NumericExtractor::with_unknown_digits(),
        }
    }
}

impl DateExtractor for NumericRangeExtractor {
    fn family(&self) -> ExtractorFamily {
        match self.edges.match_id() {
            MatchId::NumericAllVariantsXx => ExtractorFamily::NumericRangeUnknownDigits,
            _ => ExtractorFamily::NumericRange,
        }
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        let interval = extract_range(&text, &SEPARATORS, policy, |edge| {
            if is_ambiguous_year(edge) {
                return None;
            }
            self.edges.extract_instant(edge, requested, policy)
        })?;

        // an early year with no end is more likely a misread than a range
        let start = interval.start().part();
        if !interval.end().is_definite()
            && start.is_some_and(|start| start.year() < MIN_YEAR_FOR_OPEN_END)
        {
            return None;
        }

        let id = match self.edges.match_id() {
            MatchId::NumericAllVariantsXx => MatchId::NumericRangeAllVariantsXx,
            _ => MatchId::NumericRangeAllVariants,
        };
        Some(DateMatch::new(id, interval))
    }
}

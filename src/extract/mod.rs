//! The grammar families. Each extractor recognizes one lexical convention and
//! turns a structural match into a validated `DateValue`, or reports no match.

mod brief_range;
mod century;
mod dcmi;
mod decade;
pub(crate) mod edtf;
mod era;
mod formatted;
mod long_year;
mod month_name;
mod numeric;
mod numeric_range;
mod range;

pub use brief_range::BriefRangeExtractor;
pub use century::CenturyExtractor;
pub use dcmi::DcmiPeriodExtractor;
pub use decade::DecadeExtractor;
pub use edtf::EdtfExtractor;
pub use era::EraExtractor;
pub use formatted::FormattedFullDateExtractor;
pub use long_year::LongNegativeYearExtractor;
pub use month_name::MonthNameExtractor;
pub use numeric::NumericExtractor;
pub use numeric_range::NumericRangeExtractor;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::prelude::*;
use crate::{BuildPolicy, DateError, DateQualification, DateValue};

/// Identifies the grammar that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchId {
    #[display(fmt = "BRIEF_DATE_RANGE")]
    BriefDateRange,
    #[display(fmt = "EDTF")]
    Edtf,
    #[display(fmt = "EDTF_CLEANED")]
    EdtfCleaned,
    #[display(fmt = "CENTURY_NUMERIC")]
    CenturyNumeric,
    #[display(fmt = "CENTURY_ROMAN")]
    CenturyRoman,
    #[display(fmt = "CENTURY_RANGE_ROMAN")]
    CenturyRangeRoman,
    #[display(fmt = "DECADE")]
    Decade,
    #[display(fmt = "NUMERIC_RANGE_ALL_VARIANTS")]
    NumericRangeAllVariants,
    #[display(fmt = "NUMERIC_RANGE_ALL_VARIANTS_XX")]
    NumericRangeAllVariantsXx,
    #[display(fmt = "NUMERIC_ALL_VARIANTS")]
    NumericAllVariants,
    #[display(fmt = "NUMERIC_ALL_VARIANTS_XX")]
    NumericAllVariantsXx,
    #[display(fmt = "NUMERIC_SPACES_VARIANT")]
    NumericSpacesVariant,
    #[display(fmt = "DCMI_PERIOD")]
    DcmiPeriod,
    #[display(fmt = "MONTH_NAME")]
    MonthName,
    #[display(fmt = "FORMATTED_FULL_DATE")]
    FormattedFullDate,
    #[display(fmt = "BC_AD")]
    BcAd,
    #[display(fmt = "LONG_NEGATIVE_YEAR")]
    LongNegativeYear,
}

/// Registry slot of an extractor, used to pin the dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ExtractorFamily {
    #[display(fmt = "brief range")]
    BriefRange,
    #[display(fmt = "edtf")]
    Edtf,
    #[display(fmt = "century")]
    Century,
    #[display(fmt = "decade")]
    Decade,
    #[display(fmt = "numeric range")]
    NumericRange,
    #[display(fmt = "numeric range with unknown digits")]
    NumericRangeUnknownDigits,
    #[display(fmt = "numeric")]
    Numeric,
    #[display(fmt = "numeric with unknown digits")]
    NumericUnknownDigits,
    #[display(fmt = "numeric with spaces")]
    NumericSpaces,
    #[display(fmt = "dcmi period")]
    DcmiPeriod,
    #[display(fmt = "month name")]
    MonthName,
    #[display(fmt = "formatted full date")]
    FormattedFullDate,
    #[display(fmt = "era")]
    Era,
    #[display(fmt = "long negative year")]
    LongNegativeYear,
}

/// A successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateMatch {
    pub id:    MatchId,
    pub value: DateValue,
    /// Free-text name carried by the source, such as a DCMI period name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DateMatch {
    pub(crate) fn new(id: MatchId, value: impl Into<DateValue>) -> Self {
        Self {
            id,
            value: value.into(),
            label: None,
        }
    }

    #[must_use]
    pub(crate) fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

/// Outcome of one normalization call. The input is kept verbatim either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    input:   String,
    matched: Option<DateMatch>,
}

impl ExtractionResult {
    pub(crate) fn new(input: &str, matched: Option<DateMatch>) -> Self {
        Self {
            input: input.to_owned(),
            matched,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn matched(&self) -> Option<&DateMatch> {
        self.matched.as_ref()
    }

    pub fn match_id(&self) -> Option<MatchId> {
        self.matched.as_ref().map(|found| found.id)
    }

    pub fn value(&self) -> Option<&DateValue> {
        self.matched.as_ref().map(|found| &found.value)
    }

    pub fn label(&self) -> Option<&str> {
        self.matched.as_ref().and_then(|found| found.label.as_deref())
    }

    pub const fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// One grammar family.
///
/// Implementations sanitize the input themselves, so any text may be passed.
/// They never fail: a structural match that breaks a calendar rule is logged
/// and reported as `None`.
pub trait DateExtractor: Send + Sync {
    fn family(&self) -> ExtractorFamily;

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch>;
}

#[allow(clippy::expect_used)]
pub(crate) fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("date pattern must compile")
}

/// Turns a builder rejection into "no match", leaving a diagnostic behind.
pub(crate) fn accept<T>(result: Result<T, DateError>, family: ExtractorFamily, text: &str) -> Option<T> {
    result
        .inspect_err(|error| debug!(%family, text, %error, "structural match rejected"))
        .ok()
}

/// Qualification carried by `?` markers in the named capture groups.
pub(crate) fn marked(captures: &Captures<'_>, groups: &[&str]) -> DateQualification {
    let uncertain = groups.iter().any(|group| captures.name(group).is_some());
    DateQualification::from_flags(uncertain, false)
}

/// Decimal value of an optional capture group, `0` when absent.
pub(crate) fn number<T>(captures: &Captures<'_>, group: &str) -> Option<T>
where
    T: std::str::FromStr + Default,
{
    match captures.name(group) {
        Some(found) => found.as_str().parse().ok(),
        None => Some(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_id_spelling() {
        assert_eq!(MatchId::NumericAllVariantsXx.to_string(), "NUMERIC_ALL_VARIANTS_XX");
        assert_eq!(
            serde_json::to_string(&MatchId::BcAd).unwrap(),
            "\"BC_AD\""
        );
        assert_eq!(
            serde_json::to_string(&MatchId::EdtfCleaned).unwrap(),
            "\"EDTF_CLEANED\""
        );
    }

    #[test]
    fn test_marked_and_number() {
        let regex = pattern(r"^(?P<lead>\?)?(?P<year>\d{4})(?:-(?P<month>\d{2}))?(?P<trail>\?)?$");
        let captures = regex.captures("?1989").unwrap();
        assert_eq!(marked(&captures, &["lead", "trail"]), DateQualification::Uncertain);
        assert_eq!(number::<i64>(&captures, "year"), Some(1989));
        assert_eq!(number::<u8>(&captures, "month"), Some(0));

        let captures = regex.captures("1989-11").unwrap();
        assert_eq!(marked(&captures, &["lead", "trail"]), DateQualification::None);
        assert_eq!(number::<u8>(&captures, "month"), Some(11));
    }
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cleaner::{CleanOperation, Cleaned, FIRST_PASS, GENERIC_PASS, SECOND_PASS, clean};
use crate::extract::{
    BriefRangeExtractor, CenturyExtractor, DateExtractor, DateMatch, DcmiPeriodExtractor,
    DecadeExtractor, EdtfExtractor, EraExtractor, ExtractionResult, ExtractorFamily,
    FormattedFullDateExtractor, LongNegativeYearExtractor, MatchId, MonthNameExtractor,
    NumericExtractor, NumericRangeExtractor,
};
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification};

/// Build policies per kind of metadata property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Properties typed as dates; repairs allowed
    pub date_property:    BuildPolicy,
    /// Free-text properties that may hold a date; no repairs
    pub generic_property: BuildPolicy,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            date_property:    BuildPolicy::flexible(),
            generic_property: BuildPolicy::strict(),
        }
    }
}

/// The extractor registry and the property-level entry points around it.
///
/// Extractors are tried in a fixed order and the first match wins. Several
/// grammars overlap, so the order is part of the behavior: `1984-89` must
/// reach the brief range grammar before the numeric ones see it.
pub struct DatesNormalizer {
    extractors: Vec<Box<dyn DateExtractor>>,
    config:     NormalizerConfig,
}

impl Default for DatesNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatesNormalizer {
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        let extractors: Vec<Box<dyn DateExtractor>> = vec![
            Box::new(BriefRangeExtractor),
            Box::new(EdtfExtractor),
            Box::new(CenturyExtractor),
            Box::new(DecadeExtractor),
            Box::new(NumericRangeExtractor::plain()),
            Box::new(NumericRangeExtractor::with_unknown_digits()),
            Box::new(NumericExtractor::plain()),
            Box::new(NumericExtractor::with_unknown_digits()),
            Box::new(NumericExtractor::spaces()),
            Box::new(DcmiPeriodExtractor),
            Box::new(MonthNameExtractor),
            Box::new(FormattedFullDateExtractor),
            Box::new(EraExtractor),
            Box::new(LongNegativeYearExtractor),
        ];
        Self { extractors, config }
    }

    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Registry order
    pub fn families(&self) -> Vec<ExtractorFamily> {
        self.extractors.iter().map(|extractor| extractor.family()).collect()
    }

    /// Tries every extractor in order on `input`.
    ///
    /// Total: any string yields a result, and the result always carries the
    /// input unchanged.
    pub fn normalize(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> ExtractionResult {
        let text = sanitize(input);
        ExtractionResult::new(input, self.first_match(&text, requested, policy, |_| true))
    }

    /// Normalizes a property typed as a date.
    ///
    /// The sanitized text is tried as is, then after the first cleaning pass,
    /// then after the second. Circa cleaning requests an approximate date.
    pub fn normalize_date_property(&self, input: &str) -> ExtractionResult {
        let policy = self.config.date_property;
        let text = sanitize(input);
        let matched = self
            .first_match(&text, None, &policy, |_| true)
            .or_else(|| self.cleaned_match(&text, &FIRST_PASS, &policy, |_| true))
            .or_else(|| self.cleaned_match(&text, &SECOND_PASS, &policy, |_| true));
        ExtractionResult::new(input, matched)
    }

    /// Normalizes a free-text property that may hold a date.
    ///
    /// Only full dates count here, the brief range grammar is skipped and
    /// nothing is repaired.
    pub fn normalize_generic_property(&self, input: &str) -> ExtractionResult {
        let policy = self.config.generic_property;
        let text = sanitize(input);
        let allowed = |family: ExtractorFamily| family != ExtractorFamily::BriefRange;
        let matched = self
            .first_match(&text, None, &policy, allowed)
            .or_else(|| self.cleaned_match(&text, &GENERIC_PASS, &policy, allowed))
            .filter(|found| found.value.is_complete());
        ExtractionResult::new(input, matched)
    }

    fn cleaned_match<F>(
        &self,
        text: &str,
        operations: &[CleanOperation],
        policy: &BuildPolicy,
        allowed: F,
    ) -> Option<DateMatch>
    where
        F: Fn(ExtractorFamily) -> bool,
    {
        let Cleaned { operation, text: cleaned } = clean(text, operations)?;
        trace!(%operation, text = %cleaned, "cleaned input");
        let requested = operation
            .is_approximate()
            .then_some(DateQualification::Approximate);
        let mut found = self.first_match(&sanitize(&cleaned), requested, policy, allowed)?;
        if found.id == MatchId::Edtf {
            found.id = MatchId::EdtfCleaned;
        }
        Some(found)
    }

    fn first_match<F>(
        &self,
        text: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
        allowed: F,
    ) -> Option<DateMatch>
    where
        F: Fn(ExtractorFamily) -> bool,
    {
        let found = self
            .extractors
            .iter()
            .filter(|extractor| allowed(extractor.family()))
            .find_map(|extractor| extractor.extract(text, requested, policy));
        match &found {
            Some(found) => trace!(text, id = %found.id, value = %found.value, "date matched"),
            None => trace!(text, "no date matched"),
        }
        found
    }
}

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept, number, pattern};
use crate::lookup::month::{LANGUAGES, Language};
use crate::qualification::resolve;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDateBuilder};

/// Delimiters allowed between the fields
const DELIMITER: &str = r"[\s.,]+";

struct LanguagePatterns {
    language: Language,
    /// Day-month-year, month-day-year and month-year, in that order
    orders:   [Regex; 3],
}

impl LanguagePatterns {
    fn new(language: Language) -> Self {
        let mut names: Vec<&str> = language.month_names().collect();
        // longest first, so `sept` is not cut short by `sep`
        names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
        let month = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let month = format!("(?P<month>{month})");
        let day = r"(?P<day>\d{1,2})";
        let year = r"(?P<year>\d{3,4})";
        Self {
            language,
            orders: [
                pattern(&format!("(?i)^{day}{DELIMITER}{month}{DELIMITER}{year}$")),
                pattern(&format!("(?i)^{month}{DELIMITER}{day}{DELIMITER}{year}$")),
                pattern(&format!("(?i)^{month}{DELIMITER}{year}$")),
            ],
        }
    }

    fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.orders.iter().find_map(|order| order.captures(text))
    }
}

static PATTERNS: LazyLock<Vec<LanguagePatterns>> =
    LazyLock::new(|| LANGUAGES.iter().copied().map(LanguagePatterns::new).collect());

/// Dates with a written month name in any of the supported languages:
/// `01 November 1989`, `November 1, 1989`, `Nov. 1989`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthNameExtractor;

impl DateExtractor for MonthNameExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::MonthName
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        // the first structural match decides, even if its date is invalid
        let (language, captures) = PATTERNS
            .iter()
            .find_map(|patterns| patterns.captures(&text).map(|captures| (patterns.language, captures)))?;
        let month = language.month_number(&captures["month"])?;
        let instant = InstantDateBuilder::new(number(&captures, "year")?)
            .month(month)
            .day(number(&captures, "day")?)
            .qualification(resolve(requested, DateQualification::None))
            .build(policy);
        let instant = accept(instant, self.family(), &text)?;
        Some(DateMatch::new(MatchId::MonthName, instant))
    }
}

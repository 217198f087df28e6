//! Normalizes free-text date statements from heritage metadata into
//! Extended Date/Time Format values.
//!
//! ```
//! use date_normalizer::DatesNormalizer;
//!
//! let normalizer = DatesNormalizer::new();
//! let result = normalizer.normalize_date_property("s. XIX");
//! assert_eq!(result.value().map(ToString::to_string).as_deref(), Some("18XX"));
//!
//! let result = normalizer.normalize_date_property("1984-89");
//! assert_eq!(result.value().map(ToString::to_string).as_deref(), Some("1984/1989"));
//! ```

mod builder;
mod cleaner;
mod consts;
mod date;
mod extract;
mod interval;
pub mod lookup;
mod normalizer;
mod prelude;
mod qualification;
mod sanitizer;
mod types;

pub use builder::{BuildPolicy, InstantDateBuilder, IntervalDateBuilder};
pub use cleaner::{CleanOperation, Cleaned, FIRST_PASS, GENERIC_PASS, SECOND_PASS, clean};
pub use consts::*;
pub use date::{DatePart, DateValue, InstantDate};
pub use extract::{
    BriefRangeExtractor, CenturyExtractor, DateExtractor, DateMatch, DcmiPeriodExtractor,
    DecadeExtractor, EdtfExtractor, EraExtractor, ExtractionResult, ExtractorFamily,
    FormattedFullDateExtractor, LongNegativeYearExtractor, MatchId, MonthNameExtractor,
    NumericExtractor, NumericRangeExtractor,
};
pub use interval::IntervalDate;
pub use normalizer::{DatesNormalizer, NormalizerConfig};
pub use qualification::{DateQualification, resolve};
pub use sanitizer::sanitize;
pub use types::{DateEdgeType, Day, Month, YearPrecision, days_in_month, is_leap_year};

/// Reasons a set of date fields is rejected.
///
/// Extractors turn these into "no match"; they surface directly from the
/// builders and from parsing canonical text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },

    /// A day was given without a month to place it in.
    #[error("Day {0} given without a month")]
    DayWithoutMonth(u8),

    /// A decade or century year with digits its precision does not know.
    #[error("Year {year} is not truncated to {precision} precision")]
    UntruncatedYear { year: i64, precision: YearPrecision },

    #[error("Year {0} has more than 4 digits and cannot carry a month or day")]
    LongYearWithMonth(i64),

    #[error("Year {year} is after {latest}")]
    FutureYear { year: i64, latest: i64 },

    /// Neither interval edge carries a date.
    #[error("Interval has no definite edge")]
    OpenInterval,

    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: String, end: String },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

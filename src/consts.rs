/// Largest year magnitude written with the ordinary 4-digit form.
/// Anything beyond needs the long-year marker.
pub const MAX_SHORT_YEAR: i64 = 9999;

/// Months in a year
pub const MAX_MONTH: u8 = 12;

pub const FEBRUARY: u8 = 2;
/// February length in a leap year; [`MONTH_LENGTHS`] holds the common one
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Length of each month in a common year, January first
pub const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
pub(crate) const CENTURY_CYCLE: i64 = 100;
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Years covered by a decade-precision year
pub const DECADE_DURATION: i64 = 10;
/// Years covered by a century-precision year
pub const CENTURY_DURATION: i64 = 100;

/// Last century the century grammars accept
pub const MAX_CENTURY: u32 = 21;

/// Years below this cannot start a range whose end is left unspecified
pub(crate) const MIN_YEAR_FOR_OPEN_END: i64 = 1000;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Interval separator
pub const INTERVAL_SEPARATOR: char = '/';
/// Open interval edge
pub const OPEN_EDGE: &str = "..";
/// Prefix marking a long year
pub const LONG_YEAR_PREFIX: char = 'Y';
/// Digit placeholder written for decade and century precision
pub const UNSPECIFIED_DIGIT: char = 'X';

/// Qualifier suffix for an uncertain date
pub const UNCERTAIN_MARK: char = '?';
/// Qualifier suffix for an approximate date
pub const APPROXIMATE_MARK: char = '~';
/// Qualifier suffix for a date both uncertain and approximate
pub const UNCERTAIN_APPROXIMATE_MARK: char = '%';

/// Scheme accepted for DCMI period edges
pub const W3C_DTF_SCHEME: &str = "W3C-DTF";

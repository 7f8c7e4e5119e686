/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Months per year, used for month arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month length
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a non-leap year
/// (index 0 is unused, months are 1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;
/// Offset from 0000-03-01 to 1970-01-01, the shift used by the civil day algorithms
pub(crate) const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Ordinal of 1970-01-01 counted from 0001-01-01 = 1
pub(crate) const UNIX_EPOCH_ORDINAL: i64 = 719_163;

/// Ordinal of 9999-12-31 counted from 0001-01-01 = 1
pub const MAX_ORDINAL: i32 = 3_652_059;
/// Ordinal of 0001-01-01
pub const MIN_ORDINAL: i32 = 1;

/// Largest magnitude accepted by `CalendarDate::add_months`
pub const MAX_MONTH_OFFSET: i32 = 120_000;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Period separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
/// Month-first format separator (locale-neutral US short date)
pub const MONTH_FIRST_SEPARATOR: char = '/';

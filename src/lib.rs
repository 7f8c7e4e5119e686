mod arith;
mod consts;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use range::{Period, RangeError, earlier_of, in_closed_range, in_half_open_range, periods_overlap};
pub use types::{Day, Month, Weekday, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use types::{civil_from_ordinal, day_of_year, month_length, ordinal_from_civil};

/// A valid proleptic Gregorian calendar date between 0001-01-01 and 9999-12-31.
///
/// Only the year, month and day of a timestamp are kept. Values are immutable:
/// every operation that "changes" a date returns a new one, so the triple is
/// validated as a whole and never observed half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Which part of a date, or of a date computation, left the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OutOfRange {
    #[display(fmt = "year {} is outside {}-{}", "_0", MIN_YEAR, MAX_YEAR)]
    Year(i64),
    #[display(fmt = "month {} is outside 1-{}", "_0", MAX_MONTH)]
    Month(i64),
    #[display(fmt = "day {day} does not exist in {year:04}-{month:02}")]
    Day { year: u16, month: u8, day: i64 },
    #[display(fmt = "month offset {} exceeds +/-{}", "_0", MAX_MONTH_OFFSET)]
    MonthOffset(i32),
    #[display(fmt = "result falls outside 0001-01-01..=9999-12-31")]
    Span,
}

impl std::error::Error for OutOfRange {}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Out of range: {_0}")]
    OutOfRange(OutOfRange),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Missing date string")]
    NullInput,
}

impl std::error::Error for DateError {}

impl From<OutOfRange> for DateError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::MIN,
        day:   Day::FIRST,
    };
    /// 9999-12-31
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::MAX,
        day:   Day::LAST_OF_DECEMBER,
    };

    /// Creates a date from already validated components
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `day` does not exist in that month.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw year, month and day numbers.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year is outside `1..=9999`, the
    /// month outside `1..=12`, or the day does not exist in that month.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Year::new(year)?, Month::new(month)?, day)
    }

    /// Parses an optional string, treating `None` as missing input.
    ///
    /// # Errors
    /// `DateError::NullInput` for `None`, otherwise see [`FromStr`].
    pub fn parse(text: Option<&str>) -> Result<Self, DateError> {
        text.ok_or(DateError::NullInput)?.parse()
    }

    /// Truncates any chrono date or timestamp to its calendar date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year is outside `1..=9999`.
    pub fn from_timestamp<T: Datelike>(instant: &T) -> Result<Self, DateError> {
        Self::from_wide(
            i64::from(instant.year()),
            i64::from(instant.month()),
            i64::from(instant.day()),
        )
        .inspect_err(|err| tracing::debug!(%err, "timestamp outside supported calendar span"))
    }

    /// The host's current local date. Read from the clock on every call.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reports a year outside `1..=9999`.
    #[cfg(feature = "clock")]
    pub fn today() -> Result<Self, DateError> {
        let now = chrono::Local::now();
        tracing::trace!(%now, "reading local clock");
        Self::from_timestamp(&now)
    }

    /// Creates a date from its ordinal, where 0001-01-01 is day 1.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the ordinal is outside
    /// `MIN_ORDINAL..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, DateError> {
        if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return Err(OutOfRange::Span.into());
        }
        let (year, month, day) = civil_from_ordinal(ordinal);
        Self::from_wide(year, i64::from(month), i64::from(day))
    }

    /// Validates components of any width, reporting the offending value as given.
    fn from_wide(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let year = Year::new(u16::try_from(year).map_err(|_| OutOfRange::Year(year))?)?;
        let month = Month::new(u8::try_from(month).map_err(|_| OutOfRange::Month(month))?)?;
        let day = u8::try_from(day).map_err(|_| OutOfRange::Day {
            year: year.get(),
            month: month.get(),
            day,
        })?;
        Self::new(year, month, day)
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since the common era, with 0001-01-01 = 1.
    pub const fn ordinal(&self) -> i32 {
        ordinal_from_civil(self.year(), self.month(), self.day())
    }

    pub const fn day_of_week(&self) -> Weekday {
        Weekday::from_ordinal(self.ordinal())
    }

    /// 1-based position within the year (1..=366)
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.year(), self.month(), self.day())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn days_in_month(&self) -> u8 {
        month_length(self.year(), self.month())
    }

    pub const fn days_in_year(&self) -> u16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    pub const fn first_of_month(&self) -> Self {
        Self {
            day: Day::FIRST,
            ..*self
        }
    }

    pub const fn last_of_month(&self) -> Self {
        Self {
            day: Day::last_of(self.year, self.month),
            ..*self
        }
    }

    /// Converts to a chrono date.
    ///
    /// # Errors
    /// Never fails for dates in the supported span; the error mirrors chrono's
    /// fallible constructor.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
        .ok_or(DateError::OutOfRange(OutOfRange::Span))
    }

    /// Converts to a chrono timestamp at midnight.
    ///
    /// # Errors
    /// See [`CalendarDate::to_naive_date`].
    pub fn to_timestamp(&self) -> Result<NaiveDateTime, DateError> {
        Ok(self.to_naive_date()?.and_time(NaiveTime::MIN))
    }
}

/// Whether `year` is a Gregorian leap year.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year is outside `1..=9999`.
pub fn is_leap_year(year: u16) -> Result<bool, DateError> {
    Ok(Year::new(year)?.is_leap())
}

/// Number of days in `month` of `year`, leap-year aware.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year is outside `1..=9999` or the
/// month outside `1..=12`.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, DateError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    Ok(month_length(year.get(), month.get()))
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Accepts `YYYY-MM-DD` and month-first `MM/DD/YYYY`, surrounded by optional whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_trimmed(s.trim())
            .inspect_err(|err| tracing::debug!(input = s, %err, "rejected date string"))
    }
}

impl CalendarDate {
    fn parse_trimmed(trimmed: &str) -> Result<Self, DateError> {
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat("empty date string".to_owned()));
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        let (separator, order) = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(DateError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
                )));
            }
            (true, false) => (DATE_SEPARATOR, [0, 1, 2]),
            (false, true) => (MONTH_FIRST_SEPARATOR, [2, 0, 1]),
            (false, false) => {
                return Err(DateError::InvalidFormat(format!(
                    "No date separator in {trimmed:?}"
                )));
            }
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_component(parts[order[0]])?;
        let month = Self::parse_component(parts[order[1]])?;
        let day = Self::parse_component(parts[order[2]])?;

        // Numeric but impossible components are OutOfRange
        Self::from_wide(year, month, day)
    }

    /// Digits only: signs and embedded spaces are rejected
    fn parse_component(s: &str) -> Result<i64, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_timestamp(&value)
    }
}

impl TryFrom<NaiveDateTime> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_timestamp(&value)
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = DateError;

    fn try_from(value: CalendarDate) -> Result<Self, Self::Error> {
        value.to_naive_date()
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

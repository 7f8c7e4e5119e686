use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_CYCLE, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, UNIX_EPOCH_ORDINAL,
    UNIX_EPOCH_SHIFT,
};
use crate::prelude::*;
use crate::{DateError, OutOfRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Year 1
    pub const MIN: Self = Self(NonZeroU16::MIN);
    /// Year 9999
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(year) => Self(year),
        None => panic!("MAX_YEAR must be non-zero"),
    };

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(OutOfRange::Year(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(OutOfRange::Year(i64::from(value)).into());
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January
    pub const MIN: Self = Self(NonZeroU8::MIN);
    /// December
    pub const MAX: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => panic!("MAX_MONTH must be non-zero"),
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(OutOfRange::Month(i64::from(value)))?;
        if value > MAX_MONTH {
            return Err(OutOfRange::Month(i64::from(value)).into());
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    /// December 31st
    pub(crate) const LAST_OF_DECEMBER: Self = match NonZeroU8::new(DAYS_IN_MONTH[DECEMBER as usize]) {
        Some(day) => Self(day),
        None => panic!("December has days"),
    };

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let out_of_range = OutOfRange::Day {
            year: year.get(),
            month: month.get(),
            day: i64::from(value),
        };
        let non_zero = NonZeroU8::new(value).ok_or(out_of_range)?;
        if value > month_length(year.get(), month.get()) {
            return Err(out_of_range.into());
        }
        Ok(Self(non_zero))
    }

    /// Last day of the given month
    pub(crate) const fn last_of(year: Year, month: Month) -> Self {
        match NonZeroU8::new(month_length(year.get(), month.get())) {
            Some(day) => Self(day),
            None => Self::FIRST,
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    /// Context-free conversion: only the bounds every month shares are checked.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let out_of_range = OutOfRange::Day {
            year: 0,
            month: 0,
            day: i64::from(value),
        };
        if value > MAX_DAY {
            return Err(out_of_range.into());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(|| out_of_range.into())
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. The proleptic Gregorian 0001-01-01 is a Monday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday of a calendar ordinal (0001-01-01 = 1).
    pub(crate) const fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[(ordinal - 1).rem_euclid(7) as usize]
    }

    /// Days since Monday (Monday = 0, Sunday = 6)
    pub const fn num_days_from_monday(self) -> u8 {
        self as u8
    }

    /// ISO 8601 weekday number (Monday = 1, Sunday = 7)
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// Returns `true` for Saturday and Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
            Weekday::Sunday => Self::Sun,
        }
    }
}

// Helper functions. Callers guarantee year in 1..=MAX_YEAR and month in 1..=MAX_MONTH.

pub(crate) const fn leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    let leap_day = if month > FEBRUARY && leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[month as usize] + day as u16 + leap_day
}

/// Days since the common era, with 0001-01-01 = 1.
///
/// Shifts the year to start in March so the leap day is the last day of the
/// shifted year, then counts whole 400-year cycles.
pub(crate) const fn ordinal_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i64 - if month <= FEBRUARY { 1 } else { 0 };
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = y - era * GREGORIAN_CYCLE as i64;
    let m = month as i64;
    let shifted_month = if m > FEBRUARY as i64 { m - 3 } else { m + 9 };
    let day_of_shifted_year = (153 * shifted_month + 2) / 5 + day as i64 - MIN_DAY as i64;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_shifted_year;
    let unix_days = era * DAYS_PER_CYCLE + day_of_era - UNIX_EPOCH_SHIFT;
    (unix_days + UNIX_EPOCH_ORDINAL) as i32
}

/// Inverse of [`ordinal_from_civil`]. Returns the raw `(year, month, day)`;
/// the year is only meaningful for ordinals in `MIN_ORDINAL..=MAX_ORDINAL`.
pub(crate) const fn civil_from_ordinal(ordinal: i32) -> (i64, u8, u8) {
    let z = ordinal as i64 - UNIX_EPOCH_ORDINAL + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_CYCLE);
    let day_of_era = z - era * DAYS_PER_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_shifted_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_shifted_year + 2) / 153;
    let day = day_of_shifted_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE as i64 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

//! Calendar arithmetic on [`CalendarDate`].
//!
//! Day arithmetic works on ordinals. Month and year arithmetic keep the day of
//! month and clamp it to the last day of the target month when it does not
//! exist there: 2024-01-31 plus one month is 2024-02-29, and 2024-02-29 plus
//! one year is 2025-02-28.

use std::ops::{Add, Sub};

use crate::consts::{MAX_MONTH_OFFSET, MONTHS_PER_YEAR};
use crate::types::{Month, Year};
use crate::{CalendarDate, Day, DateError, OutOfRange};

impl CalendarDate {
    /// Moves `days` days forward (or backward when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is outside `MIN..=MAX`.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let target = i64::from(self.ordinal())
            .checked_add(days)
            .and_then(|ordinal| i32::try_from(ordinal).ok());
        let result = match target {
            Some(ordinal) => Self::from_ordinal(ordinal),
            None => Err(OutOfRange::Span.into()),
        };
        result.inspect_err(|err| tracing::debug!(date = %self, days, %err, "day arithmetic out of range"))
    }

    /// Moves `months` calendar months, clamping the day to the target month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `months` is outside
    /// `-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET` or the result is outside `MIN..=MAX`.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        if !(-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET).contains(&months) {
            tracing::debug!(date = %self, months, "month offset rejected");
            return Err(OutOfRange::MonthOffset(months).into());
        }
        let index = i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month()) - 1
            + i64::from(months);
        self.with_clamped_day(
            index.div_euclid(MONTHS_PER_YEAR),
            index.rem_euclid(MONTHS_PER_YEAR) + 1,
        )
    }

    /// Moves `years` calendar years; February 29th clamps to the 28th in common years.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is outside `MIN..=MAX`.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        self.with_clamped_day(
            i64::from(self.year()) + i64::from(years),
            i64::from(self.month()),
        )
    }

    /// The following day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for `CalendarDate::MAX`.
    pub fn succ(self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for `CalendarDate::MIN`.
    pub fn pred(self) -> Result<Self, DateError> {
        self.add_days(-1)
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(self, other: Self) -> i32 {
        other.ordinal() - self.ordinal()
    }

    /// Same day of month in `(year, month)`, or that month's last day.
    fn with_clamped_day(self, year: i64, month: i64) -> Result<Self, DateError> {
        let (Ok(year), Ok(month)) = (u16::try_from(year), u8::try_from(month)) else {
            tracing::debug!(date = %self, year, month, "calendar arithmetic out of range");
            return Err(OutOfRange::Span.into());
        };
        let (year, month) = match (Year::new(year), Month::new(month)) {
            (Ok(year), Ok(month)) => (year, month),
            _ => {
                tracing::debug!(date = %self, year, month, "calendar arithmetic out of range");
                return Err(OutOfRange::Span.into());
            },
        };
        let day = self.day().min(Day::last_of(year, month).get());
        Self::new(year, month, day)
    }
}

/// Signed day count between two dates. Never fails inside the supported span.
impl Sub for CalendarDate {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        rhs.days_until(self)
    }
}

impl Add<i64> for CalendarDate {
    type Output = Result<Self, DateError>;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for CalendarDate {
    type Output = Result<Self, DateError>;

    fn sub(self, days: i64) -> Self::Output {
        days.checked_neg()
            .ok_or(DateError::OutOfRange(OutOfRange::Span))
            .and_then(|days| self.add_days(days))
    }
}

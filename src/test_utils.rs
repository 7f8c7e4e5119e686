//! Shared constructors for unit tests.

use crate::CalendarDate;

pub(crate) fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_parts(year, month, day)
        .unwrap_or_else(|err| panic!("invalid test date {year}-{month}-{day}: {err}"))
}

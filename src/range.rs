use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, RANGE_SEPARATOR};

/// Error type for range and period checks.
///
/// Every variant except the parse-related ones means the caller passed bounds
/// that violate the documented precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Closed range with `min > max`.
    #[error("Invalid arguments: range minimum is greater than its maximum")]
    InvertedBounds,

    /// Half-open range with `min >= max`.
    #[error("Invalid arguments: half-open range minimum must be less than its maximum")]
    EmptyRange,

    /// Period whose start is not strictly before its end.
    #[error("Invalid arguments: period start must be before its end")]
    DegeneratePeriod,

    /// Error parsing a period endpoint.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

/// Returns `true` if `min <= value <= max`.
///
/// # Errors
/// Returns `RangeError::InvertedBounds` if `min > max`.
pub fn in_closed_range<T: Ord>(value: &T, min: &T, max: &T) -> Result<bool, RangeError> {
    if min > max {
        return Err(RangeError::InvertedBounds);
    }
    Ok(min <= value && value <= max)
}

/// Returns `true` if `min <= value < max`.
///
/// # Errors
/// Returns `RangeError::EmptyRange` if `min >= max`.
pub fn in_half_open_range<T: Ord>(value: &T, min: &T, max: &T) -> Result<bool, RangeError> {
    if min >= max {
        return Err(RangeError::EmptyRange);
    }
    Ok(min <= value && value < max)
}

/// Returns `true` if the half-open periods `[first.0, first.1)` and
/// `[second.0, second.1)` share at least one point. Touching periods do not overlap.
///
/// # Errors
/// Returns `RangeError::DegeneratePeriod` if either start is not before its end.
pub fn periods_overlap<T: Ord>(first: (&T, &T), second: (&T, &T)) -> Result<bool, RangeError> {
    let first = Period::new(first.0, first.1)?;
    let second = Period::new(second.0, second.1)?;
    Ok(first.overlaps(&second))
}

/// The earlier of two values; `a` on ties.
pub fn earlier_of<T: Ord>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// A half-open period `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period<T> {
    start: T,
    end:   T,
}

impl<T: Ord> Period<T> {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `RangeError::DegeneratePeriod` if `start >= end`.
    pub fn new(start: T, end: T) -> Result<Self, RangeError> {
        if start >= end {
            return Err(RangeError::DegeneratePeriod);
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start of the period
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the exclusive end of the period
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Consumes the period, returning `(start, end)`
    pub fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Checks if `start <= value < end`
    pub fn contains(&self, value: &T) -> bool {
        &self.start <= value && value < &self.end
    }

    /// Checks if this period shares any point with another period
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end > other.start && other.end > self.start
    }

    /// Checks if this period lies completely inside another period
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

impl Period<CalendarDate> {
    /// Number of days covered, counting the start and not the end
    pub const fn days(&self) -> i32 {
        self.start.days_until(self.end)
    }
}

impl<T: fmt::Display> fmt::Display for Period<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", self.start, self.end)
    }
}

impl FromStr for Period<CalendarDate> {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval format: RANGE_SEPARATOR splits start/end, so endpoints are ISO dates
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No period separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<CalendarDate>()?;
                let end = end_str.trim().parse::<CalendarDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for Period<CalendarDate> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period<CalendarDate> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn period(start: (u16, u8, u8), end: (u16, u8, u8)) -> Period<CalendarDate> {
        Period::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
            .expect("failed to construct period for test")
    }

    #[test]
    fn test_in_closed_range() {
        assert_eq!(in_closed_range(&5, &1, &10), Ok(true));
        assert_eq!(in_closed_range(&10, &1, &10), Ok(true));
        assert_eq!(in_closed_range(&1, &1, &10), Ok(true));
        assert_eq!(in_closed_range(&0, &1, &10), Ok(false));
        assert_eq!(in_closed_range(&11, &1, &10), Ok(false));
        assert_eq!(in_closed_range(&3, &3, &3), Ok(true));
        assert_eq!(in_closed_range(&3, &5, &1), Err(RangeError::InvertedBounds));
    }

    #[test]
    fn test_in_half_open_range() {
        assert_eq!(in_half_open_range(&5, &1, &10), Ok(true));
        assert_eq!(in_half_open_range(&1, &1, &10), Ok(true));
        assert_eq!(in_half_open_range(&10, &1, &10), Ok(false));
        assert_eq!(in_half_open_range(&0, &1, &10), Ok(false));
        assert_eq!(in_half_open_range(&3, &3, &3), Err(RangeError::EmptyRange));
        assert_eq!(in_half_open_range(&3, &5, &1), Err(RangeError::EmptyRange));
    }

    #[test]
    fn test_range_membership_with_dates() {
        let min = date(2024, 1, 1);
        let max = date(2024, 1, 31);
        assert_eq!(in_closed_range(&date(2024, 1, 31), &min, &max), Ok(true));
        assert_eq!(in_half_open_range(&date(2024, 1, 31), &min, &max), Ok(false));
        assert_eq!(in_closed_range(&date(2024, 2, 1), &min, &max), Ok(false));
        assert_eq!(in_closed_range(&min, &max, &min), Err(RangeError::InvertedBounds));
    }

    #[test]
    fn test_periods_overlap_cases() {
        struct TestCase {
            first:       ((u16, u8, u8), (u16, u8, u8)),
            second:      ((u16, u8, u8), (u16, u8, u8)),
            overlaps:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                first:       ((2024, 1, 1), (2024, 1, 10)),
                second:      ((2024, 1, 10), (2024, 1, 20)),
                overlaps:    false,
                description: "touching endpoints",
            },
            TestCase {
                first:       ((2024, 1, 1), (2024, 1, 10)),
                second:      ((2024, 1, 9), (2024, 1, 20)),
                overlaps:    true,
                description: "one shared day",
            },
            TestCase {
                first:       ((2024, 1, 1), (2024, 12, 31)),
                second:      ((2024, 3, 1), (2024, 3, 2)),
                overlaps:    true,
                description: "second inside first",
            },
            TestCase {
                first:       ((2024, 1, 1), (2024, 1, 5)),
                second:      ((2024, 2, 1), (2024, 2, 5)),
                overlaps:    false,
                description: "disjoint",
            },
            TestCase {
                first:       ((2024, 1, 1), (2024, 1, 5)),
                second:      ((2024, 1, 1), (2024, 1, 5)),
                overlaps:    true,
                description: "identical periods",
            },
        ];

        let to_date = |(y, m, d): (u16, u8, u8)| date(y, m, d);

        for case in &cases {
            let (s1, e1) = (to_date(case.first.0), to_date(case.first.1));
            let (s2, e2) = (to_date(case.second.0), to_date(case.second.1));
            assert_eq!(
                periods_overlap((&s1, &e1), (&s2, &e2)),
                Ok(case.overlaps),
                "{}",
                case.description
            );
            assert_eq!(
                periods_overlap((&s2, &e2), (&s1, &e1)),
                Ok(case.overlaps),
                "{} (swapped)",
                case.description
            );
        }
    }

    #[test]
    fn test_periods_overlap_degenerate() {
        let day = date(2024, 1, 1);
        let later = date(2024, 1, 10);
        assert_eq!(
            periods_overlap((&day, &day), (&day, &later)),
            Err(RangeError::DegeneratePeriod)
        );
        assert_eq!(
            periods_overlap((&day, &later), (&later, &day)),
            Err(RangeError::DegeneratePeriod)
        );
    }

    #[test]
    fn test_earlier_of() {
        let a = date(2024, 1, 1);
        let b = date(2023, 12, 31);
        assert_eq!(earlier_of(a, b), b);
        assert_eq!(earlier_of(b, a), b);
        assert_eq!(earlier_of(a, a), a);
        assert_eq!(earlier_of(3, 7), 3);
    }

    #[test]
    fn test_earlier_of_returns_first_on_tie() {
        // Equal under Ord but distinguishable by the payload
        #[derive(Debug, PartialEq, Eq)]
        struct Tagged(u8, &'static str);

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        assert_eq!(earlier_of(Tagged(1, "a"), Tagged(1, "b")).1, "a");
    }

    #[test]
    fn test_period_accessors() {
        let p = period((2024, 1, 1), (2024, 1, 10));
        assert_eq!(*p.start(), date(2024, 1, 1));
        assert_eq!(*p.end(), date(2024, 1, 10));
        assert_eq!(p.days(), 9);
        assert_eq!(p.into_bounds(), (date(2024, 1, 1), date(2024, 1, 10)));
    }

    #[test]
    fn test_period_contains() {
        let p = period((2024, 1, 1), (2024, 1, 10));
        assert!(p.contains(&date(2024, 1, 1)));
        assert!(p.contains(&date(2024, 1, 9)));
        assert!(!p.contains(&date(2024, 1, 10)));
        assert!(!p.contains(&date(2023, 12, 31)));
    }

    #[test]
    fn test_period_is_within() {
        let outer = period((2024, 1, 1), (2024, 2, 1));
        let inner = period((2024, 1, 10), (2024, 2, 1));
        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
    }

    #[test]
    fn test_period_rejects_degenerate() {
        let d = date(2024, 1, 1);
        assert_eq!(Period::new(d, d), Err(RangeError::DegeneratePeriod));
        assert_eq!(Period::new(1, 0), Err(RangeError::DegeneratePeriod));
        assert!(Period::new(0, 1).is_ok());
    }

    #[test]
    fn test_period_ordering() {
        let p1 = period((2024, 1, 1), (2024, 1, 10));
        let p2 = period((2024, 1, 1), (2024, 1, 20));
        let p3 = period((2024, 1, 2), (2024, 1, 3));
        assert!(p1 < p2);
        assert!(p2 < p3);
    }

    #[test]
    fn test_period_display_and_parse() {
        let p = period((2024, 1, 1), (2024, 1, 10));
        assert_eq!(p.to_string(), "2024-01-01/2024-01-10");
        assert_eq!("2024-01-01/2024-01-10".parse::<Period<CalendarDate>>(), Ok(p));
        assert_eq!(" 2024-01-01 / 2024-01-10 ".parse::<Period<CalendarDate>>(), Ok(p));
        assert_eq!(Period::new(1, 5).expect("valid integer period").to_string(), "1/5");
    }

    #[test]
    fn test_period_parse_errors() {
        let err = "2024-01-01".parse::<Period<CalendarDate>>().unwrap_err();
        assert!(err.to_string().contains("No period separator found"));

        let err = "01/01/2024/2024-01-10".parse::<Period<CalendarDate>>().unwrap_err();
        assert!(err.to_string().contains("expected 1, found 3"));

        assert_eq!(
            "2024-01-10/2024-01-01".parse::<Period<CalendarDate>>(),
            Err(RangeError::DegeneratePeriod)
        );
        assert!(matches!(
            "2024-02-30/2024-03-01".parse::<Period<CalendarDate>>(),
            Err(RangeError::Date(DateError::OutOfRange(_)))
        ));
        assert!(matches!(
            "2024-01-01/".parse::<Period<CalendarDate>>(),
            Err(RangeError::Date(DateError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_period_serde() {
        let p = period((1990, 6, 15), (2000, 12, 31));
        let json = serde_json::to_string(&p).expect("failed to serialize period");
        assert_eq!(json, r#""1990-06-15/2000-12-31""#);
        let parsed: Period<CalendarDate> = serde_json::from_str(&json).expect("failed to deserialize period");
        assert_eq!(parsed, p);

        let result: Result<Period<CalendarDate>, _> = serde_json::from_str(r#""2000-01-01/1990-01-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RangeError::InvertedBounds.to_string(),
            "Invalid arguments: range minimum is greater than its maximum"
        );
        let err = RangeError::from(DateError::NullInput);
        assert_eq!(err.to_string(), "Missing date string");
    }
}

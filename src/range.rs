use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// Date format of the command line and of events files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` civil date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

/// Inclusive range of civil dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::new(
                ErrorKind::InvalidRange,
                &format!("{} is after {}", start, end),
            ));
        }

        Ok(DateRange { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        DateRange {
            start: date,
            end: date,
        }
    }

    /// First to last day of the civil month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.day0() as i64);
        let end = start + Duration::days(days_of_month(date.year(), date.month()) as i64 - 1);

        DateRange { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let len = (self.end - self.start).num_days();
        (0..=len).map(move |offset| start + Duration::days(offset))
    }
}

pub fn days_of_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_yo_opt(year, 366).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-02-29").unwrap(), ymd(2024, 2, 29));

        let err = parse_date("2023-02-29").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DateParse));
        assert!(parse_date("03/10/2024").is_err());
    }

    #[test]
    fn rejects_reversed_range() {
        let err = DateRange::new(ymd(2024, 3, 9), ymd(2024, 3, 3)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRange));
    }

    #[test]
    fn days_are_inclusive() {
        let range = DateRange::new(ymd(2024, 2, 27), ymd(2024, 3, 2)).unwrap();
        let days: Vec<NaiveDate> = range.days().collect();

        assert_eq!(days.len(), 5);
        assert_eq!(days.first(), Some(&ymd(2024, 2, 27)));
        assert_eq!(days.last(), Some(&ymd(2024, 3, 2)));
        assert!(days.contains(&ymd(2024, 2, 29)));
    }

    #[test]
    fn month_of_leap_february() {
        let feb = DateRange::month_of(ymd(2024, 2, 14));
        assert_eq!(feb.start(), ymd(2024, 2, 1));
        assert_eq!(feb.end(), ymd(2024, 2, 29));

        let dec = DateRange::month_of(ymd(2023, 12, 31));
        assert_eq!(dec.start(), ymd(2023, 12, 1));
        assert_eq!(dec.end(), ymd(2023, 12, 31));

        assert_eq!(days_of_month(2100, 2), 28);
    }

    #[test]
    fn overlap_touching_edges() {
        let week = DateRange::new(ymd(2024, 3, 3), ymd(2024, 3, 9)).unwrap();

        assert!(week.overlaps(&DateRange::single(ymd(2024, 3, 9))));
        assert!(!week.overlaps(&DateRange::single(ymd(2024, 3, 10))));
        assert!(week.contains(ymd(2024, 3, 3)));
    }
}

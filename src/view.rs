use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::format::{FormatKind, FormatRequest};
use crate::locale::Locale;
use crate::range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum View {
    Month,
    Week,
    Day,
    Agenda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigate {
    Today,
    Previous,
    Next,
}

impl Default for View {
    fn default() -> Self {
        View::Month
    }
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Month => "month",
            View::Week => "week",
            View::Day => "day",
            View::Agenda => "agenda",
        }
    }

    /// Dates shown by the view when it is focused on `date`.
    pub fn range(&self, date: NaiveDate, week_start: Weekday, agenda_length: u32) -> Result<DateRange> {
        match self {
            View::Month => Ok(DateRange::month_of(date)),
            View::Week => {
                let offset = (date.weekday().num_days_from_monday() + 7
                    - week_start.num_days_from_monday())
                    % 7;
                let start = shift_days(date, -(offset as i64))?;
                DateRange::new(start, shift_days(start, 6)?)
            }
            View::Day => Ok(DateRange::single(date)),
            View::Agenda => DateRange::new(date, shift_days(date, agenda_length as i64)?),
        }
    }

    pub fn navigate(
        &self,
        date: NaiveDate,
        action: Navigate,
        today: NaiveDate,
        agenda_length: u32,
    ) -> Result<NaiveDate> {
        let step = match action {
            Navigate::Today => return Ok(today),
            Navigate::Previous => -1,
            Navigate::Next => 1,
        };

        match self {
            View::Month => {
                let months = Months::new(1);
                let shifted = if step > 0 {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                };
                shifted.ok_or_else(|| out_of_range(date))
            }
            View::Week => shift_days(date, 7 * step),
            View::Day => shift_days(date, step),
            View::Agenda => shift_days(date, agenda_length as i64 * step),
        }
    }

    /// Request for the toolbar label of the view.
    pub fn label_request(
        &self,
        date: NaiveDate,
        locale: Locale,
        week_start: Weekday,
        agenda_length: u32,
    ) -> Result<FormatRequest> {
        let kind = match self {
            View::Month => FormatKind::Month(date),
            View::Week => FormatKind::DayRangeHeader(self.range(date, week_start, agenda_length)?),
            View::Day => FormatKind::DayHeader(date),
            View::Agenda => FormatKind::AgendaHeader(self.range(date, week_start, agenda_length)?),
        };

        Ok(FormatRequest::new(kind, locale))
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| out_of_range(date))
}

fn out_of_range(date: NaiveDate) -> Error {
    Error::new(
        ErrorKind::InvalidRange,
        &format!("cannot move past {}", date),
    )
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(View::Month),
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            "agenda" => Ok(View::Agenda),
            _ => Err(Error::new(ErrorKind::UnknownView, &format!("'{}'", s))),
        }
    }
}

impl TryFrom<String> for View {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Navigate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "today" => Ok(Navigate::Today),
            "prev" | "previous" => Ok(Navigate::Previous),
            "next" => Ok(Navigate::Next),
            _ => Err(Error::new(
                ErrorKind::UnknownNavigation,
                &format!("'{}' is none of today, prev, next", s),
            )),
        }
    }
}

//! Calendar labels pairing the civil date with its Hijri counterpart.
//!
//! Two line labels are joined by [`LINE_SEPARATOR`]; toolbars split on it.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::Result;
use crate::locale::Locale;
use crate::lunar::{HijriCalendar, LunarCalendar, LunarDate};
use crate::range::DateRange;

pub const LINE_SEPARATOR: char = '\n';

const RANGE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Toolbar label of the month view
    Month(NaiveDate),
    /// Toolbar label of the day view
    DayHeader(NaiveDate),
    /// Toolbar label of the week view
    DayRangeHeader(DateRange),
    /// Toolbar label of the agenda view
    AgendaHeader(DateRange),
    /// Date column of an agenda row
    AgendaDate(NaiveDate),
    /// Compact day cell of the week and day views
    Day(NaiveDate),
    /// Header of a cell in the month grid
    MonthDateHeader(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    pub kind: FormatKind,
    pub locale: Locale,
    /// Already formatted civil part, used verbatim instead of the built-in one
    pub civil: Option<String>,
}

impl FormatRequest {
    pub fn new(kind: FormatKind, locale: Locale) -> Self {
        FormatRequest {
            kind,
            locale,
            civil: None,
        }
    }

    pub fn with_civil(mut self, civil: &str) -> Self {
        self.civil = Some(civil.to_owned());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedLabel {
    Line(String),
    Stacked { civil: String, lunar: String },
}

impl FormattedLabel {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            FormattedLabel::Line(line) => vec![line.as_str()],
            FormattedLabel::Stacked { civil, lunar } => vec![civil.as_str(), lunar.as_str()],
        }
    }
}

impl fmt::Display for FormattedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedLabel::Line(line) => f.write_str(line),
            FormattedLabel::Stacked { civil, lunar } => {
                write!(f, "{}{}{}", civil, LINE_SEPARATOR, lunar)
            }
        }
    }
}

/// Formats labels for a civil date and the date `L` maps it to.
#[derive(Debug, Clone)]
pub struct DualCalendar<L: LunarCalendar = HijriCalendar> {
    lunar: L,
}

impl<L: LunarCalendar> DualCalendar<L> {
    pub fn new(lunar: L) -> Self {
        DualCalendar { lunar }
    }

    pub fn lunar(&self) -> &L {
        &self.lunar
    }

    pub fn format(&self, request: &FormatRequest) -> Result<FormattedLabel> {
        let civil = request.civil.as_deref();
        let locale = request.locale;

        match &request.kind {
            FormatKind::Month(date) => self.month(*date, locale, civil),
            FormatKind::DayHeader(date) => self.day_header_with(*date, locale, civil),
            FormatKind::DayRangeHeader(range) => self.day_range(range, locale, civil),
            FormatKind::AgendaHeader(range) => self.agenda(range, locale, civil),
            FormatKind::AgendaDate(date) => self.agenda_date_with(*date, locale, civil),
            FormatKind::Day(date) => self.day_with(*date, locale, civil),
            FormatKind::MonthDateHeader(date) => self.month_date(*date, locale, civil),
        }
    }

    pub fn month_label(&self, date: NaiveDate, locale: Locale) -> Result<FormattedLabel> {
        self.month(date, locale, None)
    }

    pub fn day_header(&self, date: NaiveDate, locale: Locale) -> Result<FormattedLabel> {
        self.day_header_with(date, locale, None)
    }

    pub fn day_range_header(&self, range: &DateRange, locale: Locale) -> Result<FormattedLabel> {
        self.day_range(range, locale, None)
    }

    pub fn agenda_header(&self, range: &DateRange, locale: Locale) -> Result<FormattedLabel> {
        self.agenda(range, locale, None)
    }

    pub fn agenda_date(&self, date: NaiveDate, locale: Locale) -> Result<FormattedLabel> {
        self.agenda_date_with(date, locale, None)
    }

    pub fn day(&self, date: NaiveDate, locale: Locale) -> Result<FormattedLabel> {
        self.day_with(date, locale, None)
    }

    pub fn month_date_header(&self, date: NaiveDate, locale: Locale) -> Result<FormattedLabel> {
        self.month_date(date, locale, None)
    }

    fn month(&self, date: NaiveDate, locale: Locale, civil: Option<&str>) -> Result<FormattedLabel> {
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!(
                "{} {}",
                locale.month(date.month()),
                locale.number(date.year() as i64)
            )
        });

        // The lunar line covers every day of the civil month, so it is taken
        // from both ends of it.
        let month = DateRange::month_of(date);
        let first = lunar_month_year(&self.lunar.to_lunar(month.start())?, locale);
        let last = lunar_month_year(&self.lunar.to_lunar(month.end())?, locale);

        let lunar = if first == last {
            first
        } else {
            format!("{}{}{}", first, RANGE_SEPARATOR, last)
        };

        Ok(FormattedLabel::Stacked { civil, lunar })
    }

    fn day_header_with(
        &self,
        date: NaiveDate,
        locale: Locale,
        civil: Option<&str>,
    ) -> Result<FormattedLabel> {
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!(
                "{}, {} {}",
                locale.weekday(date.weekday()),
                locale.ordinal(date.day()),
                locale.month(date.month())
            )
        });

        let lunar = self.lunar.to_lunar(date)?;
        let lunar = format!(
            "{} {}",
            locale.ordinal(lunar.day as u32),
            locale.hijri_month(lunar.month)
        );

        Ok(FormattedLabel::Stacked { civil, lunar })
    }

    fn day_range(
        &self,
        range: &DateRange,
        locale: Locale,
        civil: Option<&str>,
    ) -> Result<FormattedLabel> {
        let (start, end) = (range.start(), range.end());

        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            let start_str = format!("{} {}", locale.month(start.month()), locale.padded(start.day()));
            let end_str = if (start.year(), start.month()) == (end.year(), end.month()) {
                locale.padded(end.day())
            } else {
                format!("{} {}", locale.month(end.month()), locale.padded(end.day()))
            };
            format!("{}{}{}", start_str, RANGE_SEPARATOR, end_str)
        });

        // Month boundaries differ between the calendars, so the lunar end
        // collapses on its own terms.
        let lunar_start = self.lunar.to_lunar(start)?;
        let lunar_end = self.lunar.to_lunar(end)?;
        let start_str = format!(
            "{} {}",
            locale.hijri_month(lunar_start.month),
            locale.padded(lunar_start.day as u32)
        );
        let end_str = if lunar_start.same_month(&lunar_end) {
            locale.padded(lunar_end.day as u32)
        } else {
            format!(
                "{} {}",
                locale.hijri_month(lunar_end.month),
                locale.padded(lunar_end.day as u32)
            )
        };
        let lunar = format!("{}{}{}", start_str, RANGE_SEPARATOR, end_str);

        Ok(FormattedLabel::Stacked { civil, lunar })
    }

    fn agenda(&self, range: &DateRange, locale: Locale, civil: Option<&str>) -> Result<FormattedLabel> {
        let civil_day = |date: NaiveDate| {
            format!("{} {}", locale.month_short(date.month()), locale.ordinal(date.day()))
        };
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!(
                "{}{}{}",
                civil_day(range.start()),
                RANGE_SEPARATOR,
                civil_day(range.end())
            )
        });

        let lunar_day = |date: LunarDate| {
            format!("{} {}", locale.ordinal(date.day as u32), locale.hijri_month(date.month))
        };
        let lunar = format!(
            "{}{}{}",
            lunar_day(self.lunar.to_lunar(range.start())?),
            RANGE_SEPARATOR,
            lunar_day(self.lunar.to_lunar(range.end())?)
        );

        Ok(FormattedLabel::Stacked { civil, lunar })
    }

    fn agenda_date_with(
        &self,
        date: NaiveDate,
        locale: Locale,
        civil: Option<&str>,
    ) -> Result<FormattedLabel> {
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!(
                "{} {} {}",
                locale.weekday_short(date.weekday()),
                locale.ordinal(date.day()),
                locale.month_short(date.month())
            )
        });

        let lunar = self.lunar.to_lunar(date)?;

        Ok(FormattedLabel::Line(format!(
            "{}/{} {}",
            civil,
            locale.ordinal(lunar.day as u32),
            locale.hijri_month_short(lunar.month)
        )))
    }

    fn day_with(&self, date: NaiveDate, locale: Locale, civil: Option<&str>) -> Result<FormattedLabel> {
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!(
                "{} {}",
                locale.weekday_short(date.weekday()),
                locale.padded(date.day())
            )
        });

        let lunar = self.lunar.to_lunar(date)?;

        Ok(FormattedLabel::Line(format!(
            "{}({})",
            civil,
            locale.padded(lunar.day as u32)
        )))
    }

    fn month_date(&self, date: NaiveDate, locale: Locale, civil: Option<&str>) -> Result<FormattedLabel> {
        let civil = civil.map(str::to_owned).unwrap_or_else(|| {
            format!("{} {}", locale.ordinal(date.day()), locale.month_short(date.month()))
        });

        let lunar = self.lunar.to_lunar(date)?;
        let lunar = format!(
            "{} {}",
            locale.ordinal(lunar.day as u32),
            locale.hijri_month_short(lunar.month)
        );

        Ok(FormattedLabel::Stacked { civil, lunar })
    }
}

fn lunar_month_year(date: &LunarDate, locale: Locale) -> String {
    format!(
        "{} {}",
        locale.hijri_month(date.month),
        locale.number(date.year as i64)
    )
}

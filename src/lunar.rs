use chrono::{Datelike, NaiveDate};
use icu_calendar::islamic::{IslamicCivil, IslamicObservational, IslamicTabular, IslamicUmmAlQura};
use icu_calendar::{AsCalendar, Date, Iso, Ref};
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

/// Civil years the astronomical calendars can convert; ICU4X panics far
/// outside of it.
const MAX_CIVIL_YEAR: i32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl LunarDate {
    pub fn same_month(&self, other: &LunarDate) -> bool {
        self.year == other.year && self.month == other.month
    }
}

pub trait LunarCalendar {
    fn to_lunar(&self, date: NaiveDate) -> Result<LunarDate>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum HijriKind {
    UmmAlQura,
    Civil,
    Tabular,
    Observational,
}

impl Default for HijriKind {
    fn default() -> Self {
        HijriKind::UmmAlQura
    }
}

impl HijriKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HijriKind::UmmAlQura => "umm-al-qura",
            HijriKind::Civil => "civil",
            HijriKind::Tabular => "tabular",
            HijriKind::Observational => "observational",
        }
    }
}

impl FromStr for HijriKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "umm-al-qura" | "ummalqura" => Ok(HijriKind::UmmAlQura),
            "civil" => Ok(HijriKind::Civil),
            "tabular" => Ok(HijriKind::Tabular),
            "observational" => Ok(HijriKind::Observational),
            _ => Err(Error::new(
                ErrorKind::UnknownCalendar,
                &format!("'{}' is none of umm-al-qura, civil, tabular, observational", s),
            )),
        }
    }
}

impl TryFrom<String> for HijriKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for HijriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hijri calendar backed by the ICU4X islamic calendars.
#[derive(Debug, Clone)]
pub enum HijriCalendar {
    UmmAlQura(IslamicUmmAlQura),
    Civil(IslamicCivil),
    Tabular(IslamicTabular),
    Observational(IslamicObservational),
}

impl HijriCalendar {
    pub fn new(kind: HijriKind) -> Self {
        match kind {
            HijriKind::UmmAlQura => HijriCalendar::UmmAlQura(IslamicUmmAlQura::new()),
            HijriKind::Civil => HijriCalendar::Civil(IslamicCivil::new()),
            HijriKind::Tabular => HijriCalendar::Tabular(IslamicTabular::new()),
            HijriKind::Observational => {
                HijriCalendar::Observational(IslamicObservational::new())
            }
        }
    }

    pub fn kind(&self) -> HijriKind {
        match self {
            HijriCalendar::UmmAlQura(_) => HijriKind::UmmAlQura,
            HijriCalendar::Civil(_) => HijriKind::Civil,
            HijriCalendar::Tabular(_) => HijriKind::Tabular,
            HijriCalendar::Observational(_) => HijriKind::Observational,
        }
    }
}

fn convert<A: AsCalendar>(iso: &Date<Iso>, calendar: A) -> Result<LunarDate> {
    let date = iso.to_calendar(calendar);
    let month = u8::try_from(date.month().ordinal).map_err(|_| {
        Error::new(
            ErrorKind::LunarConversion,
            &format!("month {} out of range", date.month().ordinal),
        )
    })?;
    let day = u8::try_from(date.day_of_month().0).map_err(|_| {
        Error::new(
            ErrorKind::LunarConversion,
            &format!("day {} out of range", date.day_of_month().0),
        )
    })?;

    Ok(LunarDate {
        year: date.year().number,
        month,
        day,
    })
}

impl LunarCalendar for HijriCalendar {
    fn to_lunar(&self, date: NaiveDate) -> Result<LunarDate> {
        if date.year().abs() > MAX_CIVIL_YEAR {
            return Err(Error::new(
                ErrorKind::LunarConversion,
                &format!("{} is outside of years -{} to {}", date, MAX_CIVIL_YEAR, MAX_CIVIL_YEAR),
            ));
        }

        // chrono months and days always fit the ISO constructor
        let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)?;

        match self {
            HijriCalendar::UmmAlQura(cal) => convert(&iso, Ref(cal)),
            HijriCalendar::Civil(cal) => convert(&iso, Ref(cal)),
            HijriCalendar::Tabular(cal) => convert(&iso, Ref(cal)),
            HijriCalendar::Observational(cal) => convert(&iso, Ref(cal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn civil_month_boundary() {
        let civil = HijriCalendar::new(HijriKind::Civil);

        assert_eq!(
            civil.to_lunar(ymd(2024, 3, 10)).unwrap(),
            LunarDate { year: 1445, month: 8, day: 29 }
        );
        assert_eq!(
            civil.to_lunar(ymd(2024, 3, 11)).unwrap(),
            LunarDate { year: 1445, month: 9, day: 1 }
        );
    }

    #[test]
    fn civil_year_rollover() {
        let civil = HijriCalendar::new(HijriKind::Civil);

        assert_eq!(
            civil.to_lunar(ymd(2024, 7, 1)).unwrap(),
            LunarDate { year: 1445, month: 12, day: 24 }
        );
        assert_eq!(
            civil.to_lunar(ymd(2024, 7, 31)).unwrap(),
            LunarDate { year: 1446, month: 1, day: 24 }
        );
    }

    #[test]
    fn umm_al_qura_mid_ramadan() {
        let uaq = HijriCalendar::new(HijriKind::UmmAlQura);
        let date = uaq.to_lunar(ymd(2024, 3, 25)).unwrap();

        assert_eq!((date.year, date.month), (1445, 9));
    }

    #[test]
    fn far_out_dates_are_rejected() {
        for kind in [
            HijriKind::UmmAlQura,
            HijriKind::Civil,
            HijriKind::Tabular,
            HijriKind::Observational,
        ] {
            let calendar = HijriCalendar::new(kind);

            for date in [NaiveDate::MAX, NaiveDate::MIN, ymd(100_000, 6, 1), ymd(-100_000, 6, 1)] {
                let err = calendar.to_lunar(date).unwrap_err();
                assert!(matches!(err.kind, ErrorKind::LunarConversion));
            }
            assert!(calendar.to_lunar(ymd(10_000, 12, 31)).is_ok());
            assert!(calendar.to_lunar(ymd(-10_000, 1, 1)).is_ok());
        }
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [
            HijriKind::UmmAlQura,
            HijriKind::Civil,
            HijriKind::Tabular,
            HijriKind::Observational,
        ] {
            assert_eq!(kind.as_str().parse::<HijriKind>().unwrap(), kind);
            assert_eq!(HijriCalendar::new(kind).kind(), kind);
        }
        assert!("gregorian".parse::<HijriKind>().is_err());
    }
}

//! Names, ordinals and digits for the supported locale tags.

use chrono::Weekday;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Sunday first, as `Weekday::num_days_from_sunday` indexes
const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const EN_WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const EN_HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const EN_HIJRI_MONTHS_SHORT: [&str; 12] = [
    "Muh", "Saf", "Rab-I", "Rab-II", "Jum-I", "Jum-II", "Raj", "Sha", "Ram", "Shw", "Dhu-Q",
    "Dhu-H",
];

const AR_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const AR_WEEKDAYS: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const AR_WEEKDAYS_SHORT: [&str; 7] = ["أحد", "إثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"];

const AR_HIJRI_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const AR_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    English,
    Arabic,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::English
    }
}

impl Locale {
    /// Resolves a BCP 47 style tag such as `en-US` or `ar-SA`. Unknown
    /// languages resolve to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Locale::English,
            "ar" => Locale::Arabic,
            _ => {
                log::warn!("Locale '{}' not supported, falling back to English", tag);
                Locale::English
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    /// Month names take the 1-based month number.
    pub fn month(&self, month: u32) -> &'static str {
        let idx = month as usize - 1;
        match self {
            Locale::English => EN_MONTHS[idx],
            Locale::Arabic => AR_MONTHS[idx],
        }
    }

    pub fn month_short(&self, month: u32) -> &'static str {
        let idx = month as usize - 1;
        match self {
            Locale::English => EN_MONTHS_SHORT[idx],
            Locale::Arabic => AR_MONTHS[idx],
        }
    }

    pub fn weekday(&self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::English => EN_WEEKDAYS[idx],
            Locale::Arabic => AR_WEEKDAYS[idx],
        }
    }

    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::English => EN_WEEKDAYS_SHORT[idx],
            Locale::Arabic => AR_WEEKDAYS_SHORT[idx],
        }
    }

    pub fn hijri_month(&self, month: u8) -> &'static str {
        let idx = month as usize - 1;
        match self {
            Locale::English => EN_HIJRI_MONTHS[idx],
            Locale::Arabic => AR_HIJRI_MONTHS[idx],
        }
    }

    pub fn hijri_month_short(&self, month: u8) -> &'static str {
        let idx = month as usize - 1;
        match self {
            Locale::English => EN_HIJRI_MONTHS_SHORT[idx],
            Locale::Arabic => AR_HIJRI_MONTHS[idx],
        }
    }

    pub fn week_start(&self) -> Weekday {
        match self {
            Locale::English => Weekday::Sun,
            Locale::Arabic => Weekday::Sat,
        }
    }

    /// Plain number in the locale's digits.
    pub fn number(&self, n: i64) -> String {
        self.digits(&n.to_string())
    }

    /// Two digit zero padded day number.
    pub fn padded(&self, n: u32) -> String {
        self.digits(&format!("{:02}", n))
    }

    /// Day number as an ordinal, e.g. `1st`, `12th`, `23rd`.
    pub fn ordinal(&self, n: u32) -> String {
        match self {
            Locale::English => {
                let suffix = if (n % 100) / 10 == 1 {
                    "th"
                } else {
                    match n % 10 {
                        1 => "st",
                        2 => "nd",
                        3 => "rd",
                        _ => "th",
                    }
                };
                format!("{}{}", n, suffix)
            }
            Locale::Arabic => self.number(n as i64),
        }
    }

    fn digits(&self, ascii: &str) -> String {
        match self {
            Locale::English => ascii.to_owned(),
            Locale::Arabic => ascii
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => AR_DIGITS[d as usize],
                    None => c,
                })
                .collect(),
        }
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_region_tags() {
        assert_eq!(Locale::from_tag("en-US"), Locale::English);
        assert_eq!(Locale::from_tag("EN_gb"), Locale::English);
        assert_eq!(Locale::from_tag("ar-SA"), Locale::Arabic);
        assert_eq!(Locale::from_tag("fr-FR"), Locale::English);
    }

    #[test]
    fn english_ordinals() {
        let ordinals: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 30, 31]
            .iter()
            .map(|n| Locale::English.ordinal(*n))
            .collect();

        assert_eq!(
            ordinals,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "30th", "31st"]
        );
    }

    #[test]
    fn arabic_digits() {
        assert_eq!(Locale::Arabic.padded(3), "٠٣");
        assert_eq!(Locale::Arabic.number(1446), "١٤٤٦");
        assert_eq!(Locale::Arabic.ordinal(22), "٢٢");
    }

    #[test]
    fn names_by_number() {
        assert_eq!(Locale::English.month(3), "March");
        assert_eq!(Locale::English.weekday_short(Weekday::Fri), "Fri");
        assert_eq!(Locale::English.hijri_month(9), "Ramadan");
        assert_eq!(Locale::English.hijri_month_short(12), "Dhu-H");
        assert_eq!(Locale::Arabic.hijri_month(8), "شعبان");
    }
}

use chrono::NaiveDate;
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, ErrorKind, Result};
use crate::range::{parse_date, DateRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Islamic,
    Community,
}

impl Default for Category {
    fn default() -> Self {
        Category::Community
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Islamic => f.write_str("islamic"),
            Category::Community => f.write_str("community"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub span: DateRange,
    pub desc: Vec<String>,
    pub category: Category,
}

impl Event {
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.span.contains(date)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventEntry {
    title: String,
    date: String,
    end: Option<String>,
    #[serde(default)]
    desc: Vec<String>,
    #[serde(default)]
    category: Category,
}

#[derive(Debug, Default, Deserialize)]
struct EventFile {
    #[serde(default, rename = "event")]
    events: Vec<EventEntry>,
}

impl TryFrom<EventEntry> for Event {
    type Error = Error;

    fn try_from(entry: EventEntry) -> Result<Self> {
        let parse = |s: &str| {
            parse_date(s).map_err(|e| {
                Error::new(
                    ErrorKind::EventParse,
                    &format!("event '{}': date '{}': {}", entry.title, s, e),
                )
            })
        };

        let start = parse(&entry.date)?;
        let end = match &entry.end {
            Some(end) => parse(end)?,
            None => start,
        };
        let span = DateRange::new(start, end)
            .map_err(|e| Error::new(ErrorKind::EventParse, &format!("event '{}': {}", entry.title, e)))?;

        Ok(Event {
            title: entry.title,
            span,
            desc: entry.desc,
            category: entry.category,
        })
    }
}

/// Events shown on the calendar, ordered by start date then title.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by(|a, b| {
            a.span
                .start()
                .cmp(&b.span.start())
                .then_with(|| a.title.cmp(&b.title))
        });
        Agenda { events }
    }

    /// Entries that fail to parse are skipped with a warning.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: EventFile = toml::from_str(content).map_err(|e| {
            Error::new(ErrorKind::EventParse, &e.to_string())
        })?;

        let events = file
            .events
            .into_iter()
            .map(Event::try_from)
            .inspect(|e| {
                if let Err(e) = e {
                    log::warn!("{}", e)
                }
            })
            .filter_map(|e| e.ok())
            .collect();

        Ok(Agenda::new(events))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::info!("Loading events from '{}'", path.display());
        let content = fs::read_to_string(path)?;
        Agenda::from_toml(&content)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn events_in<'a>(&'a self, range: &'a DateRange) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.span.overlaps(range))
    }

    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.occurs_on(date))
    }
}

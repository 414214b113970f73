//! Plain text rendering of the calendar views.

use chrono::{NaiveDate, Weekday};
use itertools::Itertools;

use crate::agenda::{Agenda, Event};
use crate::engine::Engine;
use crate::error::Result;
use crate::format::{DualCalendar, FormattedLabel};
use crate::locale::Locale;
use crate::range::DateRange;
use crate::view::View;

const CELL_WIDTH: usize = 14;
const LINE_WIDTH: usize = 7 * CELL_WIDTH;

pub struct Renderer<'a> {
    engine: &'a Engine,
    agenda: &'a Agenda,
    locale: Locale,
    week_start: Weekday,
    agenda_length: u32,
}

impl<'a> Renderer<'a> {
    pub fn new(engine: &'a Engine, agenda: &'a Agenda, locale: Locale) -> Self {
        Renderer {
            engine,
            agenda,
            locale,
            week_start: locale.week_start(),
            agenda_length: 30,
        }
    }

    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn agenda_length(mut self, agenda_length: u32) -> Self {
        self.agenda_length = agenda_length;
        self
    }

    /// Toolbar lines of `view`; empty until the engine is ready.
    pub fn toolbar(&self, view: View, date: NaiveDate) -> Result<Vec<String>> {
        let calendar = match self.engine.ready() {
            Some(calendar) => calendar,
            None => return Ok(Vec::new()),
        };

        let request = view.label_request(date, self.locale, self.week_start, self.agenda_length)?;
        let label = calendar.format(&request)?;

        Ok(label.lines().into_iter().map(str::to_owned).collect())
    }

    pub fn render(&self, view: View, date: NaiveDate) -> Result<String> {
        let calendar = match self.engine.ready() {
            Some(calendar) => calendar,
            None => {
                log::debug!("Calendar engine not ready, rendering nothing");
                return Ok(String::new());
            }
        };

        let mut out = String::new();
        for line in self.toolbar(view, date)? {
            push_line(&mut out, &format!("{:^width$}", line, width = LINE_WIDTH));
        }
        out.push('\n');

        let range = view.range(date, self.week_start, self.agenda_length)?;
        match view {
            View::Month => self.month_grid(calendar, &range, &mut out)?,
            View::Week | View::Day => self.day_list(calendar, &range, &mut out)?,
            View::Agenda => self.agenda_list(calendar, &range, &mut out)?,
        }

        Ok(out)
    }

    fn month_grid(&self, calendar: &DualCalendar, month: &DateRange, out: &mut String) -> Result<()> {
        let header: String = std::iter::successors(Some(self.week_start), |day| Some(day.succ()))
            .take(7)
            .map(|day| cell(self.locale.weekday_short(day)))
            .collect();
        push_line(out, &header);

        let first_week = View::Week.range(month.start(), self.week_start, self.agenda_length)?;
        let last_week = View::Week.range(month.end(), self.week_start, self.agenda_length)?;
        let grid = DateRange::new(first_week.start(), last_week.end())?;

        for week in &grid.days().chunks(7) {
            let week: Vec<NaiveDate> = week.collect();

            let mut civil_line = String::new();
            let mut lunar_line = String::new();
            for day in &week {
                if !month.contains(*day) {
                    civil_line.push_str(&cell(""));
                    lunar_line.push_str(&cell(""));
                    continue;
                }

                match calendar.month_date_header(*day, self.locale)? {
                    FormattedLabel::Stacked { civil, lunar } => {
                        civil_line.push_str(&cell(&civil));
                        lunar_line.push_str(&cell(&lunar));
                    }
                    FormattedLabel::Line(line) => {
                        civil_line.push_str(&cell(&line));
                        lunar_line.push_str(&cell(""));
                    }
                }
            }
            push_line(out, &civil_line);
            push_line(out, &lunar_line);

            let titles: Vec<Vec<&Event>> = week
                .iter()
                .map(|day| {
                    if month.contains(*day) {
                        self.agenda.events_on(*day).collect()
                    } else {
                        Vec::new()
                    }
                })
                .collect();
            let rows = titles.iter().map(Vec::len).max().unwrap_or(0);

            for row in 0..rows {
                let line: String = titles
                    .iter()
                    .map(|events| cell(events.get(row).map_or("", |e| e.title.as_str())))
                    .collect();
                push_line(out, &line);
            }
            out.push('\n');
        }

        Ok(())
    }

    fn day_list(&self, calendar: &DualCalendar, range: &DateRange, out: &mut String) -> Result<()> {
        for day in range.days() {
            push_line(out, &calendar.day(day, self.locale)?.to_string());
            for event in self.agenda.events_on(day) {
                push_line(out, &format!("  - {}", event.title));
            }
        }

        Ok(())
    }

    fn agenda_list(&self, calendar: &DualCalendar, range: &DateRange, out: &mut String) -> Result<()> {
        let mut any = false;

        for day in range.days() {
            for event in self.agenda.events_on(day) {
                any = true;
                let date = calendar.agenda_date(day, self.locale)?;
                push_line(out, &format!("{}  {} [{}]", date, event.title, event.category));
                for line in &event.desc {
                    push_line(out, &format!("    {}", line));
                }
            }
        }

        if !any {
            push_line(out, "No events in this range.");
        }

        Ok(())
    }
}

/// Pads `content` to the cell width, eliding what does not fit with `…`.
fn cell(content: &str) -> String {
    let content: String = if content.chars().count() < CELL_WIDTH {
        content.to_owned()
    } else {
        content
            .chars()
            .take(CELL_WIDTH - 2)
            .chain(std::iter::once('…'))
            .collect()
    };
    format!("{:<width$}", content, width = CELL_WIDTH)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::lunar::HijriKind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ready_engine() -> Engine {
        let mut engine = Engine::new();
        let config = Config {
            calendar: HijriKind::Civil,
            ..Config::default()
        };
        engine.initialize(&config).unwrap();
        engine
    }

    fn agenda() -> Agenda {
        Agenda::from_toml(
            r#"
            [[event]]
            title = "First Taraweeh"
            date = "2024-03-10"
            category = "islamic"
            desc = ["After Isha"]

            [[event]]
            title = "Youth Night"
            date = "2024-03-15"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn uninitialized_engine_renders_nothing() {
        let engine = Engine::new();
        let agenda = agenda();
        let renderer = Renderer::new(&engine, &agenda, Locale::English);

        assert_eq!(renderer.render(View::Month, ymd(2024, 3, 1)).unwrap(), "");
        assert!(renderer.toolbar(View::Week, ymd(2024, 3, 1)).unwrap().is_empty());
    }

    #[test]
    fn toolbar_lines() {
        let engine = ready_engine();
        let agenda = Agenda::default();
        let renderer = Renderer::new(&engine, &agenda, Locale::English);

        assert_eq!(
            renderer.toolbar(View::Week, ymd(2024, 3, 13)).unwrap(),
            vec!["March 10 - 16", "Sha'ban 29 - Ramadan 06"]
        );
    }

    #[test]
    fn week_view_lists_days_and_events() {
        let engine = ready_engine();
        let agenda = agenda();
        let renderer = Renderer::new(&engine, &agenda, Locale::English);

        let out = renderer.render(View::Week, ymd(2024, 3, 13)).unwrap();
        let lines: Vec<&str> = out.lines().map(str::trim).collect();

        assert_eq!(lines[0], "March 10 - 16");
        assert_eq!(lines[1], "Sha'ban 29 - Ramadan 06");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Sun 10(29)");
        assert_eq!(lines[4], "- First Taraweeh");
        assert_eq!(lines[5], "Mon 11(01)");
        assert_eq!(*lines.last().unwrap(), "Sat 16(06)");
        assert!(lines.contains(&"- Youth Night"));
    }

    #[test]
    fn agenda_view_rows() {
        let engine = ready_engine();
        let agenda = agenda();
        let renderer = Renderer::new(&engine, &agenda, Locale::English).agenda_length(14);

        let out = renderer.render(View::Agenda, ymd(2024, 3, 10)).unwrap();

        assert!(out.contains("Sun 10th Mar/29th Sha  First Taraweeh [islamic]\n    After Isha\n"));
        assert!(out.contains("Fri 15th Mar/5th Ram  Youth Night [community]\n"));

        let empty = renderer.render(View::Agenda, ymd(2024, 5, 1)).unwrap();
        assert!(empty.ends_with("No events in this range.\n"));
    }

    #[test]
    fn month_grid_cells() {
        let engine = ready_engine();
        let agenda = agenda();
        let renderer = Renderer::new(&engine, &agenda, Locale::English);

        let out = renderer.render(View::Month, ymd(2024, 3, 1)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1].trim(), "Sha'ban 1445 - Ramadan 1445");
        assert!(lines[3].starts_with("Sun           Mon"));
        // March 2024 starts on a Friday, the first five cells are blank
        assert_eq!(lines[4], format!("{}1st Mar       2nd Mar", " ".repeat(5 * CELL_WIDTH)));
        assert_eq!(lines[5], format!("{}20th Sha      21st Sha", " ".repeat(5 * CELL_WIDTH)));
    }

    #[test]
    fn month_grid_elides_long_titles() {
        let engine = ready_engine();
        let agenda = agenda();
        let renderer = Renderer::new(&engine, &agenda, Locale::English);

        let out = renderer.render(View::Month, ymd(2024, 3, 1)).unwrap();

        // week of March 10th: Sunday holds the first event, Friday the second
        let titles = format!("{:<14}{}Youth Night\n", "First Tarawe…", " ".repeat(4 * CELL_WIDTH));
        assert!(out.contains(&titles));
        assert!(!out.contains("First Tarawee"));
    }

    #[test]
    fn cells_keep_titles_that_fit() {
        assert_eq!(cell("Youth Night"), "Youth Night   ");
        assert_eq!(cell("Thirteen char"), "Thirteen char ");
        assert_eq!(cell("Fourteen chars"), "Fourteen cha… ");
        assert_eq!(cell("Fourteen chars").chars().count(), CELL_WIDTH);
    }
}

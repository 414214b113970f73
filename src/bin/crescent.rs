extern crate crescent as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use lib::agenda::Agenda;
use lib::config::load_suitable_config;
use lib::format::{FormatKind, FormatRequest};
use lib::range::parse_date;
use lib::render::Renderer;
use lib::view::{Navigate, View};
use lib::{DateRange, Engine, HijriKind, Locale};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "crescent",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Gregorian and Hijri calendar labels and views."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(short = "v", long = "view", help = "month, week, day or agenda")]
    pub view: Option<View>,

    #[structopt(
        short = "d",
        long = "date",
        help = "focused date (YYYY-MM-DD), defaults to today",
        parse(try_from_str = parse_date)
    )]
    pub date: Option<NaiveDate>,

    #[structopt(
        long = "end",
        help = "explicit end date for week and agenda labels",
        parse(try_from_str = parse_date)
    )]
    pub end: Option<NaiveDate>,

    #[structopt(short = "l", long = "locale", help = "locale tag, e.g. en-US or ar-SA")]
    pub locale: Option<Locale>,

    #[structopt(
        long = "calendar",
        help = "hijri calendar: umm-al-qura, civil, tabular or observational"
    )]
    pub calendar: Option<HijriKind>,

    #[structopt(short = "e", long = "events", help = "events file", parse(from_os_str))]
    pub events: Option<PathBuf>,

    #[structopt(short = "n", long = "navigate", help = "today, prev or next")]
    pub navigate: Option<Navigate>,

    #[structopt(long = "label-only", help = "only print the view's label")]
    pub label_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file.clone() {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        println!("crescent ran into a fatal error!");
        println!("Consider filing an issue with a log file and the backtrace below.");

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut config = load_suitable_config(args.configfile.as_deref())?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(calendar) = args.calendar {
        config.calendar = calendar;
    }
    if let Some(events) = args.events {
        config.events = Some(events);
    }
    let view = args.view.unwrap_or(config.view);

    let today = Local::now().date_naive();
    let mut date = args.date.unwrap_or(today);
    if let Some(action) = args.navigate {
        date = view.navigate(date, action, today, config.agenda_length)?;
    }

    let mut engine = Engine::new();
    let calendar = engine.initialize(&config)?;

    if args.label_only {
        let request = match (view, args.end) {
            (View::Week, Some(end)) => FormatRequest::new(
                FormatKind::DayRangeHeader(DateRange::new(date, end)?),
                config.locale,
            ),
            (View::Agenda, Some(end)) => FormatRequest::new(
                FormatKind::AgendaHeader(DateRange::new(date, end)?),
                config.locale,
            ),
            _ => view.label_request(date, config.locale, config.week_start(), config.agenda_length)?,
        };
        println!("{}", calendar.format(&request)?);
        return Ok(());
    }

    let agenda = match &config.events {
        Some(path) => Agenda::from_file(path)?,
        None => Agenda::default(),
    };
    log::debug!("{} events loaded", agenda.len());

    let renderer = Renderer::new(&engine, &agenda, config.locale)
        .week_start(config.week_start())
        .agenda_length(config.agenda_length);

    print!("{}", renderer.render(view, date)?);

    Ok(())
}

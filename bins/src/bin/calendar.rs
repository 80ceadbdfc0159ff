// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Sigma calendar project*
//!
//! Run the calendar pipeline over a saved widget input and print what the
//! calendar would show
//!

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValue};
use serde::Deserialize;
use sigma_calendar_core::{
    CalendarView, ColumnRegistry, Event, FieldMapping, RawColumnStore, Settings, WeekStart,
    parse_date_str,
};
use sigma_calendar_engine::{
    CalendarCollection, EventIndex, initial_date, process_calendar_data, view, visible_days,
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::{Path, PathBuf};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Module path prefixes whose log records are shown: the libraries and this
/// binary
const LOG_TARGETS: [&str; 2] = ["sigma_calendar", "calendar"];

/// Calendar entry point
///
/// One of:
/// - Print the collection summary
/// - Print the events on a day
/// - Print the events overlapping a span of time
/// - Print a month grid
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let mut config_log = ConfigBuilder::new();
    for target in LOG_TARGETS {
        config_log.add_filter_allow_str(target);
    }
    let config_log = config_log.build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Load the widget input
    let input = match WidgetInput::from_path(&args.input) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error reading {}: {error}", args.input.display());
            std::process::exit(1);
        }
    };
    let settings = Settings::from_config_json(&input.settings);
    let week_start = args.week_start.map_or(settings.week_starts_on, WeekStart::from);

    // Run the pipeline
    let collection = match process_calendar_data(
        input.data.as_ref(),
        &input.config,
        &settings,
        input.columns.as_ref(),
    ) {
        Ok(collection) => collection,
        Err(error) => {
            eprintln!("Calendar not configured: {error}");
            for problem in input.config.problems() {
                eprintln!("  {problem}");
            }
            std::process::exit(1);
        }
    };
    info!("Loaded {} events", collection.stats().total_events);

    // Check the options
    match (&args.cli_command, &args.date, &args.start, &args.end) {
        //----------------------------------------------------------------------
        // Valid
        //----------------------------------------------------------------------
        (Command::Summary, _, _, _) => {
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
        (Command::Day, Some(date), _, _) => {
            let day = parse_day(date);
            let index = EventIndex::new(collection.events());
            print_day(day, &index.events_for_day(day));
        }
        (Command::Range, _, Some(start), Some(end)) => {
            let (start, end) = (parse_date_time(start), parse_date_time(end));
            let index = EventIndex::new(collection.events());
            for event in index.events_overlapping(start, end) {
                print_event(event);
            }
        }
        (Command::Month, date, _, _) => {
            let date = match date {
                Some(date) => parse_day(date),
                None => initial_date(&settings, Some(&collection), Local::now().date_naive()),
            };
            print_month(&collection, date, week_start);
        }
        //----------------------------------------------------------------------
        // Invalid
        //----------------------------------------------------------------------
        _ => {
            eprintln!("CLI Error: invalid options");
            Cli::command().print_long_help()?;
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Calendar CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sigma calendar tool for checking widget data",
    after_help = "The input is the JSON the host passes to the widget"
)]
pub struct Cli {
    // What to print
    #[arg(value_enum)]
    pub cli_command: Command,

    /// Path to the widget input JSON
    #[arg(long)]
    pub input: PathBuf,

    /// The day to show (day and month commands)
    #[arg(long)]
    pub date: Option<String>,

    /// Start of the span (range command)
    #[arg(long)]
    pub start: Option<String>,

    /// End of the span (range command)
    #[arg(long)]
    pub end: Option<String>,

    /// Override the first day of the week from the settings
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStartArg>,

    /// Log the pipeline's progress
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Summary,
    Day,
    Range,
    Month,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Summary, Self::Day, Self::Range, Self::Month]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Summary => Some(
                PossibleValue::new("summary").help("Print the events, categories, and stats"),
            ),
            Command::Day => {
                Some(PossibleValue::new("day").help("Print the events on the day at --date"))
            }
            Command::Range => Some(
                PossibleValue::new("range")
                    .help("Print the events overlapping --start to --end"),
            ),
            Command::Month => Some(
                PossibleValue::new("month")
                    .help("Print the month grid around --date (or the opening date)"),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Sunday => WeekStart::Sunday,
            WeekStartArg::Monday => WeekStart::Monday,
        }
    }
}

/// Everything the host hands the widget
#[derive(Deserialize, Debug)]
struct WidgetInput {
    data: Option<RawColumnStore>,
    columns: Option<ColumnRegistry>,
    config: FieldMapping,

    /// The settings JSON, as text
    #[serde(default)]
    settings: String,
}

impl WidgetInput {
    fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn parse_date_time(text: &str) -> NaiveDateTime {
    match parse_date_str(text) {
        Ok(date_time) => date_time,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

fn parse_day(text: &str) -> NaiveDate {
    parse_date_time(text).date()
}

fn print_event(event: &Event) {
    let when = if event.is_all_day() {
        format!("{} (all day)", event.start_day())
    } else {
        format!("{} - {}", event.start(), event.end())
    };
    println!(
        "{when}  {}  [{}] {}",
        event.title(),
        event.category(),
        event.colour()
    );
}

fn print_day(day: NaiveDate, events: &[&Event]) {
    println!("{}", view::title(CalendarView::Day, day, WeekStart::default()));
    for event in events {
        print!("  ");
        print_event(event);
    }
}

fn print_month(collection: &CalendarCollection, date: NaiveDate, week_start: WeekStart) {
    println!("{}", view::title(CalendarView::Month, date, week_start));
    let index = EventIndex::new(collection.events());
    for week in visible_days(CalendarView::Month, date, week_start).chunks(7) {
        let cells: Vec<String> = week
            .iter()
            .map(|day| format!("{} ({:>2})", day.format("%d"), index.events_for_day(*day).len()))
            .collect();
        println!("{}", cells.join("  "));
    }
}

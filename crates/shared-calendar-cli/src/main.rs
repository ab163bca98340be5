//! `sharedcal` CLI — inspect shared calendar documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print a calendar with its events sorted by start time
//! sharedcal show -i calendar.json
//!
//! # Events overlapping the half-open range [start, end)
//! sharedcal between --start 2020-01-01 --end "2020-01-01 06:00" -i calendar.json
//!
//! # Same, as JSON
//! cat calendar.json | sharedcal between --start 2020-01-01 --end 2020-01-02 --json
//!
//! # List conflicting pairs; exit with status 1 if there are any
//! sharedcal conflicts --check -i calendar.json
//!
//! # Print the built-in sample calendar
//! sharedcal demo
//! ```
//!
//! Calendar documents look like
//! `{"name": "...", "events": [{"name": "...", "start": "...", "end": "..."}]}`.
//! Logging goes to stderr and honours `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared_calendar::instant::format_instant;
use shared_calendar::{parse_instant, Calendar, Event};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sharedcal",
    version,
    about = "Shared calendar range queries and conflict detection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log library activity at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the calendar with events sorted by start time
    Show {
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List events overlapping the half-open range [start, end)
    Between {
        /// Range start, e.g. "2020-01-01" or "2020-01-01 09:30"
        #[arg(long)]
        start: String,
        /// Range end (exclusive)
        #[arg(long)]
        end: String,
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List every pair of overlapping events
    Conflicts {
        /// Calendar JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Exit with status 1 when any conflict exists
        #[arg(long)]
        check: bool,
    },
    /// Print the built-in sample calendar
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { input } => {
            let calendar = load_calendar(input.as_deref())?;
            println!("{}", calendar);
        }
        Commands::Between {
            start,
            end,
            input,
            json,
        } => {
            let start = parse_instant(&start).context("Invalid --start")?;
            let end = parse_instant(&end).context("Invalid --end")?;
            let calendar = load_calendar(input.as_deref())?;

            let mut found = calendar.events_between(start, end);
            found.sort_by(|a, b| a.cmp_start(b));

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                println!(
                    "No events between {} and {}",
                    format_instant(&start),
                    format_instant(&end)
                );
            } else {
                let blocks: Vec<String> = found.iter().map(Event::to_string).collect();
                println!("{}", blocks.join("\n"));
            }
        }
        Commands::Conflicts { input, check } => {
            let calendar = load_calendar(input.as_deref())?;
            let conflicts = calendar.conflicts();

            if conflicts.is_empty() {
                println!("No conflicts");
            } else {
                println!("{} conflict(s) in {}:", conflicts.len(), calendar.name());
                for conflict in &conflicts {
                    println!(
                        "  {} overlaps {} by {} min",
                        describe(&conflict.event_a),
                        describe(&conflict.event_b),
                        conflict.overlap_minutes
                    );
                }
                if check {
                    process::exit(1);
                }
            }
        }
        Commands::Demo => {
            println!("{}", demo_calendar()?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// "Name (start - end)" for a one-line conflict report.
fn describe(event: &Event) -> String {
    format!(
        "{} ({} - {})",
        event.name(),
        format_instant(&event.start()),
        format_instant(&event.end())
    )
}

/// Sam's two tennis matches, two days apart.
fn demo_calendar() -> Result<Calendar> {
    let day = |text: &str| parse_instant(text).context("Invalid demo instant");
    Ok(Calendar::with_events(
        "Sam's Calendar",
        vec![
            Event::new("Tennis with Frank", day("2020-01-01")?, day("2020-01-02")?),
            Event::new("Tennis with Frank 2", day("2020-01-03")?, day("2020-01-04")?),
        ],
    ))
}

fn load_calendar(path: Option<&str>) -> Result<Calendar> {
    let text = read_input(path)?;
    Calendar::from_json(&text).context("Failed to load calendar")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

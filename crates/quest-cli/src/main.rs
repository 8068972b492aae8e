//! `quest2cal` CLI — turn a pasted class-schedule export into an iCalendar file.
//!
//! ## Usage
//!
//! ```sh
//! # Export text on stdin, calendar on stdout
//! pbpaste | quest2cal convert > schedule.ics
//!
//! # From file to file, also writing the parsed records as JSON
//! quest2cal convert -i input.txt -o schedule.ics --json schedule.json
//!
//! # Lowercase event names, drop room numbers from locations
//! quest2cal convert -i input.txt --lower --drop-room
//!
//! # Only parse, printing the record tree as JSON
//! quest2cal parse -i input.txt
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` or pass `-v` for more detail.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use quest_engine::parser::count_slots;
use quest_engine::{
    expand_schedule, ics, parse_schedule, report, source, BuildingTable, CourseRecord, DstPolicy,
    ExpandOptions, MissingInstructor, ParseOptions,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quest2cal",
    version,
    about = "Convert a class-schedule export into an iCalendar file"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug detail (dropped slots, skipped test sections) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the export and write an iCalendar file
    Convert {
        #[command(flatten)]
        parse: ParseArgs,
        /// Calendar output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write the parsed records as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Lowercase event names and descriptions
        #[arg(long)]
        lower: bool,
        /// IANA timezone the class times are in
        #[arg(long, default_value = "America/Toronto")]
        timezone: String,
        /// What to do with class times that fall in a DST gap
        #[arg(long, value_enum, default_value_t = DstArg::ShiftForward)]
        dst_policy: DstArg,
        /// DTSTAMP for every event (defaults to now), e.g. 2026-01-01T00:00:00Z
        #[arg(long)]
        stamp: Option<DateTime<Utc>>,
    },
    /// Parse the export and print the records as JSON
    Parse {
        #[command(flatten)]
        parse: ParseArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ParseArgs {
    /// Export text file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// JSON object of building code to display name, replacing the built-in table
    #[arg(long)]
    buildings: Option<PathBuf>,
    /// Drop the room number once the building name is substituted
    #[arg(long)]
    drop_room: bool,
    /// Leave the instructor empty instead of "TBA" when none is listed
    #[arg(long)]
    empty_instructor: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DstArg {
    Skip,
    ShiftForward,
}

impl From<DstArg> for DstPolicy {
    fn from(arg: DstArg) -> Self {
        match arg {
            DstArg::Skip => DstPolicy::Skip,
            DstArg::ShiftForward => DstPolicy::ShiftForward,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            parse,
            output,
            json,
            lower,
            timezone,
            dst_policy,
            stamp,
        } => {
            let expand = ExpandOptions {
                dst_policy: dst_policy.into(),
                lowercase: lower,
                ..ExpandOptions::in_timezone(&timezone)?
            };
            let courses = parse_input(&parse)?;

            // Render everything before writing anything.
            let dump = json
                .map(|path| report::to_json(&courses).map(|dump| (path, dump)))
                .transpose()
                .context("Failed to serialize parsed records")?;
            let events = expand_schedule(&courses, &expand);
            let calendar = ics::encode_calendar(&events, stamp.unwrap_or_else(Utc::now));

            if let Some((path, dump)) = dump {
                write_output(Some(path.as_path()), &dump)?;
                eprintln!("saved records to {}", path.display());
            }
            write_output(output.as_deref(), &calendar)?;
            if let Some(path) = &output {
                eprintln!("saved {} events to {}", events.len(), path.display());
            }
        }
        Commands::Parse { parse, output } => {
            let courses = parse_input(&parse)?;
            let dump = report::to_json(&courses).context("Failed to serialize parsed records")?;
            write_output(output.as_deref(), &dump)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` decides the filter, falling back to `warn`; `-v` raises it to
/// `debug` either way.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Read and parse the export, reporting the slot count on stderr.
fn parse_input(args: &ParseArgs) -> Result<Vec<CourseRecord>> {
    let options = parse_options(args)?;
    let text = read_input(args.input.as_deref())?;
    let courses = parse_schedule(&text, &options);

    let slots = count_slots(&courses);
    eprintln!("parsed {} class slots", slots);
    if slots == 0 {
        tracing::warn!("no schedulable class slots found in the input");
    }
    Ok(courses)
}

fn parse_options(args: &ParseArgs) -> Result<ParseOptions> {
    let buildings = match &args.buildings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read building table: {}", path.display()))?;
            BuildingTable::from_json(&json)?
        }
        None => BuildingTable::waterloo(),
    };

    Ok(ParseOptions {
        buildings,
        keep_room: !args.drop_room,
        missing_instructor: if args.empty_instructor {
            MissingInstructor::Empty
        } else {
            MissingInstructor::Unknown
        },
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(source::read_document(path)?),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

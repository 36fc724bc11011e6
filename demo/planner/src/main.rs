//! Planner CLI - Command Line Recurrence Expansion
//!
//! Operational entry point for the recurrence engine.
//!
//! # Commands
//!
//! - `planner expand --anchor 2024-01-01 --frequency daily --count 5` -
//!   Expand a pattern into its occurrence dates
//! - `planner validate --anchor 2024-01-31 --frequency monthly --month-day 31` -
//!   Check a pattern without expanding it

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recur_core::types::{Date, Weekday, WeekdaySet};
use recur_engine::recurrence::{
    expand_with_limits, ExpansionLimits, Frequency, PatternBuilder, RecurrencePattern,
};

/// Recurrence pattern expansion CLI
#[derive(Parser)]
#[command(name = "planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a pattern into its occurrence dates
    Expand {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Cap on the number of occurrences
        #[arg(long, default_value = "1000")]
        max_occurrences: usize,

        /// Cap on the look-ahead from the anchor, in years
        #[arg(long, default_value = "100")]
        max_span_years: u32,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Validate a pattern without expanding it
    Validate {
        #[command(flatten)]
        pattern: PatternArgs,
    },
}

/// Flags describing a recurrence pattern.
#[derive(Args)]
struct PatternArgs {
    /// Anchor date (YYYY-MM-DD)
    #[arg(short, long)]
    anchor: String,

    /// Frequency (daily, weekly, monthly, yearly)
    #[arg(short, long)]
    frequency: String,

    /// Every N units of the frequency
    #[arg(short, long, default_value = "1")]
    interval: u32,

    /// Weekly: comma-separated weekdays, e.g. "mon,wed,fri"
    #[arg(short = 'd', long)]
    days: Option<String>,

    /// Monthly: fixed day of month (1-31)
    #[arg(long)]
    month_day: Option<u32>,

    /// Monthly: week ordinal for the Nth-weekday mode (1-5, 5 = last)
    #[arg(long, requires = "nth_weekday")]
    nth_week: Option<u32>,

    /// Monthly: weekday for the Nth-weekday mode, e.g. "tue"
    #[arg(long, requires = "nth_week")]
    nth_weekday: Option<String>,

    /// Yearly: calendar month (1-12)
    #[arg(short, long)]
    month: Option<u32>,

    /// Yearly: day within the month (1-31)
    #[arg(long)]
    day: Option<u32>,

    /// Terminate at an inclusive end date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "count")]
    end: Option<String>,

    /// Terminate after this many occurrences
    #[arg(short, long)]
    count: Option<u32>,
}

fn build_pattern(args: &PatternArgs) -> anyhow::Result<RecurrencePattern> {
    let anchor = Date::parse(&args.anchor).context("invalid anchor date")?;
    let frequency: Frequency = args
        .frequency
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid frequency")?;

    let mut builder = PatternBuilder::new()
        .anchor(anchor)
        .frequency(frequency)
        .interval(args.interval);

    if let Some(days) = &args.days {
        let days: WeekdaySet = days.parse().context("invalid weekday list")?;
        builder = builder.week_days(days);
    }
    if let Some(day) = args.month_day {
        builder = builder.month_day(day);
    }
    if let (Some(week), Some(weekday)) = (args.nth_week, &args.nth_weekday) {
        let weekday: Weekday = weekday.parse().context("invalid weekday")?;
        builder = builder.nth_weekday(week, weekday);
    }
    if let (Some(month), Some(day)) = (args.month, args.day) {
        builder = builder.year_date(month, day);
    }
    if let Some(end) = &args.end {
        builder = builder.end_date(Date::parse(end).context("invalid end date")?);
    }
    if let Some(count) = args.count {
        builder = builder.count(count);
    }

    builder.build().context("invalid pattern")
}

fn run_expand(
    args: &PatternArgs,
    limits: ExpansionLimits,
    format: &str,
) -> anyhow::Result<()> {
    let pattern = build_pattern(args)?;
    debug!(?pattern, "expanding pattern");

    let dates = expand_with_limits(&pattern, limits)?;
    info!(
        occurrences = dates.len(),
        frequency = %pattern.frequency,
        "expansion complete"
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&dates)?),
        "table" => {
            for date in &dates {
                println!("{}  {}", date, date.weekday().short_name());
            }
            println!(
                "{} occurrence(s), every {} {}(s)",
                dates.len(),
                pattern.interval,
                pattern.frequency.unit_name()
            );
        }
        other => anyhow::bail!("unknown output format: {}", other),
    }

    Ok(())
}

fn run_validate(args: &PatternArgs) -> anyhow::Result<()> {
    let pattern = build_pattern(args)?;
    println!("Pattern is valid: {} every {} {}(s)", pattern.frequency, pattern.interval, pattern.frequency.unit_name());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Expand {
            pattern,
            max_occurrences,
            max_span_years,
            format,
        } => run_expand(
            &pattern,
            ExpansionLimits::new(max_occurrences, max_span_years),
            &format,
        ),
        Commands::Validate { pattern } => run_validate(&pattern),
    }
}

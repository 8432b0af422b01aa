use std::path::PathBuf;

use agecalc::Locale;
use clap::Parser;

/// Age calculator: calendar age, Hijri date, zodiac, next birthday and
/// life statistics for a birth date.
#[derive(Parser)]
#[command(name = "agecalc", version, about = "Birth date age calculator")]
pub struct Cli {
    /// Birth date as YYYY-MM-DD.
    pub birth_date: String,

    /// Reference instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS). Defaults to
    /// the local clock.
    #[arg(long)]
    pub now: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the walking rate used for the steps counter.
    #[arg(long)]
    pub steps_per_day: Option<u64>,

    /// Override the earliest accepted birth year.
    #[arg(long)]
    pub min_year: Option<i32>,

    /// Display language for labels (ar or en).
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Include the child development stage.
    #[arg(long)]
    pub child: bool,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pub pretty: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

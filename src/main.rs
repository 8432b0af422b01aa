mod cli;
mod logging;
mod settings;

use std::process;

use agecalc::{AgeReport, ChildStage, calculate_age, validate_birth_date};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::Cli;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    #[serde(flatten)]
    report: &'a AgeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_stage: Option<ChildStage>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = settings::resolve(cli)?;

    // The clock is read here and nowhere else.
    let now = match &cli.now {
        Some(s) => parse_now(s)?,
        None => Local::now().naive_local(),
    };
    info!(%now, locale = %config.locale(), "reference instant");

    let birth = validate_birth_date(&cli.birth_date, now, &config)
        .with_context(|| format!("rejected birth date {:?}", cli.birth_date))?;
    let report = calculate_age(birth, now, &config);

    let child_stage = cli.child.then(|| {
        let months = u64::try_from(report.age.total_months()).unwrap_or(0);
        ChildStage::classify(months, config.locale())
    });

    let output = Output {
        report: &report,
        child_stage,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}

fn parse_now(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    bail!("invalid --now value {s:?} (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_now_accepts_date_and_datetime() {
        let d = parse_now("2023-03-15").unwrap();
        assert_eq!(d.to_string(), "2023-03-15 00:00:00");
        let dt = parse_now("2023-03-15T08:30:00").unwrap();
        assert_eq!(dt.to_string(), "2023-03-15 08:30:00");
    }

    #[test]
    fn parse_now_rejects_garbage() {
        assert!(parse_now("soon").is_err());
    }
}

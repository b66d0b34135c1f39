// ABOUTME: Command-line entry point that builds Strava pace and heart-rate zone reports
// ABOUTME: Loads config, authenticates, fetches activities, prints tables and charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Both domains for January
//! cargo run --bin zone-report -- --after 01-01-2024 --before 02-01-2024
//!
//! # Heart rate only, with a JSON export
//! cargo run --bin zone-report -- --after 01-01-2024 --before 02-01-2024 \
//!     --domain heartrate --json report.json
//!
//! # SVG pie charts for both domains in ./charts
//! cargo run --bin zone-report -- --after 01-01-2024 --before 02-01-2024 \
//!     --chart-dir charts
//!
//! # Prompt for dates on stdin
//! cargo run --bin zone-report
//! ```

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use strava_zones::{
    config::{load_dotenv, DomainSelection, LogLevel, ZoneReportConfig},
    date_input::{parse_date, prompt_line},
    errors::{AppError, AppResult},
    formatters::{chart_title, render_proportions, render_table, write_pie_charts, write_report},
    logging::LoggingConfig,
    models::DateRange,
    report::{build_zone_report, ReportOptions, ZoneReport},
    zone_providers::StravaProvider,
};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "zone-report",
    version,
    about = "Strava pace and heart-rate zone report",
    long_about = "Aggregates time spent in each pace and heart-rate zone across Strava \
                  activities in a date range, then prints per-activity tables and \
                  percentage charts."
)]
struct ZoneReportArgs {
    /// Start of the window (MM-DD-YYYY); prompted for when omitted
    #[arg(long)]
    after: Option<String>,

    /// End of the window (MM-DD-YYYY); prompted for when omitted
    #[arg(long)]
    before: Option<String>,

    /// Domains to report on (all, pace, heartrate); overrides `ZONE_REPORT_DOMAINS`
    #[arg(long)]
    domain: Option<String>,

    /// Also write the full report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Also write SVG pie charts (`pace_pie.svg`, `heart_rate_pie.svg`) into this directory
    #[arg(long, value_name = "DIR")]
    chart_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = ZoneReportArgs::parse();

    if let Err(e) = run(args).await {
        error!(code = ?e.code, "{e}");
        eprintln!("zone-report: {e}");
        process::exit(e.code.exit_code());
    }
}

async fn run(args: ZoneReportArgs) -> AppResult<()> {
    let dotenv_path = load_dotenv();
    init_logging(&args)?;
    if let Some(path) = &dotenv_path {
        debug!(path = %path.display(), "Loaded environment file");
    }
    let config = ZoneReportConfig::from_env()?;

    let range = resolve_date_range(&args)?;
    let mut options = ReportOptions::from(&config.report);
    if let Some(domain) = &args.domain {
        options.domains = DomainSelection::from_str_or_default(domain).domains();
    }

    let provider =
        StravaProvider::authenticate(config.provider_config(), &config.strava.credentials())
            .await?;

    let report = build_zone_report(&provider, &range, &options).await?;
    print_report(&report)?;

    if let Some(path) = &args.json {
        write_report(path, &report)?;
    }
    if let Some(dir) = &args.chart_dir {
        write_pie_charts(dir, &report)?;
    }

    info!(
        activities = report.activity_count,
        domains = report.domains.len(),
        "Zone report complete"
    );
    Ok(())
}

fn init_logging(args: &ZoneReportArgs) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}

fn resolve_date_range(args: &ZoneReportArgs) -> AppResult<DateRange> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stderr();

    let before = match &args.before {
        Some(value) => value.clone(),
        None => prompt_line(&mut reader, &mut writer, "Enter the before date in MM-DD-YYYY")?,
    };
    let after = match &args.after {
        Some(value) => value.clone(),
        None => prompt_line(&mut reader, &mut writer, "Enter the after date in MM-DD-YYYY")?,
    };

    DateRange::new(parse_date(&after)?, parse_date(&before)?)
}

fn print_report(report: &ZoneReport) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for domain_report in &report.domains {
        writeln!(out, "{}", render_table(&domain_report.table))?;
        let title = chart_title(domain_report.domain, &report.range);
        writeln!(out, "{}", render_proportions(&domain_report.summary, &title))?;
        if !domain_report.skipped_activities.is_empty() {
            writeln!(
                out,
                "Skipped {} activities without {} zones: {:?}\n",
                domain_report.skipped_activities.len(),
                domain_report.domain.display_name(),
                domain_report.skipped_activities
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

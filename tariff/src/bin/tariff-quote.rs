//! `tariff-quote` — price one service request from the command line.
//!
//! ```text
//! tariff-quote --rate 40 --hours 1 --at 2024-03-16T23:30 --urgent --distance-km 25
//! tariff-quote --flat 75 --at 2025-12-25T10:00 --config pricing.toml --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rust_decimal::Decimal;
use tariff::core::{fail, Error, Result};
use tariff::engine::{PricingBreakdown, PricingConfig, PricingEngine, PricingRequest};
use tariff::logging;
use tariff::time::LocalTimestamp;

#[derive(Parser)]
#[command(name = "tariff-quote")]
#[command(about = "Compute an itemised service price")]
struct Args {
    /// Path to a TOML pricing configuration (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hourly rate in major currency units
    #[arg(long, conflicts_with = "flat")]
    rate: Option<Decimal>,

    /// Billed hours (may be fractional)
    #[arg(long, default_value = "1")]
    hours: Decimal,

    /// Flat price in major currency units
    #[arg(long)]
    flat: Option<Decimal>,

    /// Immediate, non-scheduled request
    #[arg(long)]
    urgent: bool,

    /// Travel distance in kilometres
    #[arg(long, default_value = "0")]
    distance_km: Decimal,

    /// Local date and time of the service (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    at: LocalTimestamp,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PricingConfig::from_file(path)?,
        None => PricingConfig::default(),
    };
    let engine = PricingEngine::new(config)?;

    let request = match (args.rate, args.flat) {
        (Some(rate), None) => PricingRequest::hourly(rate, args.hours, args.at),
        (None, Some(amount)) => PricingRequest::flat(amount, args.at),
        _ => fail!("either --rate or --flat is required"),
    }
    .with_urgent(args.urgent)
    .with_distance_km(args.distance_km);
    request.validate()?;

    let breakdown = engine.compute_price(&request);
    if args.json {
        let json = serde_json::to_string_pretty(&breakdown)
            .map_err(|e| Error::Runtime(format!("cannot encode breakdown: {e}")))?;
        println!("{json}");
    } else {
        print_summary(&engine, &request, &breakdown);
    }
    Ok(())
}

fn print_summary(engine: &PricingEngine, request: &PricingRequest, breakdown: &PricingBreakdown) {
    let at = request.requested_at;
    let holiday = engine.resolver().calendar().holiday_name(at.date());
    println!(
        "{} {}{}",
        at.weekday().short_name(),
        at,
        holiday.map(|h| format!(" ({h})")).unwrap_or_default()
    );
    let lines = breakdown.line_items();
    let width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
    for line in &lines {
        println!("  {:<width$}  {:>12}", line.label, line.formatted);
    }
    println!("  {:<width$}  {:>12}", "Total", breakdown.formatted.final_total);
}

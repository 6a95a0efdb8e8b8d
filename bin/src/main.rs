//! dayview CLI - previous-day 1-minute session dashboard.

use anyhow::Result;
use chrono::{NaiveDate, TimeDelta, Utc};
use clap::Parser;
use dayview_lib::prelude::*;
use dayview_lib::run_report_for_window;
use tracing_subscriber::EnvFilter;

mod display;

#[derive(Parser)]
#[command(name = "dayview")]
#[command(about = "Candlestick dashboard for yesterday's 1-minute session", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker symbol
    #[arg(short, long, default_value = "SPY")]
    symbol: String,

    /// Session date (YYYY-MM-DD). Defaults to yesterday (UTC).
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Chart width in columns
    #[arg(long, default_value = "80")]
    width: u16,

    /// Chart height in rows
    #[arg(long, default_value = "24")]
    height: u16,

    /// Hide the volume sub-panel
    #[arg(long)]
    no_volume: bool,

    /// Moving-average windows to overlay (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = [9, 21])]
    mav: Vec<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let window = match cli.date {
        Some(date) => TradingWindow::new(date, date + TimeDelta::days(1))?,
        None => TradingWindow::previous_day(Utc::now()),
    };

    let options = ChartOptions {
        show_volume: !cli.no_volume,
        moving_averages: cli.mav.clone(),
        title: String::new(),
        width: cli.width,
        height: cli.height,
    };

    let client = FetchClient::with_defaults()?;
    let report = run_report_for_window(&client, &cli.symbol, window, &options).await;

    display::print_report(&report);

    if report.outcome == Outcome::FetchFailed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! CLI entry point for the flight delay analyzer.
//!
//! Provides subcommands for generating the airport delay/cancellation
//! report from a historical flight-records CSV and for verifying a
//! previously generated report file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flight_delay_analyzer::analyzers::analyzer::analyze_all;
use flight_delay_analyzer::analyzers::types::AnalysisResult;
use flight_delay_analyzer::catalog;
use flight_delay_analyzer::loader::load_and_clean;
use flight_delay_analyzer::output::write_json;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable consulted when `--input` is not given.
const INPUT_ENV_VAR: &str = "FLIGHT_DATA_PATH";

#[derive(Parser)]
#[command(name = "flight_delay_analyzer")]
#[command(about = "Aggregates airport delay and cancellation statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full analysis report from a flight-records CSV
    Analyze {
        /// Path to the flight records CSV (defaults to $FLIGHT_DATA_PATH)
        #[arg(short, long, value_name = "CSV")]
        input: Option<PathBuf>,

        /// JSON file to write results to
        #[arg(short, long, default_value = "analysis_results.json")]
        output: PathBuf,
    },
    /// Check that a generated results file has the expected shape
    Verify {
        /// Path to a previously generated results JSON
        #[arg(default_value = "analysis_results.json", value_name = "RESULTS")]
        results: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/flight_delay_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("flight_delay_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, output } => {
            let input = resolve_input(input)?;
            run_analysis(&input, &output)?;
        }
        Commands::Verify { results } => {
            verify_results(&results)?;
        }
    }

    Ok(())
}

/// Resolves the input CSV path from the CLI argument or the environment.
fn resolve_input(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => std::env::var(INPUT_ENV_VAR).map(PathBuf::from).with_context(|| {
            format!("no --input given and {INPUT_ENV_VAR} is not set")
        }),
    }
}

/// Runs the full load, aggregate, and emit pipeline.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
fn run_analysis(input: &Path, output: &Path) -> Result<()> {
    info!("Loading flight records");
    let (records, report) = load_and_clean(input)?;
    info!(
        rows_read = report.rows_read,
        dropped_excluded_year = report.dropped_excluded_year,
        dropped_missing_fields = report.dropped_missing_fields,
        kept = report.kept,
        "Cleaning complete"
    );
    if report.kept == 0 {
        warn!("No records survived cleaning; every airport will be empty");
    }

    let result = analyze_all(&records);
    write_json(output, &result)?;
    info!(airports = result.airports.len(), "Analysis written");

    Ok(())
}

/// Opens an existing results file and checks its shape, logging a per-airport
/// summary. Fails on a missing file, unparsable JSON, or a listed airport
/// absent from the airports map.
fn verify_results(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("results file not found at {}", path.display()))?;
    let result: AnalysisResult =
        serde_json::from_str(&content).context("results file is not a valid analysis document")?;

    if result.airport_list.is_empty() {
        bail!("airportList is empty");
    }
    for entry in &result.airport_list {
        if !result.airports.contains_key(&entry.code) {
            bail!("airport {} is listed but missing from the airports map", entry.code);
        }
        match catalog::display_name(&entry.code) {
            Some(name) if name == entry.name => {}
            Some(name) => warn!(
                airport = %entry.code,
                listed = %entry.name,
                catalog = name,
                "Airport name differs from the current catalog"
            ),
            None => warn!(airport = %entry.code, "Airport is not in the current catalog"),
        }
    }

    for (code, airport) in &result.airports {
        info!(
            airport = %code,
            name = %airport.name,
            airlines = airport.airline_performance.len(),
            monthly_rows = airport.monthly_performance.len(),
            "Airport entry"
        );
    }

    info!(airports = result.airports.len(), "Results file verified");
    Ok(())
}

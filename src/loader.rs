//! Loading and cleaning of historical flight records.
//!
//! Reads the source CSV into typed rows, drops the excluded year, and drops
//! rows missing any critical field. Any parse failure aborts the run.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Year excluded from the analysis entirely. 2020 service levels are
/// anomalous and would skew every aggregate.
pub const EXCLUDED_YEAR: i32 = 2020;

/// A single row as it appears in the source CSV.
///
/// Fields other than the flight date may be empty in the raw data and
/// deserialize to `None`. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
pub struct RawFlightRecord {
    #[serde(rename = "FL_DATE")]
    pub fl_date: NaiveDate,
    #[serde(rename = "AIRLINE")]
    pub airline: Option<String>,
    #[serde(rename = "ORIGIN")]
    pub origin: Option<String>,
    #[serde(rename = "DEST")]
    pub dest: Option<String>,
    #[serde(rename = "DEP_DELAY")]
    pub dep_delay: Option<f64>,
    #[serde(rename = "ARR_DELAY")]
    pub arr_delay: Option<f64>,
    #[serde(rename = "CANCELLED")]
    pub cancelled: Option<f64>,
}

/// A cleaned flight record.
///
/// Invariant: airline, both delays, and the cancelled indicator are present,
/// and the date falls outside [`EXCLUDED_YEAR`]. Origin and destination may
/// still be missing; such rows simply never match an airport filter.
#[derive(Debug, Clone)]
pub struct FlightRecord {
    pub date: NaiveDate,
    pub airline: String,
    pub origin: Option<String>,
    pub dest: Option<String>,
    /// Departure delay in minutes. Negative means early.
    pub dep_delay: f64,
    /// Arrival delay in minutes. Negative means early.
    pub arr_delay: f64,
    /// 0/1 indicator; kept numeric so a group's cancellation rate is the
    /// plain mean of this column.
    pub cancelled: f64,
}

/// Counts of what the cleaning pass read, dropped, and kept.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub rows_read: usize,
    pub dropped_excluded_year: usize,
    pub dropped_missing_fields: usize,
    pub kept: usize,
}

/// Loads the CSV at `path` and applies the cleaning rules.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row fails to
/// deserialize (malformed date, non-numeric delay). Cleaning never errors;
/// rows that fail the rules are counted and skipped.
pub fn load_and_clean(path: &Path) -> Result<(Vec<FlightRecord>, LoadReport)> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open flight records at {}", path.display()))?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for result in rdr.deserialize() {
        let raw: RawFlightRecord = result?;
        report.rows_read += 1;

        if raw.fl_date.year() == EXCLUDED_YEAR {
            report.dropped_excluded_year += 1;
            continue;
        }

        let (airline, dep_delay, arr_delay, cancelled) =
            match (raw.airline, raw.dep_delay, raw.arr_delay, raw.cancelled) {
                (Some(a), Some(d), Some(r), Some(c)) => (a, d, r, c),
                _ => {
                    report.dropped_missing_fields += 1;
                    continue;
                }
            };

        records.push(FlightRecord {
            date: raw.fl_date,
            airline,
            origin: raw.origin,
            dest: raw.dest,
            dep_delay,
            arr_delay,
            cancelled,
        });
    }

    report.kept = records.len();
    debug!(
        rows_read = report.rows_read,
        kept = report.kept,
        "Flight records loaded"
    );

    Ok((records, report))
}

//! Data types produced by the aggregation pipeline.
//!
//! Field names are serialized in the exact casing the front-end consumes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one airline across all flights touching an
/// airport.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirlineSummary {
    #[serde(rename = "AIRLINE")]
    pub airline: String,
    #[serde(rename = "AVG_DEP_DELAY")]
    pub avg_dep_delay: f64,
    #[serde(rename = "TOTAL_FLIGHTS")]
    pub total_flights: usize,
    #[serde(rename = "AVG_ARR_DELAY")]
    pub avg_arr_delay: f64,
    #[serde(rename = "CANCELLATION_RATE")]
    pub cancellation_rate: f64,
}

/// Aggregate statistics for one `(month, airline)` group at an airport.
/// Only groups meeting the minimum flight count are reported.
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyAirlineSummary {
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "AIRLINE")]
    pub airline: String,
    #[serde(rename = "AVG_DEP_DELAY")]
    pub avg_dep_delay: f64,
    #[serde(rename = "TOTAL_FLIGHTS")]
    pub total_flights: usize,
    #[serde(rename = "CANCELLATION_RATE")]
    pub cancellation_rate: f64,
}

/// Everything reported for a single airport.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirportPerformance {
    pub name: String,
    #[serde(rename = "airlinePerformance")]
    pub airline_performance: Vec<AirlineSummary>,
    #[serde(rename = "monthlyPerformance")]
    pub monthly_performance: Vec<MonthlyAirlineSummary>,
}

/// Entry in the flat airport listing used by the front-end selector.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirportListEntry {
    pub code: String,
    pub name: String,
}

/// Complete analysis output, serialized as a single JSON document.
///
/// The `airports` map preserves catalog order, keeping repeated runs over
/// the same input byte-identical.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub airports: IndexMap<String, AirportPerformance>,
    #[serde(rename = "airportList")]
    pub airport_list: Vec<AirportListEntry>,
}

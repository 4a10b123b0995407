//! Assembles the complete analysis report across the airport catalog.

use crate::analyzers::aggregate::{airline_performance, airport_flights, monthly_performance};
use crate::analyzers::types::{AirportListEntry, AirportPerformance, AnalysisResult};
use crate::catalog::MAJOR_AIRPORTS;
use crate::loader::FlightRecord;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Runs the aggregation for every catalog airport and collects the results
/// into the document shape the front-end consumes.
///
/// An airport with no matching flights still gets an entry, with empty
/// performance lists.
pub fn analyze_all(records: &[FlightRecord]) -> AnalysisResult {
    let mut airports = IndexMap::new();

    for (code, name) in MAJOR_AIRPORTS {
        let flights = airport_flights(records, code);
        if flights.is_empty() {
            warn!(airport = *code, "No flights matched airport");
        } else {
            debug!(airport = *code, flights = flights.len(), "Aggregating airport");
        }

        airports.insert(
            (*code).to_string(),
            AirportPerformance {
                name: (*name).to_string(),
                airline_performance: airline_performance(&flights),
                monthly_performance: monthly_performance(&flights),
            },
        );
    }

    let airport_list = MAJOR_AIRPORTS
        .iter()
        .map(|(code, name)| AirportListEntry {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect();

    AnalysisResult {
        airports,
        airport_list,
    }
}

//! Per-airport grouping and aggregation of flight records.

use crate::analyzers::types::{AirlineSummary, MonthlyAirlineSummary};
use crate::analyzers::utility::mean;
use crate::loader::FlightRecord;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Minimum flights a `(month, airline)` group needs before it is reported.
/// Smaller monthly samples are statistically meaningless and suppressed.
/// The airline view has no such floor.
pub const MIN_MONTHLY_FLIGHTS: usize = 50;

/// Delay and cancellation series for one group of flights.
#[derive(Default)]
struct DelayGroup {
    dep_delays: Vec<f64>,
    arr_delays: Vec<f64>,
    cancellations: Vec<f64>,
}

impl DelayGroup {
    fn push(&mut self, record: &FlightRecord) {
        self.dep_delays.push(record.dep_delay);
        self.arr_delays.push(record.arr_delay);
        self.cancellations.push(record.cancelled);
    }

    fn len(&self) -> usize {
        self.dep_delays.len()
    }
}

/// Selects the flights touching `code` as either origin or destination.
pub fn airport_flights<'a>(records: &'a [FlightRecord], code: &str) -> Vec<&'a FlightRecord> {
    records
        .iter()
        .filter(|r| r.origin.as_deref() == Some(code) || r.dest.as_deref() == Some(code))
        .collect()
}

/// Groups `flights` by airline and computes each group's averages.
///
/// Rows come out sorted by airline identifier. Every airline present in the
/// input appears, even with a single flight.
pub fn airline_performance(flights: &[&FlightRecord]) -> Vec<AirlineSummary> {
    let mut groups: BTreeMap<&str, DelayGroup> = BTreeMap::new();

    for record in flights {
        groups.entry(record.airline.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(airline, group)| AirlineSummary {
            airline: airline.to_string(),
            avg_dep_delay: mean(&group.dep_delays),
            total_flights: group.len(),
            avg_arr_delay: mean(&group.arr_delays),
            cancellation_rate: mean(&group.cancellations),
        })
        .collect()
}

/// Groups `flights` by `(month, airline)` and computes each group's
/// averages, discarding groups below [`MIN_MONTHLY_FLIGHTS`].
///
/// Rows come out sorted by month, then airline.
pub fn monthly_performance(flights: &[&FlightRecord]) -> Vec<MonthlyAirlineSummary> {
    let mut groups: BTreeMap<(u32, &str), DelayGroup> = BTreeMap::new();

    for record in flights {
        groups
            .entry((record.date.month(), record.airline.as_str()))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.len() >= MIN_MONTHLY_FLIGHTS)
        .map(|((month, airline), group)| MonthlyAirlineSummary {
            month,
            airline: airline.to_string(),
            avg_dep_delay: mean(&group.dep_delays),
            total_flights: group.len(),
            cancellation_rate: mean(&group.cancellations),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        date: (i32, u32, u32),
        airline: &str,
        origin: &str,
        dest: &str,
        dep_delay: f64,
        arr_delay: f64,
        cancelled: f64,
    ) -> FlightRecord {
        FlightRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            airline: airline.to_string(),
            origin: Some(origin.to_string()),
            dest: Some(dest.to_string()),
            dep_delay,
            arr_delay,
            cancelled,
        }
    }

    #[test]
    fn test_airport_filter_matches_origin_or_dest() {
        let records = vec![
            record((2019, 1, 1), "DL", "ATL", "LAX", 1.0, 1.0, 0.0),
            record((2019, 1, 2), "DL", "JFK", "ATL", 1.0, 1.0, 0.0),
            record((2019, 1, 3), "DL", "JFK", "LAX", 1.0, 1.0, 0.0),
        ];

        let flights = airport_flights(&records, "ATL");
        assert_eq!(flights.len(), 2);
        assert!(
            flights
                .iter()
                .all(|f| f.origin.as_deref() == Some("ATL") || f.dest.as_deref() == Some("ATL"))
        );
    }

    #[test]
    fn test_airport_filter_skips_records_without_endpoints() {
        let mut r = record((2019, 1, 1), "DL", "ATL", "LAX", 1.0, 1.0, 0.0);
        r.origin = None;
        r.dest = None;
        let records = vec![r];

        assert!(airport_flights(&records, "ATL").is_empty());
    }

    #[test]
    fn test_airline_summary_means_and_count() {
        let records = vec![
            record((2019, 1, 1), "DL", "ATL", "LAX", 10.0, 5.0, 0.0),
            record((2019, 2, 1), "DL", "ATL", "JFK", 20.0, 15.0, 0.0),
            record((2019, 3, 1), "DL", "SEA", "ATL", 30.0, 25.0, 0.0),
        ];
        let flights = airport_flights(&records, "ATL");

        let summaries = airline_performance(&flights);
        assert_eq!(summaries.len(), 1);
        let dl = &summaries[0];
        assert_eq!(dl.airline, "DL");
        assert_eq!(dl.avg_dep_delay, 20.0);
        assert_eq!(dl.total_flights, 3);
        assert_eq!(dl.avg_arr_delay, 15.0);
        assert_eq!(dl.cancellation_rate, 0.0);
    }

    #[test]
    fn test_airline_summary_cancellation_rate() {
        let records = vec![
            record((2019, 1, 1), "AA", "DFW", "ATL", 0.0, 0.0, 1.0),
            record((2019, 1, 2), "AA", "DFW", "ATL", 0.0, 0.0, 0.0),
            record((2019, 1, 3), "AA", "DFW", "ATL", 0.0, 0.0, 0.0),
            record((2019, 1, 4), "AA", "DFW", "ATL", 0.0, 0.0, 0.0),
        ];
        let flights = airport_flights(&records, "ATL");

        let summaries = airline_performance(&flights);
        assert_eq!(summaries[0].cancellation_rate, 0.25);
    }

    #[test]
    fn test_airline_summary_single_flight_is_valid() {
        let records = vec![record((2019, 1, 1), "WN", "LAS", "ATL", -4.0, -9.0, 0.0)];
        let flights = airport_flights(&records, "ATL");

        let summaries = airline_performance(&flights);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_flights, 1);
        assert_eq!(summaries[0].avg_dep_delay, -4.0);
    }

    #[test]
    fn test_airline_summaries_sorted_by_airline() {
        let records = vec![
            record((2019, 1, 1), "WN", "ATL", "LAS", 1.0, 1.0, 0.0),
            record((2019, 1, 1), "AA", "ATL", "DFW", 1.0, 1.0, 0.0),
            record((2019, 1, 1), "DL", "ATL", "JFK", 1.0, 1.0, 0.0),
        ];
        let flights = airport_flights(&records, "ATL");

        let airlines: Vec<_> = airline_performance(&flights)
            .into_iter()
            .map(|s| s.airline)
            .collect();
        assert_eq!(airlines, vec!["AA", "DL", "WN"]);
    }

    #[test]
    fn test_empty_airport_yields_empty_summaries() {
        let records = vec![record((2019, 1, 1), "DL", "JFK", "LAX", 1.0, 1.0, 0.0)];
        let flights = airport_flights(&records, "ATL");

        assert!(airline_performance(&flights).is_empty());
        assert!(monthly_performance(&flights).is_empty());
    }

    #[test]
    fn test_monthly_threshold_boundary() {
        // 49 flights in January: suppressed. 50 in February: reported.
        let mut records = Vec::new();
        for day in 1..=28 {
            records.push(record((2019, 1, (day % 28) + 1), "DL", "ATL", "LAX", 5.0, 5.0, 0.0));
        }
        for _ in 0..21 {
            records.push(record((2019, 1, 1), "DL", "ATL", "LAX", 5.0, 5.0, 0.0));
        }
        for _ in 0..50 {
            records.push(record((2019, 2, 1), "DL", "ATL", "LAX", 8.0, 8.0, 0.0));
        }
        let flights = airport_flights(&records, "ATL");

        let monthly = monthly_performance(&flights);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].month, 2);
        assert_eq!(monthly[0].total_flights, 50);
        assert_eq!(monthly[0].avg_dep_delay, 8.0);
    }

    #[test]
    fn test_monthly_groups_split_by_airline() {
        // 50 DL + 50 AA in the same month produce two rows, both reported.
        let mut records = Vec::new();
        for _ in 0..50 {
            records.push(record((2019, 6, 1), "DL", "ATL", "LAX", 10.0, 10.0, 0.0));
            records.push(record((2019, 6, 1), "AA", "ATL", "DFW", 20.0, 20.0, 1.0));
        }
        let flights = airport_flights(&records, "ATL");

        let monthly = monthly_performance(&flights);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].airline, "AA");
        assert_eq!(monthly[0].cancellation_rate, 1.0);
        assert_eq!(monthly[1].airline, "DL");
        assert_eq!(monthly[1].avg_dep_delay, 10.0);
    }

    #[test]
    fn test_monthly_sorted_by_month_then_airline() {
        let mut records = Vec::new();
        for _ in 0..50 {
            records.push(record((2019, 3, 1), "DL", "ATL", "LAX", 1.0, 1.0, 0.0));
            records.push(record((2019, 1, 1), "WN", "ATL", "LAS", 1.0, 1.0, 0.0));
            records.push(record((2019, 1, 1), "AA", "ATL", "DFW", 1.0, 1.0, 0.0));
        }
        let flights = airport_flights(&records, "ATL");

        let keys: Vec<_> = monthly_performance(&flights)
            .into_iter()
            .map(|s| (s.month, s.airline))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1, "AA".to_string()),
                (1, "WN".to_string()),
                (3, "DL".to_string()),
            ]
        );
    }
}

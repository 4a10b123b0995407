//! Fixed catalog of the major airports covered by the report.

/// The airports the report covers, as `(IATA code, display name)` pairs.
/// Report output preserves this ordering.
pub static MAJOR_AIRPORTS: &[(&str, &str)] = &[
    ("ATL", "Atlanta International"),
    ("LAX", "Los Angeles International"),
    ("ORD", "Chicago O'Hare"),
    ("DFW", "Dallas/Fort Worth"),
    ("DEN", "Denver International"),
    ("JFK", "New York JFK"),
    ("SFO", "San Francisco International"),
    ("SEA", "Seattle-Tacoma"),
    ("LAS", "Las Vegas"),
    ("MCO", "Orlando International"),
    ("MIA", "Miami International"),
    ("CLT", "Charlotte Douglas"),
    ("EWR", "Newark Liberty"),
    ("PHX", "Phoenix Sky Harbor"),
    ("IAH", "Houston Bush"),
];

/// Returns the display name for `code`, if it is a catalog airport.
pub fn display_name(code: &str) -> Option<&'static str> {
    MAJOR_AIRPORTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

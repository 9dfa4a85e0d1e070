pub type AirportCode = String;

/// Airports the sample generator draws routes from.
pub const AIRPORTS: [&str; 12] = [
    "ATL", "LAX", "ORD", "DFW", "DEN", "JFK", "SFO", "SEA", "LAS", "MCO", "MIA", "BOS",
];

/// Airport codes compare without regard to case or surrounding whitespace.
pub fn same_airport(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

pub fn normalize(code: &str) -> AirportCode {
    code.trim().to_ascii_uppercase()
}

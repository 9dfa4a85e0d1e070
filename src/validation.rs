//! Structural and business rules a flight record must satisfy before the
//! store accepts it.
//!
//! Every rule is evaluated on every call so a caller sees all problems with a
//! record at once.

use crate::airport::same_airport;
use crate::flight::FlightRecord;
use std::fmt;
use thiserror::Error;

pub const MAX_PASSENGERS: i32 = 800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Flight number is required")]
    MissingFlightNumber,
    #[error("Airline is required")]
    MissingAirline,
    #[error("Origin is required")]
    MissingOrigin,
    #[error("Destination is required")]
    MissingDestination,
    #[error("Origin and destination cannot be the same")]
    SameOriginAndDestination,
    #[error("Scheduled departure must be before scheduled arrival")]
    DepartureNotBeforeArrival,
    #[error("Passenger count cannot be negative")]
    NegativePassengerCount,
    #[error("Passenger count seems unrealistic (>800)")]
    UnrealisticPassengerCount,
    #[error("{0}")]
    Other(String),
}

/// The non-empty list of violations behind a refused record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(Vec<Violation>);

impl Rejection {
    /// `None` when there is nothing to reject.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Rejection(violations))
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    #[cfg(test)]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.0.contains(violation)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for Rejection {}

/// Strategy deciding whether a record may enter a [`crate::store::FlightStore`].
pub trait Validate {
    fn validate(&self, record: &FlightRecord) -> Vec<Violation>;

    fn is_valid(&self, record: &FlightRecord) -> bool {
        self.validate(record).is_empty()
    }
}

impl<F> Validate for F
where
    F: Fn(&FlightRecord) -> Vec<Violation>,
{
    fn validate(&self, record: &FlightRecord) -> Vec<Violation> {
        self(record)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightValidator;

impl Validate for FlightValidator {
    fn validate(&self, record: &FlightRecord) -> Vec<Violation> {
        let blank = |s: &str| s.trim().is_empty();
        let mut violations = vec![];

        if blank(&record.flight_number) {
            violations.push(Violation::MissingFlightNumber);
        }
        if blank(&record.airline) {
            violations.push(Violation::MissingAirline);
        }
        if blank(&record.origin) {
            violations.push(Violation::MissingOrigin);
        }
        if blank(&record.destination) {
            violations.push(Violation::MissingDestination);
        }
        if same_airport(&record.origin, &record.destination) {
            violations.push(Violation::SameOriginAndDestination);
        }
        if record.scheduled_departure >= record.scheduled_arrival {
            violations.push(Violation::DepartureNotBeforeArrival);
        }
        if record.passenger_count < 0 {
            violations.push(Violation::NegativePassengerCount);
        }
        if record.passenger_count > MAX_PASSENGERS {
            violations.push(Violation::UnrealisticPassengerCount);
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::FlightStatus::Scheduled;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use proptest::prelude::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn valid() -> FlightRecord {
        FlightRecord {
            flight_number: "UA0042".to_string(),
            airline: "United Airlines".to_string(),
            origin: "SFO".to_string(),
            destination: "ORD".to_string(),
            scheduled_departure: noon(),
            scheduled_arrival: noon() + TimeDelta::hours(4),
            actual_departure: noon(),
            actual_arrival: noon() + TimeDelta::hours(4),
            status: Scheduled,
            passenger_count: 180,
            aircraft_type: "Boeing 737-800".to_string(),
        }
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        assert!(FlightValidator.validate(&valid()).is_empty());
        assert!(FlightValidator.is_valid(&valid()));
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let mut r = valid();
        r.flight_number = "   ".to_string();
        r.airline = String::new();
        assert_eq!(
            FlightValidator.validate(&r),
            vec![Violation::MissingFlightNumber, Violation::MissingAirline]
        );
    }

    #[test]
    fn test_all_rules_reported_together() {
        let mut r = valid();
        r.flight_number = String::new();
        r.airline = String::new();
        r.origin = String::new();
        r.destination = String::new();
        r.scheduled_arrival = r.scheduled_departure;
        r.passenger_count = -3;

        let violations = FlightValidator.validate(&r);
        // two blank airports compare equal as well
        assert_eq!(
            violations,
            vec![
                Violation::MissingFlightNumber,
                Violation::MissingAirline,
                Violation::MissingOrigin,
                Violation::MissingDestination,
                Violation::SameOriginAndDestination,
                Violation::DepartureNotBeforeArrival,
                Violation::NegativePassengerCount,
            ]
        );
    }

    #[test]
    fn test_same_airport_ignores_case() {
        let mut r = valid();
        r.destination = "sfo".to_string();
        assert_eq!(
            FlightValidator.validate(&r),
            vec![Violation::SameOriginAndDestination]
        );
    }

    #[test]
    fn test_departure_must_precede_arrival() {
        let mut r = valid();
        r.scheduled_arrival = r.scheduled_departure - TimeDelta::minutes(1);
        assert_eq!(
            FlightValidator.validate(&r),
            vec![Violation::DepartureNotBeforeArrival]
        );
    }

    #[test]
    fn test_passenger_boundaries() {
        let with = |count| {
            let mut r = valid();
            r.passenger_count = count;
            FlightValidator.validate(&r)
        };
        assert!(with(0).is_empty());
        assert!(with(800).is_empty());
        assert_eq!(with(-1), vec![Violation::NegativePassengerCount]);
        assert_eq!(with(801), vec![Violation::UnrealisticPassengerCount]);
    }

    #[test]
    fn test_rejection_message_joins_violations() {
        let rejection = Rejection::from_violations(vec![
            Violation::MissingAirline,
            Violation::UnrealisticPassengerCount,
        ])
        .unwrap();
        assert_eq!(
            rejection.to_string(),
            "Airline is required; Passenger count seems unrealistic (>800)"
        );
        assert!(rejection.contains(&Violation::MissingAirline));
        assert!(Rejection::from_violations(vec![]).is_none());
    }

    #[test]
    fn test_closure_validator() {
        let no_charters = |r: &FlightRecord| {
            if r.airline.contains("Charter") {
                vec![Violation::Other("Charter flights are not tracked".to_string())]
            } else {
                vec![]
            }
        };
        let mut r = valid();
        assert!(no_charters.is_valid(&r));
        r.airline = "Sky Charter".to_string();
        assert_eq!(
            no_charters.validate(&r)[0].to_string(),
            "Charter flights are not tracked"
        );
    }

    proptest! {
        #[test]
        fn test_passenger_range_decides_validity(count in -2000..2000i32) {
            let mut r = valid();
            r.passenger_count = count;
            prop_assert_eq!(FlightValidator.is_valid(&r), (0..=MAX_PASSENGERS).contains(&count));
        }

        #[test]
        fn test_same_route_always_rejected(code in "[a-zA-Z]{3}") {
            let mut r = valid();
            r.origin = code.to_ascii_uppercase();
            r.destination = code.to_ascii_lowercase();
            let violations = FlightValidator.validate(&r);
            prop_assert!(violations.contains(&Violation::SameOriginAndDestination));
        }

        #[test]
        fn test_message_lists_every_violation(offset in -600..600i64, count in -50..900i32) {
            let mut r = valid();
            r.scheduled_arrival = r.scheduled_departure + TimeDelta::minutes(offset);
            r.passenger_count = count;
            let violations = FlightValidator.validate(&r);
            match Rejection::from_violations(violations.clone()) {
                None => prop_assert!(offset > 0 && (0..=800).contains(&count)),
                Some(rejection) => {
                    let text = rejection.to_string();
                    for v in &violations {
                        prop_assert!(text.contains(&v.to_string()));
                    }
                }
            }
        }
    }
}

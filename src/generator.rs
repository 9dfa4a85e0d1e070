//! Synthetic flight records for demos and tests.
//!
//! Records are plausible but not guaranteed valid: callers still pass them
//! through [`crate::store::FlightStore::add`].

use crate::airport::AIRPORTS;
use crate::flight::{DELAY_THRESHOLD_MINUTES, FlightRecord, FlightStatus};
use crate::validation::{FlightValidator, Validate};
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

pub const AIRLINES: [&str; 8] = [
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Southwest Airlines",
    "JetBlue Airways",
    "Alaska Airlines",
    "Spirit Airlines",
    "Frontier Airlines",
];

/// Carrier codes, drawn independently of [`AIRLINES`].
pub const CARRIER_CODES: [&str; 8] = ["AA", "DL", "UA", "WN", "B6", "AS", "NK", "F9"];

pub const AIRCRAFT_TYPES: [&str; 6] = [
    "Boeing 737-800",
    "Airbus A320",
    "Boeing 787-9",
    "Airbus A321neo",
    "Embraer E175",
    "Boeing 777-300ER",
];

const CANCELLATION_PROBABILITY: f64 = 0.05;
const WINDOW_HOURS: i64 = 72;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

pub struct SampleGenerator {
    now: NaiveDateTime,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new(Local::now().naive_local())
    }
}

impl SampleGenerator {
    /// `now` anchors the scheduling window and decides each flight's status.
    pub fn new(now: NaiveDateTime) -> Self {
        SampleGenerator { now }
    }

    /// Midnight two days before `now`; departures fall within 72 hours of it.
    pub fn window_start(&self) -> NaiveDateTime {
        self.now.date().and_time(NaiveTime::MIN) - TimeDelta::days(2)
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<FlightRecord> {
        let flights = (0..count).map(|_| self.flight(rng)).collect::<Vec<_>>();
        debug_assert!(
            flights.iter().all(|f| FlightValidator.is_valid(f)),
            "sample generator produced an invalid flight"
        );
        debug!(count, "generated sample flights");
        flights
    }

    fn flight<R: Rng + ?Sized>(&self, rng: &mut R) -> FlightRecord {
        let scheduled_departure = self.window_start()
            + TimeDelta::hours(rng.gen_range(0..WINDOW_HOURS))
            + TimeDelta::minutes(rng.gen_range(0..60));
        let duration =
            TimeDelta::hours(rng.gen_range(1..8)) + TimeDelta::minutes(rng.gen_range(0..60));
        let scheduled_arrival = scheduled_departure + duration;

        // arrival delay drifts from departure delay to model time made up en route
        let departure_delay = rng.gen_range(-5..180);
        let arrival_delay = departure_delay + rng.gen_range(-30..60);
        let actual_departure = scheduled_departure + TimeDelta::minutes(departure_delay);
        let actual_arrival = scheduled_arrival + TimeDelta::minutes(arrival_delay);

        let origin = pick(rng, &AIRPORTS);
        let others = AIRPORTS
            .iter()
            .copied()
            .filter(|code| *code != origin)
            .collect::<Vec<_>>();
        let destination = pick(rng, &others);

        let status = if rng.gen_bool(CANCELLATION_PROBABILITY) {
            FlightStatus::Cancelled
        } else {
            self.status_at(scheduled_departure, actual_departure, actual_arrival)
        };

        FlightRecord {
            flight_number: format!(
                "{}{}",
                pick(rng, &CARRIER_CODES),
                rng.gen_range(1000..10000u32)
            ),
            airline: pick(rng, &AIRLINES).to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            scheduled_departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            status,
            passenger_count: rng.gen_range(50..300),
            aircraft_type: pick(rng, &AIRCRAFT_TYPES).to_string(),
        }
    }

    fn status_at(
        &self,
        scheduled_departure: NaiveDateTime,
        actual_departure: NaiveDateTime,
        actual_arrival: NaiveDateTime,
    ) -> FlightStatus {
        if actual_arrival < self.now - TimeDelta::hours(2) {
            FlightStatus::Arrived
        } else if actual_departure < self.now {
            FlightStatus::Departed
        } else if actual_departure - scheduled_departure
            > TimeDelta::minutes(DELAY_THRESHOLD_MINUTES)
        {
            FlightStatus::Delayed
        } else {
            FlightStatus::OnTime
        }
    }
}

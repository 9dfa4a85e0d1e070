use crate::airport::AirportCode;
use crate::error::Error;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A flight counts as delayed once either delay exceeds this many minutes.
pub const DELAY_THRESHOLD_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    OnTime,
    Delayed,
    Departed,
    Arrived,
    Cancelled,
    Diverted,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 7] = [
        FlightStatus::Scheduled,
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::Departed,
        FlightStatus::Arrived,
        FlightStatus::Cancelled,
        FlightStatus::Diverted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::OnTime => "OnTime",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Departed => "Departed",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Diverted => "Diverted",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FlightStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace([' ', '-', '_'], "");
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownStatus(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub scheduled_departure: NaiveDateTime,
    pub scheduled_arrival: NaiveDateTime,
    pub actual_departure: NaiveDateTime,
    pub actual_arrival: NaiveDateTime,
    pub status: FlightStatus,
    pub passenger_count: i32,
    pub aircraft_type: String,
}

impl FlightRecord {
    pub fn departure_delay(&self) -> TimeDelta {
        self.actual_departure - self.scheduled_departure
    }

    pub fn arrival_delay(&self) -> TimeDelta {
        self.actual_arrival - self.scheduled_arrival
    }

    /// Exactly fifteen minutes late is still on time.
    pub fn is_delayed(&self) -> bool {
        let threshold = TimeDelta::minutes(DELAY_THRESHOLD_MINUTES);
        self.departure_delay() > threshold || self.arrival_delay() > threshold
    }

    pub fn flight_duration(&self) -> TimeDelta {
        self.actual_arrival - self.actual_departure
    }

    /// The larger of the two delays, used when averaging delayed flights.
    pub fn worst_delay(&self) -> TimeDelta {
        self.departure_delay().max(self.arrival_delay())
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}->{}",
            self.flight_number, self.airline, self.origin, self.destination
        )
    }
}

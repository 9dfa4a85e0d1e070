use crate::error::{Error, Result};
use crate::flight::FlightRecord;
use crate::validation::{FlightValidator, Rejection, Validate, Violation};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of importing a batch of records from a file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<(String, Rejection)>,
}

/// In-memory collection of accepted flights.
///
/// Records only enter through [`FlightStore::add`], which runs the validator
/// the store was built with. Accepted records are never modified afterwards.
pub struct FlightStore<V: Validate = FlightValidator> {
    validator: V,
    flights: Vec<FlightRecord>,
}

impl FlightStore<FlightValidator> {
    pub fn new() -> Self {
        Self::with_validator(FlightValidator)
    }
}

impl Default for FlightStore<FlightValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> FlightStore<V> {
    pub fn with_validator(validator: V) -> Self {
        FlightStore {
            validator,
            flights: vec![],
        }
    }

    /// Appends `record` when it passes validation. A rejection is a normal
    /// outcome and leaves the store untouched.
    pub fn add(&mut self, record: FlightRecord) -> std::result::Result<(), Rejection> {
        match Rejection::from_violations(self.validator.validate(&record)) {
            Some(rejection) => {
                info!(flight = %record.flight_number, %rejection, "flight rejected");
                Err(rejection)
            }
            None => {
                debug!(flight = %record.flight_number, "flight accepted");
                self.flights.push(record);
                Ok(())
            }
        }
    }

    /// Adds every record in order, collecting the refused ones.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = FlightRecord>) -> LoadReport {
        let mut report = LoadReport::default();
        for record in records {
            let flight_number = record.flight_number.clone();
            match self.add(record) {
                Ok(()) => report.accepted += 1,
                Err(rejection) => {
                    warn!(flight = %flight_number, %rejection, "skipping invalid flight");
                    report.rejected.push((flight_number, rejection));
                }
            }
        }
        report
    }

    /// Imports a JSON array of records, each passing through [`FlightStore::add`].
    /// An entry that does not decode as a flight is rejected without aborting the import.
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadReport> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&data)?;

        let mut malformed = vec![];
        let mut records = vec![];
        for entry in entries {
            let flight_number = entry
                .get("flight_number")
                .and_then(|v| v.as_str())
                .unwrap_or("?")
                .to_string();
            match serde_json::from_value::<FlightRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let violation = Violation::Other(format!("Malformed record: {}", e));
                    warn!(flight = %flight_number, %violation, "skipping malformed flight");
                    if let Some(rejection) = Rejection::from_violations(vec![violation]) {
                        malformed.push((flight_number, rejection));
                    }
                }
            }
        }

        let mut report = self.add_all(records);
        report.rejected.extend(malformed);
        info!(
            path = %path.display(),
            accepted = report.accepted,
            rejected = report.rejected.len(),
            "loaded flights"
        );
        Ok(report)
    }

    pub fn by_airline(&self, text: &str) -> Vec<&FlightRecord> {
        let needle = text.to_lowercase();
        self.flights
            .iter()
            .filter(|f| f.airline.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn by_destination(&self, text: &str) -> Vec<&FlightRecord> {
        let needle = text.to_lowercase();
        self.flights
            .iter()
            .filter(|f| f.destination.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn delayed(&self) -> Vec<&FlightRecord> {
        self.flights.iter().filter(|f| f.is_delayed()).collect()
    }

    /// Flights whose scheduled departure falls on `date`, whatever the time of day.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&FlightRecord> {
        self.flights
            .iter()
            .filter(|f| f.scheduled_departure.date() == date)
            .collect()
    }

    /// Snapshot of every accepted record, in insertion order.
    pub fn all(&self) -> Vec<FlightRecord> {
        self.flights.clone()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

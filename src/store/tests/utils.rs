use crate::flight::{FlightRecord, FlightStatus};
use crate::store::FlightStore;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap()
}

pub fn flight(
    flight_number: &str,
    airline: &str,
    origin: &str,
    destination: &str,
    scheduled_departure: NaiveDateTime,
    duration_minutes: i64,
) -> FlightRecord {
    let scheduled_arrival = scheduled_departure + TimeDelta::minutes(duration_minutes);
    FlightRecord {
        flight_number: flight_number.to_string(),
        airline: airline.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        scheduled_departure,
        scheduled_arrival,
        actual_departure: scheduled_departure,
        actual_arrival: scheduled_arrival,
        status: FlightStatus::OnTime,
        passenger_count: 150,
        aircraft_type: "Airbus A320".to_string(),
    }
}

pub fn with_delays(mut record: FlightRecord, departure: i64, arrival: i64) -> FlightRecord {
    record.actual_departure = record.scheduled_departure + TimeDelta::minutes(departure);
    record.actual_arrival = record.scheduled_arrival + TimeDelta::minutes(arrival);
    record.status = if record.is_delayed() {
        FlightStatus::Delayed
    } else {
        FlightStatus::OnTime
    };
    record
}

pub fn add_flight(store: &mut FlightStore, record: FlightRecord) {
    store.add(record).expect("fixture flight should be valid");
}

/// Three flights on 10/14: one delayed Delta departure and two punctual ones.
pub fn sample_store() -> FlightStore {
    let mut store = FlightStore::new();
    add_flight(
        &mut store,
        with_delays(
            flight("DL0100", "Delta Air Lines", "ATL", "JFK", at(14, 8, 0), 135),
            20,
            5,
        ),
    );
    add_flight(
        &mut store,
        flight("UA0200", "United Airlines", "SFO", "ORD", at(14, 23, 30), 250),
    );
    add_flight(
        &mut store,
        flight("AA0300", "American Airlines", "DFW", "LAX", at(15, 6, 15), 200),
    );
    store
}

pub fn arb_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ATL"), Just("jfk"), Just("JFK"), Just("SEA"), Just(""), Just(" ")]
}

pub fn arb_flight() -> impl Strategy<Value = FlightRecord> {
    (
        arb_code(),
        arb_code(),
        -120..600i64,
        -10..820i32,
        prop_oneof![Just(""), Just("Alaska Airlines"), Just("JetBlue Airways")],
    )
        .prop_map(|(org, dst, dur, pax, airline)| {
            let mut f = flight("AS0001", airline, org, dst, at(14, 12, 0), dur);
            f.passenger_count = pax;
            f
        })
}

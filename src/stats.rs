//! Aggregate metrics over a set of flight records.

use crate::flight::{FlightRecord, FlightStatus};
use std::collections::HashMap;
use std::hash::Hash;

const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusShare {
    pub status: FlightStatus,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub delayed: usize,
    pub on_time: usize,
    pub delayed_pct: f64,
    pub on_time_pct: f64,
    /// Mean of the worse of the two delays, over delayed flights only.
    /// `None` when nothing is delayed.
    pub average_delay_minutes: Option<f64>,
    pub total_passengers: i64,
    pub average_passengers: f64,
    pub top_airlines: Vec<Ranked>,
    pub top_destinations: Vec<Ranked>,
    pub statuses: Vec<StatusShare>,
}

impl Statistics {
    pub fn rounded_average_passengers(&self) -> i64 {
        self.average_passengers.round() as i64
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    part as f64 * 100.0 / total as f64
}

/// Counts per key, most frequent first. Equal counts keep the order in which
/// the keys first appeared.
fn count_by<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index = HashMap::<K, usize>::new();
    let mut counts = Vec::<(K, usize)>::new();
    for key in keys {
        match index.get(&key) {
            Some(i) => counts[*i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn top<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Ranked> {
    count_by(names)
        .into_iter()
        .take(TOP_N)
        .map(|(name, count)| Ranked {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Summarises `flights`. Returns `None` for an empty set.
pub fn statistics(flights: &[FlightRecord]) -> Option<Statistics> {
    if flights.is_empty() {
        return None;
    }
    let total = flights.len();

    let delay_minutes = flights
        .iter()
        .filter(|f| f.is_delayed())
        .map(|f| f.worst_delay().num_seconds() as f64 / 60.0)
        .collect::<Vec<_>>();
    let delayed = delay_minutes.len();
    let on_time = total - delayed;
    let average_delay_minutes = if delay_minutes.is_empty() {
        None
    } else {
        Some(delay_minutes.iter().sum::<f64>() / delayed as f64)
    };

    let total_passengers = flights.iter().map(|f| f.passenger_count as i64).sum::<i64>();

    let statuses = count_by(flights.iter().map(|f| f.status))
        .into_iter()
        .map(|(status, count)| StatusShare {
            status,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    Some(Statistics {
        total,
        delayed,
        on_time,
        delayed_pct: percentage(delayed, total),
        on_time_pct: percentage(on_time, total),
        average_delay_minutes,
        total_passengers,
        average_passengers: total_passengers as f64 / total as f64,
        top_airlines: top(flights.iter().map(|f| f.airline.as_str())),
        top_destinations: top(flights.iter().map(|f| f.destination.as_str())),
        statuses,
    })
}

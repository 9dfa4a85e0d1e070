use crate::flight::FlightRecord;
use crate::stats::{Ranked, Statistics};
use crate::time::{Minutes, format_timestamp};
use colored::Colorize;
use std::fmt::Write;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "Flight")]
    pub flight_number: String,
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Sched. departure")]
    pub scheduled_departure: String,
    #[tabled(rename = "Sched. arrival")]
    pub scheduled_arrival: String,
    #[tabled(rename = "Dep. delay")]
    pub departure_delay: String,
    #[tabled(rename = "Arr. delay")]
    pub arrival_delay: String,
    #[tabled(rename = "Block time")]
    pub duration: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Pax")]
    pub passengers: i32,
    #[tabled(rename = "Aircraft")]
    pub aircraft_type: String,
}

impl From<&FlightRecord> for FlightRow {
    fn from(f: &FlightRecord) -> Self {
        let status = if f.is_delayed() {
            f.status.to_string().yellow().to_string()
        } else {
            f.status.to_string()
        };
        FlightRow {
            flight_number: f.flight_number.clone(),
            airline: f.airline.clone(),
            route: format!("{} -> {}", f.origin, f.destination),
            scheduled_departure: format_timestamp(&f.scheduled_departure),
            scheduled_arrival: format_timestamp(&f.scheduled_arrival),
            departure_delay: Minutes(f.departure_delay()).to_string(),
            arrival_delay: Minutes(f.arrival_delay()).to_string(),
            duration: Minutes(f.flight_duration()).to_string().trim_start_matches('+').to_string(),
            status,
            passengers: f.passenger_count,
            aircraft_type: f.aircraft_type.clone(),
        }
    }
}

pub fn flight_table<'a>(flights: impl IntoIterator<Item = &'a FlightRecord>) -> String {
    let rows = flights.into_iter().map(FlightRow::from).collect::<Vec<_>>();
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

fn ranking(out: &mut String, title: &str, ranked: &[Ranked]) {
    let _ = writeln!(out, "\n{}", title.bold());
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(out, "  {}. {:<24} {:>5}", i + 1, r.name, r.count);
    }
}

/// Human-readable statistics, percentages to one decimal place.
pub fn statistics_report(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Flight statistics".bold().underline());
    let _ = writeln!(out, "  Total flights:        {}", stats.total);
    let _ = writeln!(
        out,
        "  Delayed:              {} ({:.1}%)",
        stats.delayed, stats.delayed_pct
    );
    let _ = writeln!(
        out,
        "  On time:              {} ({:.1}%)",
        stats.on_time, stats.on_time_pct
    );
    let average_delay = match stats.average_delay_minutes {
        Some(mins) => format!("{:.1} min", mins),
        None => "n/a".to_string(),
    };
    let _ = writeln!(out, "  Average delay:        {}", average_delay);
    let _ = writeln!(out, "  Total passengers:     {}", stats.total_passengers);
    let _ = writeln!(
        out,
        "  Avg. passengers:      {}",
        stats.rounded_average_passengers()
    );

    ranking(&mut out, "Top airlines", &stats.top_airlines);
    ranking(&mut out, "Top destinations", &stats.top_destinations);

    let _ = writeln!(out, "\n{}", "Status distribution".bold());
    for share in &stats.statuses {
        let _ = writeln!(
            out,
            "  {:<12} {:>5} ({:.1}%)",
            share.status.to_string(),
            share.count,
            share.percentage
        );
    }
    out
}

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";
pub const DATE_FORMAT: &str = "%m/%d/%Y";

pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        Error::InvalidTimestamp {
            input: input.to_string(),
        }
    })
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Signed whole-minute rendering of a time delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(pub TimeDelta);

impl Minutes {
    pub fn total(&self) -> i64 {
        self.0.num_minutes()
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        let sign = if total < 0 { "-" } else { "+" };
        let hours = total.abs() / 60;
        let mins = total.abs() % 60;
        if hours > 0 {
            write!(f, "{}{}h {:02}m", sign, hours, mins)
        } else {
            write!(f, "{}{}m", sign, mins)
        }
    }
}

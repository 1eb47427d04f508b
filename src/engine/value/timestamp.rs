use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::engine::errors::MarshalError;
use crate::engine::value::date::Date;
use crate::engine::value::time::{MICROS_PER_DAY, Time};

/// Microseconds since 1970-01-01T00:00:00 together with the decoded calendar
/// date and time of day. Every i64 value is representable; only conversion
/// into `chrono` types can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    micros: i64,
    date: Date,
    time: Time,
}

impl Timestamp {
    pub fn from_micros(micros: i64) -> Self {
        let per_day = MICROS_PER_DAY as i64;
        // |i64::MAX / MICROS_PER_DAY| is about 1.07e8, well inside i32.
        let days = micros.div_euclid(per_day) as i32;
        let rem = micros.rem_euclid(per_day) as u64;
        Self {
            micros,
            date: Date::from_days(days),
            time: Time::from_micros(rem).unwrap_or_default(),
        }
    }

    /// `None` when the combined instant does not fit in i64 microseconds.
    pub fn from_parts(date: Date, time: Time) -> Option<Self> {
        let micros = (date.days() as i64)
            .checked_mul(MICROS_PER_DAY as i64)?
            .checked_add(time.micros_since_midnight() as i64)?;
        Some(Self { micros, date, time })
    }

    pub fn micros(&self) -> i64 {
        self.micros
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn to_naive_date_time(&self) -> Result<NaiveDateTime, MarshalError> {
        let date = self
            .date
            .to_naive_date()
            .map_err(|_| MarshalError::overflow(self, "chrono::NaiveDateTime"))?;
        Ok(date.and_time(self.time.to_naive_time()?))
    }

    pub fn to_utc(&self) -> Result<DateTime<Utc>, MarshalError> {
        self.to_naive_date_time()
            .map(|naive| naive.and_utc())
            .map_err(|_| MarshalError::overflow(self, "chrono::DateTime<Utc>"))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

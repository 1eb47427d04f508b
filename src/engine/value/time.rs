use std::fmt;

use chrono::NaiveTime;

use crate::engine::errors::MarshalError;

pub const MICROS_PER_SECOND: u64 = 1_000_000;
pub const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
pub const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;
pub const MICROS_PER_DAY: u64 = 24 * MICROS_PER_HOUR;

/// Time of day with microsecond resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    micros: u64,
}

impl Time {
    /// `None` unless `0 <= micros < 86_400_000_000`.
    pub fn from_micros(micros: u64) -> Option<Self> {
        (micros < MICROS_PER_DAY).then_some(Self { micros })
    }

    pub fn from_hms_micro(hour: u32, minute: u32, second: u32, micro: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 || micro as u64 >= MICROS_PER_SECOND {
            return None;
        }
        Some(Self {
            micros: hour as u64 * MICROS_PER_HOUR
                + minute as u64 * MICROS_PER_MINUTE
                + second as u64 * MICROS_PER_SECOND
                + micro as u64,
        })
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        Self::from_hms_micro(hour, minute, second, 0)
    }

    pub fn micros_since_midnight(&self) -> u64 {
        self.micros
    }

    pub fn hour(&self) -> u32 {
        (self.micros / MICROS_PER_HOUR) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.micros % MICROS_PER_HOUR / MICROS_PER_MINUTE) as u32
    }

    pub fn second(&self) -> u32 {
        (self.micros % MICROS_PER_MINUTE / MICROS_PER_SECOND) as u32
    }

    pub fn microsecond(&self) -> u32 {
        (self.micros % MICROS_PER_SECOND) as u32
    }

    pub fn to_naive_time(&self) -> Result<NaiveTime, MarshalError> {
        NaiveTime::from_hms_micro_opt(self.hour(), self.minute(), self.second(), self.microsecond())
            .ok_or_else(|| MarshalError::overflow(self, "chrono::NaiveTime"))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.microsecond() != 0 {
            write!(f, ".{:06}", self.microsecond())?;
        }
        Ok(())
    }
}
